//! Fixed descriptive records: health, contract metadata, and the endpoint
//! catalog. None of these touch live state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "AI Meeting Scheduler Agent";

/// API version reported by the health check and documentation.
pub const SERVICE_VERSION: &str = "1.0.0";

const SERVICE_DESCRIPTION: &str = "AI Meeting Scheduler Agent Backend API";

const CONTRACT_ADDRESS: &str = "0x0871E02Ea98fd5E495201A76F651029cAfbAdCBC";
const CONTRACT_NETWORK: &str = "Base Mainnet";
const CONTRACT_FEATURES: [&str; 4] = [
    "Meeting scheduling",
    "Escrow payments",
    "Automated refunds",
    "Host pricing management",
];

const ENDPOINTS: [(&str, &str); 8] = [
    ("GET /", "Health check"),
    ("GET /agent/status", "Get agent status"),
    ("POST /agent/start", "Start the AI agent"),
    ("POST /agent/stop", "Stop the AI agent"),
    ("GET /messages", "Get recent messages"),
    ("POST /messages", "Add a message (testing)"),
    ("GET /contract/info", "Get smart contract info"),
    ("GET /docs", "This documentation"),
];

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthInfo {
    /// The service is healthy whenever it can answer.
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Static metadata about the scheduling contract. No chain lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub contract_address: String,
    pub network: String,
    pub features: Vec<String>,
}

impl ContractInfo {
    /// The deployed scheduling contract.
    #[must_use]
    pub fn scheduler() -> Self {
        Self {
            contract_address: CONTRACT_ADDRESS.to_string(),
            network: CONTRACT_NETWORK.to_string(),
            features: CONTRACT_FEATURES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Endpoint catalog served at `/docs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// `"METHOD /path"` to one-line description.
    pub endpoints: BTreeMap<String, String>,
    pub description: String,
    pub version: String,
}

impl Documentation {
    /// Catalog of every route the service exposes.
    #[must_use]
    pub fn catalog() -> Self {
        Self {
            endpoints: ENDPOINTS
                .iter()
                .map(|(route, summary)| ((*route).to_string(), (*summary).to_string()))
                .collect(),
            description: SERVICE_DESCRIPTION.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}
