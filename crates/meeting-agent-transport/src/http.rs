//! HTTP transport: routes, handlers, and middleware.

use std::{sync::Arc, time::Instant};

use axum::{
    Json, Router,
    extract::{Request, State, rejection::JsonRejection},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use meeting_agent_core::{AgentStatus, ContractInfo, Documentation, HealthInfo, MessageStore};
use meeting_agent_session::StatusService;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::{
    error::ApiError,
    protocol::{AddMessageResponse, ControlResponse, MessagesResponse, submission_from_body},
};

/// Shared handler state.
pub type ServiceState<S> = State<Arc<StatusService<S>>>;

/// Create the API router over `service`.
///
/// All routes answer any origin.
///
/// # Example
/// ```ignore
/// let service = Arc::new(StatusService::new(MemoryMessageStore::new()));
/// axum::serve(listener, create_router(service)).await?;
/// ```
#[must_use]
pub fn create_router<S>(service: Arc<StatusService<S>>) -> Router
where
    S: MessageStore + 'static,
{
    Router::new()
        .route("/", get(health_check))
        .route("/agent/status", get(get_status::<S>))
        .route("/agent/start", post(start_agent::<S>))
        .route("/agent/stop", post(stop_agent::<S>))
        .route("/messages", get(list_messages::<S>).post(add_message::<S>))
        .route("/contract/info", get(contract_info))
        .route("/docs", get(documentation))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Tags each request with an id and logs its outcome.
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!("request", request_id = %request_id);
    let response = next.run(request).instrument(span).await;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

/// GET /
async fn health_check() -> Json<HealthInfo> {
    Json(HealthInfo::healthy())
}

/// GET /agent/status
async fn get_status<S>(State(service): ServiceState<S>) -> Json<AgentStatus>
where
    S: MessageStore + 'static,
{
    Json(service.status().await)
}

/// POST /agent/start
async fn start_agent<S>(State(service): ServiceState<S>) -> Json<ControlResponse>
where
    S: MessageStore + 'static,
{
    Json(ControlResponse::started(service.start_agent().await))
}

/// POST /agent/stop
async fn stop_agent<S>(State(service): ServiceState<S>) -> Json<ControlResponse>
where
    S: MessageStore + 'static,
{
    Json(ControlResponse::stopped(service.stop_agent().await))
}

/// GET /messages
async fn list_messages<S>(
    State(service): ServiceState<S>,
) -> Result<Json<MessagesResponse>, ApiError>
where
    S: MessageStore + 'static,
{
    let recent = service.list_messages().await?;
    Ok(Json(recent.into()))
}

/// POST /messages
///
/// A missing, malformed, or message-less body is rejected before the
/// service is touched. Other fields are never validated.
async fn add_message<S>(
    State(service): ServiceState<S>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AddMessageResponse>, ApiError>
where
    S: MessageStore + 'static,
{
    let submission = match payload {
        Ok(Json(body)) => submission_from_body(&body),
        Err(rejection) => {
            tracing::warn!("Invalid message body: {rejection}");
            return Err(ApiError::Validation);
        }
    };

    let entry = service.add_message(submission).await?;
    Ok(Json(AddMessageResponse::added(entry)))
}

/// GET /contract/info
async fn contract_info() -> Json<ContractInfo> {
    Json(ContractInfo::scheduler())
}

/// GET /docs
async fn documentation() -> Json<Documentation> {
    Json(Documentation::catalog())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, StatusCode, header},
    };
    use meeting_agent_session::MemoryMessageStore;
    use serde_json::json;
    use tokio_test::assert_ok;
    use tower::ServiceExt;

    use super::*;

    fn make_app() -> Router {
        create_router(Arc::new(StatusService::new(MemoryMessageStore::new())))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        assert_ok!(app.clone().oneshot(builder.body(body).unwrap()).await)
    }

    async fn body_json(response: Response) -> Value {
        let body = assert_ok!(axum::body::to_bytes(response.into_body(), 1024 * 64).await);
        assert_ok!(serde_json::from_slice(&body))
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = send(&make_app(), Method::GET, "/", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({
                "status": "healthy",
                "service": "AI Meeting Scheduler Agent",
                "version": "1.0.0"
            })
        );
    }

    #[tokio::test]
    async fn test_initial_status() {
        let resp = send(&make_app(), Method::GET, "/agent/status", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({
                "running": false,
                "wallet_address": "",
                "xmtp_address": "",
                "last_message": "",
                "message_count": 0
            })
        );
    }

    #[tokio::test]
    async fn test_start_then_status() {
        let app = make_app();

        let resp = send(&app, Method::POST, "/agent/start", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["message"], "Agent start command received");
        assert_eq!(json["status"]["running"], true);
        assert_eq!(
            json["status"]["wallet_address"],
            "Agent wallet address will be shown here"
        );

        let resp = send(&app, Method::GET, "/agent/status", None).await;
        assert_eq!(body_json(resp).await["running"], true);
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let app = make_app();
        send(&app, Method::POST, "/agent/start", None).await;

        let first = body_json(send(&app, Method::POST, "/agent/stop", None).await).await;
        let second = body_json(send(&app, Method::POST, "/agent/stop", None).await).await;

        assert_eq!(first, second);
        assert_eq!(second["message"], "Agent stopped");
        assert_eq!(second["status"]["running"], false);
        assert_eq!(
            second["status"]["xmtp_address"],
            "XMTP address will be shown here"
        );
    }

    #[tokio::test]
    async fn test_add_then_list_message() {
        let app = make_app();

        let resp = send(
            &app,
            Method::POST,
            "/messages",
            Some(json!({"message": "Book a meeting", "sender": "alice", "response": "ok"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let created = body_json(resp).await;
        assert_eq!(created["message"], "Message added successfully");
        assert_eq!(created["entry"]["sender"], "alice");
        assert_eq!(created["entry"]["message"], "Book a meeting");
        assert_eq!(created["entry"]["response"], "ok");
        assert!(created["entry"]["timestamp"].is_number());

        let resp = send(&app, Method::GET, "/messages", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let listed = body_json(resp).await;
        assert_eq!(listed["total_count"], 1);
        assert_eq!(listed["messages"], Value::Array(vec![created["entry"].clone()]));

        let status = body_json(send(&app, Method::GET, "/agent/status", None).await).await;
        assert_eq!(status["message_count"], 1);
        assert_eq!(status["last_message"], "Book a meeting");
    }

    #[tokio::test]
    async fn test_add_message_defaults() {
        let resp = send(
            &make_app(),
            Method::POST,
            "/messages",
            Some(json!({"message": "hi"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let entry = body_json(resp).await["entry"].clone();
        assert_eq!(entry["sender"], "unknown");
        assert_eq!(entry["response"], "No response generated");
    }

    #[tokio::test]
    async fn test_add_message_ignores_non_string_optionals() {
        let app = make_app();

        let resp = send(
            &app,
            Method::POST,
            "/messages",
            Some(json!({"message": "hi", "sender": 42})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["entry"]["sender"], "unknown");

        let resp = send(
            &app,
            Method::POST,
            "/messages",
            Some(json!({"message": "hi", "response": ["a"]})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await["entry"]["response"],
            "No response generated"
        );

        let status = body_json(send(&app, Method::GET, "/agent/status", None).await).await;
        assert_eq!(status["message_count"], 2);
    }

    #[tokio::test]
    async fn test_add_message_requires_message() {
        let app = make_app();

        for body in [json!({}), json!({"sender": "x"}), json!({"message": 5})] {
            let resp = send(&app, Method::POST, "/messages", Some(body)).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(resp).await,
                json!({"error": "Message is required"})
            );
        }

        let status = body_json(send(&app, Method::GET, "/agent/status", None).await).await;
        assert_eq!(status["message_count"], 0);
    }

    #[tokio::test]
    async fn test_add_message_rejects_missing_or_malformed_body() {
        let app = make_app();

        let resp = send(&app, Method::POST, "/messages", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/messages")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], "Message is required");

        let listed = body_json(send(&app, Method::GET, "/messages", None).await).await;
        assert_eq!(listed["total_count"], 0);
    }

    #[tokio::test]
    async fn test_list_windows_last_ten() {
        let app = make_app();
        for i in 0..12 {
            send(
                &app,
                Method::POST,
                "/messages",
                Some(json!({"message": format!("m{i}")})),
            )
            .await;
        }

        let listed = body_json(send(&app, Method::GET, "/messages", None).await).await;
        let messages = listed["messages"].as_array().unwrap();
        assert_eq!(listed["total_count"], 12);
        assert_eq!(messages.len(), 10);
        assert_eq!(messages[0]["message"], "m2");
        assert_eq!(messages[9]["message"], "m11");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let listed = body_json(send(&make_app(), Method::GET, "/messages", None).await).await;
        assert_eq!(listed, json!({"messages": [], "total_count": 0}));
    }

    #[tokio::test]
    async fn test_contract_info() {
        let resp = send(&make_app(), Method::GET, "/contract/info", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(
            json["contract_address"],
            "0x0871E02Ea98fd5E495201A76F651029cAfbAdCBC"
        );
        assert_eq!(json["network"], "Base Mainnet");
        assert_eq!(json["features"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_docs() {
        let resp = send(&make_app(), Method::GET, "/docs", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["endpoints"]["GET /docs"], "This documentation");
        assert_eq!(json["endpoints"].as_object().unwrap().len(), 8);
        assert_eq!(json["description"], "AI Meeting Scheduler Agent Backend API");
        assert_eq!(json["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let resp = make_app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
