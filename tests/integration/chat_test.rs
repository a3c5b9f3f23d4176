//! Agent chat: single and group delivery, speaker labels, and the
//! failure-as-system-message rule.

use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use marketscope_api::{build_http_client, ChatClient};

use marketscope_console::models::ChatRole;
use marketscope_console::services::ChatService;
use marketscope_console::state::AppState;

use crate::support;

fn service(base_url: &str) -> ChatService {
    ChatService::new(ChatClient::new(build_http_client(), base_url.to_string()))
}

#[tokio::test]
async fn test_single_chat_labels_the_agent() {
    let app = Router::new().route(
        "/api/chat/single",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["agent"], "risk_control");
            assert_eq!(body["message"], "how risky is 600519?");
            Json(json!({"success": true, "response": "position sizing looks aggressive"}))
        }),
    );

    let base_url = support::serve(app).await;
    let service = service(&base_url);
    let mut state = AppState::new();

    service
        .send_single(&mut state, "risk_control", "how risky is 600519?")
        .await
        .unwrap();

    assert_eq!(state.chat.len(), 2);
    assert_eq!(state.chat[0].role, ChatRole::User);
    assert_eq!(state.chat[0].speaker, "您");
    assert_eq!(state.chat[1].role, ChatRole::Agent);
    assert_eq!(state.chat[1].speaker, "风险控制智能体");
    assert_eq!(state.chat[1].content, "position sizing looks aggressive");
}

#[tokio::test]
async fn test_group_chat_appends_replies_in_server_order() {
    let app = Router::new().route(
        "/api/chat/group",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["agents"], json!(["risk_control", "sentiment"]));
            Json(json!({
                "success": true,
                "responses": [
                    {"agent": "risk_control", "response": "cautious"},
                    {"agent": "sentiment", "response": "bullish"}
                ]
            }))
        }),
    );

    let base_url = support::serve(app).await;
    let service = service(&base_url);
    let mut state = AppState::new();

    let agents = vec!["risk_control".to_string(), "sentiment".to_string()];
    service
        .send_group(&mut state, &agents, "outlook on 600519?")
        .await
        .unwrap();

    assert_eq!(state.chat.len(), 3);
    assert_eq!(state.chat[1].speaker, "风险控制智能体");
    assert_eq!(state.chat[1].content, "cautious");
    assert_eq!(state.chat[2].speaker, "舆情分析智能体");
    assert_eq!(state.chat[2].content, "bullish");
}

#[tokio::test]
async fn test_chat_refusal_lands_in_the_log() {
    let app = Router::new().route(
        "/api/chat/single",
        post(|| async { Json(json!({"success": false, "error": "agent offline"})) }),
    );

    let base_url = support::serve(app).await;
    let service = service(&base_url);
    let mut state = AppState::new();

    service
        .send_single(&mut state, "risk_control", "hello?")
        .await
        .unwrap();

    assert_eq!(state.chat.len(), 2);
    assert_eq!(state.chat[1].role, ChatRole::System);
    assert_eq!(state.chat[1].speaker, "系统");
    assert!(state.chat[1].content.contains("agent offline"));
}
