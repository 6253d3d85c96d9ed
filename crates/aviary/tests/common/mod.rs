//! Test utilities: an in-process double of the platform API server.
//!
//! The double speaks the real wire protocol: enveloped JSON bodies,
//! bearer auth, server-side pagination defaults, and the backend's habit
//! of marshalling a fresh conversation's nil message slice as `null`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

pub const TEST_TOKEN: &str = "test-token-1";
pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "password123";

/// In-memory platform state, inspectable from tests.
#[derive(Default)]
pub struct PlatformState {
    pub agents: Mutex<HashMap<String, Value>>,
    pub conversations: Mutex<HashMap<String, Value>>,
    pub tools: Mutex<HashMap<String, Value>>,
    pub knowledge_bases: Mutex<HashMap<String, Value>>,
}

/// Spawn the double on an ephemeral port and return its base URL.
pub async fn spawn_platform() -> (String, Arc<PlatformState>) {
    let state = Arc::new(PlatformState::default());
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}

fn router(state: Arc<PlatformState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/ping", get(ping))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/agents", get(list_agents).post(create_agent))
        .route(
            "/api/v1/agents/{id}",
            get(get_agent).put(update_agent).delete(delete_agent),
        )
        .route(
            "/api/v1/conversations",
            get(list_conversations).post(create_conversation),
        )
        .route("/api/v1/conversations/{id}", get(get_conversation))
        .route("/api/v1/conversations/{id}/messages", post(send_message))
        .route("/api/v1/tools", get(list_tools).post(create_tool))
        .route("/api/v1/tools/{id}", get(get_tool).delete(delete_tool))
        .route(
            "/api/v1/knowledge-bases",
            get(list_knowledge_bases).post(create_knowledge_base),
        )
        .route(
            "/api/v1/knowledge-bases/{id}",
            get(get_knowledge_base).delete(delete_knowledge_base),
        )
        .route(
            "/api/v1/knowledge-bases/{id}/documents",
            post(upload_document),
        )
        .with_state(state)
}

fn ok(data: Value) -> Response {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": data,
        "timestamp": Utc::now().timestamp(),
    }))
    .into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "code": status.as_u16(),
            "message": message,
            "timestamp": Utc::now().timestamp(),
        })),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {TEST_TOKEN}");
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected)
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn paginate(mut items: Vec<Value>, params: &HashMap<String, String>) -> Response {
    items.sort_by(|a, b| {
        a["created_at"]
            .as_str()
            .cmp(&b["created_at"].as_str())
            .then(a["id"].as_str().cmp(&b["id"].as_str()))
    });

    let page: i64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let page_size: i64 = params
        .get("page_size")
        .and_then(|p| p.parse().ok())
        .unwrap_or(10);
    let total = items.len() as i64;
    let start = ((page - 1) * page_size).max(0) as usize;
    let page_items: Vec<Value> = items
        .into_iter()
        .skip(start)
        .take(page_size.max(0) as usize)
        .collect();

    ok(json!({
        "items": page_items,
        "page": page,
        "page_size": page_size,
        "total": total,
    }))
}

async fn health() -> Response {
    Json(json!({"status": "healthy"})).into_response()
}

async fn ping() -> Response {
    Json(json!({"message": "pong"})).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email != TEST_EMAIL || password != TEST_PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "invalid credentials");
    }

    ok(json!({
        "token": TEST_TOKEN,
        "user": {
            "id": "user-1",
            "name": "Admin",
            "email": TEST_EMAIL,
            "role": "admin",
        },
    }))
}

async fn list_agents(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let mut items: Vec<Value> = state.agents.lock().unwrap().values().cloned().collect();
    if let Some(status) = params.get("status") {
        items.retain(|agent| agent["status"] == status.as_str());
    }
    if let Some(agent_type) = params.get("type") {
        items.retain(|agent| agent["type"] == agent_type.as_str());
    }
    paginate(items, &params)
}

async fn create_agent(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let id = Uuid::new_v4().to_string();
    let agent = json!({
        "id": id,
        "name": body["name"],
        "description": body["description"].as_str().unwrap_or(""),
        "type": body["type"].as_str().unwrap_or("single"),
        "model_config": body.get("model_config").cloned().unwrap_or_else(|| json!({})),
        "tools": body.get("tools").cloned().unwrap_or_else(|| json!([])),
        "knowledge_bases": body.get("knowledge_bases").cloned().unwrap_or_else(|| json!([])),
        "prompt_template": body["prompt_template"].as_str().unwrap_or(""),
        "parameters": body.get("parameters").cloned().unwrap_or_else(|| json!({})),
        "status": "draft",
        "version": "1.0.0",
        "created_by": "user-1",
        "tags": [],
        "folder": "",
        "is_public": false,
        "created_at": now(),
        "updated_at": now(),
    });
    state.agents.lock().unwrap().insert(id, agent.clone());
    ok(agent)
}

async fn get_agent(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    match state.agents.lock().unwrap().get(&id) {
        Some(agent) => ok(agent.clone()),
        None => error(StatusCode::NOT_FOUND, "agent not found"),
    }
}

async fn update_agent(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let mut agents = state.agents.lock().unwrap();
    let Some(agent) = agents.get_mut(&id) else {
        return error(StatusCode::NOT_FOUND, "agent not found");
    };

    // Only the keys present in the body are overwritten.
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            agent[key.as_str()] = value.clone();
        }
    }
    agent["updated_at"] = json!(now());
    ok(agent.clone())
}

async fn delete_agent(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    match state.agents.lock().unwrap().remove(&id) {
        Some(_) => ok(json!({"id": id})),
        None => error(StatusCode::NOT_FOUND, "agent not found"),
    }
}

async fn list_conversations(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let mut items: Vec<Value> = state
        .conversations
        .lock()
        .unwrap()
        .values()
        .cloned()
        .collect();
    if let Some(agent_id) = params.get("agent_id") {
        items.retain(|conversation| conversation["agent_id"] == agent_id.as_str());
    }
    paginate(items, &params)
}

async fn create_conversation(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let agent_id = body["agent_id"].as_str().unwrap_or_default().to_string();
    if !state.agents.lock().unwrap().contains_key(&agent_id) {
        return error(StatusCode::NOT_FOUND, "agent not found");
    }

    let id = Uuid::new_v4().to_string();
    let conversation = json!({
        "id": id,
        "agent_id": agent_id,
        "user_id": "user-1",
        "title": body["title"].as_str().unwrap_or("New Conversation"),
        // A fresh conversation has a nil message slice server-side, which
        // marshals as null.
        "messages": null,
        "context": body.get("context").cloned().unwrap_or_else(|| json!({})),
        "status": "active",
        "created_at": now(),
        "updated_at": now(),
    });
    state
        .conversations
        .lock()
        .unwrap()
        .insert(id, conversation.clone());
    ok(conversation)
}

async fn get_conversation(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    match state.conversations.lock().unwrap().get(&id) {
        Some(conversation) => ok(conversation.clone()),
        None => error(StatusCode::NOT_FOUND, "conversation not found"),
    }
}

async fn send_message(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let mut conversations = state.conversations.lock().unwrap();
    let Some(conversation) = conversations.get_mut(&id) else {
        return error(StatusCode::NOT_FOUND, "conversation not found");
    };

    let content = body["content"].as_str().unwrap_or_default();
    let user_message = json!({
        "id": Uuid::new_v4().to_string(),
        "role": "user",
        "content": content,
        "timestamp": now(),
    });
    let assistant_message = json!({
        "id": Uuid::new_v4().to_string(),
        "role": "assistant",
        "content": format!("You said: {content}"),
        "timestamp": now(),
    });

    if !conversation["messages"].is_array() {
        conversation["messages"] = json!([]);
    }
    let log = conversation["messages"].as_array_mut().unwrap();
    log.push(user_message.clone());
    log.push(assistant_message.clone());
    conversation["last_message_at"] = json!(now());
    conversation["updated_at"] = json!(now());

    ok(json!({
        "conversation_id": id,
        "messages": [user_message, assistant_message],
    }))
}

async fn list_tools(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let mut items: Vec<Value> = state.tools.lock().unwrap().values().cloned().collect();
    if let Some(tool_type) = params.get("type") {
        items.retain(|tool| tool["type"] == tool_type.as_str());
    }
    if let Some(category) = params.get("category") {
        items.retain(|tool| tool["category"] == category.as_str());
    }
    paginate(items, &params)
}

async fn create_tool(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let id = Uuid::new_v4().to_string();
    let tool = json!({
        "id": id,
        "name": body["name"],
        "description": body["description"].as_str().unwrap_or(""),
        "type": body["type"].as_str().unwrap_or("function"),
        "schema": body.get("schema").cloned().unwrap_or_else(|| json!({})),
        "implementation": body["implementation"].as_str().unwrap_or(""),
        "version": "1.0.0",
        "is_public": false,
        "created_by": "user-1",
        "category": body["category"].as_str().unwrap_or(""),
        "tags": [],
        "created_at": now(),
        "updated_at": now(),
    });
    state.tools.lock().unwrap().insert(id, tool.clone());
    ok(tool)
}

async fn get_tool(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    match state.tools.lock().unwrap().get(&id) {
        Some(tool) => ok(tool.clone()),
        None => error(StatusCode::NOT_FOUND, "tool not found"),
    }
}

async fn delete_tool(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    match state.tools.lock().unwrap().remove(&id) {
        Some(_) => ok(json!({"id": id})),
        None => error(StatusCode::NOT_FOUND, "tool not found"),
    }
}

async fn list_knowledge_bases(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let mut items: Vec<Value> = state
        .knowledge_bases
        .lock()
        .unwrap()
        .values()
        .cloned()
        .collect();
    if let Some(kb_type) = params.get("type") {
        items.retain(|kb| kb["type"] == kb_type.as_str());
    }
    paginate(items, &params)
}

async fn create_knowledge_base(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let id = Uuid::new_v4().to_string();
    let kb = json!({
        "id": id,
        "name": body["name"],
        "description": body["description"].as_str().unwrap_or(""),
        "type": body["type"].as_str().unwrap_or("document"),
        "embedding_model": body["embedding_model"]
            .as_str()
            .unwrap_or("text-embedding-ada-002"),
        "chunk_config": body.get("chunk_config").cloned().unwrap_or_else(|| json!({})),
        "created_by": "user-1",
        "document_count": 0,
        "vector_count": 0,
        "created_at": now(),
        "updated_at": now(),
    });
    state.knowledge_bases.lock().unwrap().insert(id, kb.clone());
    ok(kb)
}

async fn get_knowledge_base(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    match state.knowledge_bases.lock().unwrap().get(&id) {
        Some(kb) => ok(kb.clone()),
        None => error(StatusCode::NOT_FOUND, "knowledge base not found"),
    }
}

async fn delete_knowledge_base(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    match state.knowledge_bases.lock().unwrap().remove(&id) {
        Some(_) => ok(json!({"id": id})),
        None => error(StatusCode::NOT_FOUND, "knowledge base not found"),
    }
}

async fn upload_document(
    State(state): State<Arc<PlatformState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "missing or invalid token");
    }

    let mut knowledge_bases = state.knowledge_bases.lock().unwrap();
    let Some(kb) = knowledge_bases.get_mut(&id) else {
        return error(StatusCode::NOT_FOUND, "knowledge base not found");
    };

    let count = kb["document_count"].as_i64().unwrap_or(0) + 1;
    kb["document_count"] = json!(count);
    kb["updated_at"] = json!(now());

    ok(json!({
        "id": Uuid::new_v4().to_string(),
        "knowledge_base_id": id,
        "title": body["title"],
        "content": body["content"],
        "metadata": body.get("metadata").cloned().unwrap_or_else(|| json!({})),
        "status": "processing",
        "created_at": now(),
        "updated_at": now(),
    }))
}
