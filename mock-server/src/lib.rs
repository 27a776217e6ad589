use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

#[derive(Deserialize)]
pub struct ItemInput {
    pub name: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Item>>>;

/// How long `/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(5);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(replace_item).patch(rename_item).delete(delete_item),
        )
        .route("/echo", get(echo).post(echo))
        .route("/errors/{shape}", get(error_shape))
        .route("/text", get(plain_text))
        .route("/slow", get(slow))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Body returned with a 4xx/5xx status for each error shape a server may
/// send. Unknown shapes yield `None`.
pub fn error_body(shape: &str) -> Option<(StatusCode, String)> {
    let (status, body) = match shape {
        "exception" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"ExceptionMessage": "Object reference not set", "Message": "An error has occurred."})
                .to_string(),
        ),
        "exception-camel" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"exceptionMessage": "Timeout expired"}).to_string(),
        ),
        "message" => (StatusCode::NOT_FOUND, json!({"Message": "not found"}).to_string()),
        "message-camel" => (StatusCode::FORBIDDEN, json!({"message": "forbidden"}).to_string()),
        "messages" => (
            StatusCode::BAD_REQUEST,
            json!({"Messages": ["Name is required", "Email is invalid"]}).to_string(),
        ),
        "messages-camel" => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({"messages": ["Too short"]}).to_string(),
        ),
        "empty" => (StatusCode::BAD_REQUEST, "{}".to_string()),
        "garbage" => (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>".to_string()),
        _ => return None,
    };
    Some((status, body))
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.values().cloned().collect())
}

async fn create_item(State(db): State<Db>, Json(input): Json<ItemInput>) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: Uuid::new_v4(),
        name: input.name,
    };
    db.write().await.insert(item.id, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<Uuid>) -> Response {
    let items = db.read().await;
    match items.get(&id) {
        Some(item) => Json(item.clone()).into_response(),
        None => not_found(id),
    }
}

async fn replace_item(State(db): State<Db>, Path(id): Path<Uuid>, Json(input): Json<ItemInput>) -> Response {
    let item = Item { id, name: input.name };
    db.write().await.insert(id, item.clone());
    Json(item).into_response()
}

async fn rename_item(State(db): State<Db>, Path(id): Path<Uuid>, Json(input): Json<ItemInput>) -> Response {
    let mut items = db.write().await;
    match items.get_mut(&id) {
        Some(item) => {
            item.name = input.name;
            Json(item.clone()).into_response()
        }
        None => not_found(id),
    }
}

/// Answers with the JSON literal `null` on success.
async fn delete_item(State(db): State<Db>, Path(id): Path<Uuid>) -> Response {
    match db.write().await.remove(&id) {
        Some(_) => Json(Value::Null).into_response(),
        None => not_found(id),
    }
}

fn not_found(id: Uuid) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"Message": format!("Item {id} not found")})),
    )
        .into_response()
}

/// Reflects query parameters and selected request headers back as JSON.
/// Every `content-type` value received is listed.
async fn echo(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    let content_types: Vec<&str> = headers
        .get_all(CONTENT_TYPE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    Json(json!({
        "query": params,
        "authorization": header("authorization"),
        "acceptLanguage": header("accept-language"),
        "contentTypes": content_types,
    }))
}

async fn error_shape(Path(shape): Path<String>) -> Response {
    match error_body(&shape) {
        Some((status, body)) => (status, body).into_response(),
        None => (StatusCode::NOT_FOUND, format!("unknown error shape {shape}")).into_response(),
    }
}

async fn plain_text() -> &'static str {
    "pong"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(SLOW_DELAY).await;
    Json(Value::Null)
}
