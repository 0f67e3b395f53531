// tests/common/request.rs
use axum::{
    body::{self, Body},
    http::{header, Method, Request, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// RSVP 送信リクエストを作成
pub fn rsvp_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/send")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// 生のボディで RSVP 送信リクエストを作成
pub fn raw_rsvp_request(content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method(Method::POST).uri("/api/send");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
