use gloo_net::http::Request;

use crate::models::{FeedResponse, NewPost, Post};

/// Один endpoint на оба метода: `GET` — лента, `POST` — новый пост.
const ENDPOINT: &str = match option_env!("WICSTAGRAM_ENDPOINT") {
    Some(value) => value,
    None => "https://9wr63b62h3.execute-api.us-east-1.amazonaws.com/default/wicstagram",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let fallback = match status {
        400 => "Сервис отклонил запрос".to_string(),
        403 => "Доступ к сервису запрещён".to_string(),
        404 => "Endpoint не найден".to_string(),
        413 => "Картинка слишком большая".to_string(),
        500..=599 => "Ошибка сервера".to_string(),
        _ => format!("HTTP ошибка {status}"),
    };

    let message = if text.trim().is_empty() { fallback } else { text };

    ApiError::Http { status, message }
}

pub(crate) async fn fetch_feed() -> Result<Vec<Post>, ApiError> {
    let response = Request::get(ENDPOINT)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let feed = response
        .json::<FeedResponse>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(feed.items)
}

pub(crate) async fn create_post(post: &NewPost) -> Result<serde_json::Value, ApiError> {
    let response = Request::post(ENDPOINT)
        .json(post)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
