use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{WicstagramError, WicstagramResult};
use crate::models::{NewPost, Post};

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    username: &'a str,
    caption: &'a str,
    image: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostDto {
    username: String,
    caption: String,
    image_url: String,
    timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct FeedResponseDto {
    #[serde(rename = "Items")]
    items: Vec<PostDto>,
}

impl From<PostDto> for Post {
    fn from(value: PostDto) -> Self {
        Self {
            username: value.username,
            caption: value.caption,
            image_url: value.image_url,
            timestamp: value.timestamp,
        }
    }
}

impl From<FeedResponseDto> for Vec<Post> {
    fn from(value: FeedResponseDto) -> Self {
        value.items.into_iter().map(Post::from).collect()
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с единственным endpoint'ом Wicstagram.
///
/// Один и тот же URL обслуживает `GET` (лента) и `POST` (создание поста).
pub struct HttpClient {
    endpoint: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с полным URL endpoint'а.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// URL endpoint'а, с которым работает клиент.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn decode_error(response: reqwest::Response) -> WicstagramError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body.error.or(body.message),
            Err(_) => None,
        };
        WicstagramError::from_http_status(status, message)
    }

    /// Возвращает текущую ленту постов.
    ///
    /// Порядок — как отдал сервис, клиент его не меняет.
    pub async fn list_posts(&self) -> WicstagramResult<Vec<Post>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching feed");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(WicstagramError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dto = response
            .json::<FeedResponseDto>()
            .await
            .map_err(WicstagramError::from_reqwest)?;
        let posts: Vec<Post> = dto.into();

        tracing::debug!(count = posts.len(), "feed fetched");
        Ok(posts)
    }

    /// Создаёт пост и возвращает сырой JSON-ответ сервиса.
    ///
    /// Содержимое ответа нигде не интерпретируется, только логируется
    /// вызывающей стороной.
    pub async fn create_post(&self, post: &NewPost) -> WicstagramResult<serde_json::Value> {
        let payload = CreatePostRequestDto {
            username: &post.username,
            caption: &post.caption,
            image: &post.image,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            username = %post.username,
            image_len = post.image.len(),
            "creating post"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(WicstagramError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(WicstagramError::from_reqwest)?;

        tracing::debug!(%body, "post created");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_response_parses_items_key() {
        let raw = r#"{
            "Items": [
                {"username": "max", "caption": "hi", "image_url": "https://e/1.webp", "timestamp": 10},
                {"username": "kate", "caption": "yo", "image_url": "https://e/2.webp", "timestamp": 20}
            ]
        }"#;

        let dto: FeedResponseDto = serde_json::from_str(raw).expect("feed must parse");
        let posts: Vec<Post> = dto.into();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].username, "max");
        assert_eq!(posts[1].timestamp, 20);
    }

    #[test]
    fn feed_response_accepts_empty_items() {
        let dto: FeedResponseDto = serde_json::from_str(r#"{"Items": []}"#).expect("must parse");
        let posts: Vec<Post> = dto.into();
        assert!(posts.is_empty());
    }

    #[test]
    fn create_post_request_serializes_flat_fields() {
        let payload = CreatePostRequestDto {
            username: "max",
            caption: "hi",
            image: "aGVsbG8=",
        };

        let raw = serde_json::to_value(&payload).expect("must serialize");
        assert_eq!(raw["username"], "max");
        assert_eq!(raw["caption"], "hi");
        assert_eq!(raw["image"], "aGVsbG8=");
    }

    #[test]
    fn endpoint_is_kept_verbatim() {
        let client = HttpClient::new("https://api.example.com/default/wicstagram");
        assert_eq!(client.endpoint(), "https://api.example.com/default/wicstagram");
    }
}
