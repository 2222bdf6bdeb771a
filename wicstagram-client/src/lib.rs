//! Клиентская библиотека для фотоленты Wicstagram.
//!
//! Сервис — один HTTP endpoint: `GET` отдаёт ленту (`{ "Items": [...] }`),
//! `POST` создаёт пост (`{ username, caption, image }`). Библиотека
//! оборачивает его в типизированный API (`WicstagramClient`) и валидирует
//! обязательные поля до обращения к сети.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{WicstagramError, WicstagramResult};
pub use http_client::HttpClient;
pub use models::{NewPost, Post};

use base64::Engine as _;

/// Кодирует содержимое файла картинки в base64 для поля `image`.
pub fn encode_image(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

fn validate_new_post(post: &NewPost) -> WicstagramResult<()> {
    if post.username.trim().is_empty() {
        return Err(WicstagramError::InvalidRequest(
            "username не должен быть пустым".to_string(),
        ));
    }
    if post.caption.trim().is_empty() {
        return Err(WicstagramError::InvalidRequest(
            "caption не должен быть пустым".to_string(),
        ));
    }
    if post.image.trim().is_empty() {
        return Err(WicstagramError::InvalidRequest(
            "image не должен быть пустым".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
/// Клиент фотоленты Wicstagram.
pub struct WicstagramClient {
    http_client: HttpClient,
}

impl WicstagramClient {
    /// Создаёт клиент с полным URL endpoint'а,
    /// например `https://xxxx.execute-api.us-east-1.amazonaws.com/default/wicstagram`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(endpoint),
        }
    }

    /// URL endpoint'а, с которым работает клиент.
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Возвращает ленту постов в порядке, который отдал сервис.
    pub async fn list_posts(&self) -> WicstagramResult<Vec<Post>> {
        self.http_client.list_posts().await
    }

    /// Создаёт пост.
    ///
    /// `image` — base64-полезная нагрузка без префикса data-URI. Пустые или
    /// состоящие из пробелов поля отклоняются с `InvalidRequest` до отправки.
    /// Возвращает сырой JSON-ответ сервиса: его содержимое используется
    /// только для логирования.
    pub async fn create_post(
        &self,
        username: &str,
        caption: &str,
        image: &str,
    ) -> WicstagramResult<serde_json::Value> {
        let post = NewPost {
            username: username.trim().to_string(),
            caption: caption.trim().to_string(),
            image: image.to_string(),
        };
        validate_new_post(&post)?;

        self.http_client.create_post(&post).await
    }
}
