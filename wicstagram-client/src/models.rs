use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель поста из ленты.
pub struct Post {
    /// Имя автора.
    pub username: String,
    /// Подпись к фотографии.
    pub caption: String,
    /// URL картинки (сервис отдаёт уже разрешённую ссылку).
    pub image_url: String,
    /// Время создания в секундах Unix-эпохи, проставляется сервисом.
    pub timestamp: i64,
}

impl Post {
    /// Время создания поста как `DateTime<Utc>`.
    ///
    /// `None`, если сервис вернул timestamp вне допустимого диапазона.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Новый пост для отправки на сервис.
///
/// `image` — base64-полезная нагрузка без префикса data-URI.
pub struct NewPost {
    /// Имя автора.
    pub username: String,
    /// Подпись к фотографии.
    pub caption: String,
    /// Картинка в base64.
    pub image: String,
}
