use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Post {
    pub(crate) username: String,
    pub(crate) caption: String,
    pub(crate) image_url: String,
    pub(crate) timestamp: i64,
}

/// Ответ сервиса на `GET`: лента лежит под ключом `Items`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FeedResponse {
    #[serde(rename = "Items")]
    pub(crate) items: Vec<Post>,
}

/// Тело `POST`-запроса: `image` — base64 без префикса data-URI.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewPost {
    pub(crate) username: String,
    pub(crate) caption: String,
    pub(crate) image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_response_parses_items_key() {
        let raw = r#"{
            "Items": [
                {"username": "max", "caption": "hi", "image_url": "https://e/1.webp", "timestamp": 10},
                {"username": "kate", "caption": "yo", "image_url": "https://e/2.webp", "timestamp": 20},
                {"username": "lena", "caption": "ok", "image_url": "https://e/3.webp", "timestamp": 30}
            ]
        }"#;

        let feed: FeedResponse = serde_json::from_str(raw).expect("feed must parse");
        assert_eq!(feed.items.len(), 3);
        assert_eq!(feed.items[0].username, "max");
        assert_eq!(feed.items[2].timestamp, 30);
    }

    #[test]
    fn feed_response_accepts_empty_items() {
        let feed: FeedResponse = serde_json::from_str(r#"{"Items": []}"#).expect("must parse");
        assert!(feed.items.is_empty());
    }

    #[test]
    fn new_post_serializes_flat_fields() {
        let post = NewPost {
            username: "max".to_string(),
            caption: "hi".to_string(),
            image: "aGVsbG8=".to_string(),
        };

        let raw = serde_json::to_value(&post).expect("must serialize");
        assert_eq!(raw["username"], "max");
        assert_eq!(raw["caption"], "hi");
        assert_eq!(raw["image"], "aGVsbG8=");
    }
}
