use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `wicstagram-client`.
pub enum WicstagramError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Сервис ответил неуспешным HTTP-статусом.
    #[error("service error (http {status}): {message}")]
    Service {
        /// HTTP-статус ответа.
        status: u16,
        /// Текст ошибки из тела ответа либо дефолтное описание статуса.
        message: String,
    },

    /// Некорректный запрос, отклонён до обращения к сети.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций `wicstagram-client`.
pub type WicstagramResult<T> = Result<T, WicstagramError>;

impl WicstagramError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| default_status_message(status));
        Self::Service {
            status: status.as_u16(),
            message,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

fn default_status_message(status: reqwest::StatusCode) -> String {
    match status.as_u16() {
        400 => "сервис отклонил запрос".to_string(),
        403 => "доступ к сервису запрещён".to_string(),
        404 => "endpoint не найден".to_string(),
        413 => "картинка слишком большая".to_string(),
        500..=599 => "ошибка на стороне сервиса".to_string(),
        _ => format!("http status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_http_status_keeps_explicit_message() {
        let err =
            WicstagramError::from_http_status(reqwest::StatusCode::BAD_REQUEST, Some("bad".into()));
        match err {
            WicstagramError::Service { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn from_http_status_falls_back_to_default_message() {
        let err = WicstagramError::from_http_status(reqwest::StatusCode::NOT_FOUND, None);
        match err {
            WicstagramError::Service { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "endpoint не найден");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn server_errors_share_one_default_message() {
        for code in [500u16, 502, 503] {
            let status = reqwest::StatusCode::from_u16(code).expect("valid status");
            let err = WicstagramError::from_http_status(status, None);
            match err {
                WicstagramError::Service { message, .. } => {
                    assert_eq!(message, "ошибка на стороне сервиса");
                }
                other => panic!("expected Service error, got {other:?}"),
            }
        }
    }
}
