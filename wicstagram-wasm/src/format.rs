use chrono::{DateTime, Local, TimeZone, Utc};

/// Строка даты для карточки поста: день недели и время, как в ленте.
pub(crate) fn post_date_line(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(at) => day_time_string(at.with_timezone(&Local)),
        None => "время неизвестно".to_string(),
    }
}

fn day_time_string<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %-I:%M %p").to_string()
}

/// Отрезает префикс `data:<mime>;base64,` и возвращает чистую base64-нагрузку.
///
/// Строку без запятой возвращает как есть.
pub(crate) fn strip_data_url_prefix(data_url: &str) -> &str {
    match data_url.split_once(',') {
        Some((_, payload)) => payload,
        None => data_url,
    }
}

/// Кнопка «Опубликовать» активна, только когда есть кадр и оба текстовых поля.
pub(crate) fn submit_ready(image: Option<&str>, username: &str, caption: &str) -> bool {
    image.is_some_and(|img| !img.trim().is_empty())
        && !username.trim().is_empty()
        && !caption.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_time_string_formats_weekday_and_clock() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid ts");
        assert_eq!(day_time_string(at), "Tuesday, 10:13 PM");
    }

    #[test]
    fn post_date_line_handles_out_of_range_timestamp() {
        assert_eq!(post_date_line(i64::MAX), "время неизвестно");
    }

    #[test]
    fn strip_data_url_prefix_cuts_mime_prefix() {
        let payload = strip_data_url_prefix("data:image/webp;base64,UklGRg==");
        assert_eq!(payload, "UklGRg==");
    }

    #[test]
    fn strip_data_url_prefix_keeps_bare_payload() {
        assert_eq!(strip_data_url_prefix("UklGRg=="), "UklGRg==");
    }

    #[test]
    fn strip_data_url_prefix_cuts_only_first_comma() {
        assert_eq!(strip_data_url_prefix("data:text/plain;base64,a,b"), "a,b");
    }

    #[test]
    fn submit_ready_requires_all_fields() {
        assert!(submit_ready(Some("data:image/webp;base64,AA=="), "max", "hi"));

        assert!(!submit_ready(None, "max", "hi"));
        assert!(!submit_ready(Some("data:image/webp;base64,AA=="), "", "hi"));
        assert!(!submit_ready(Some("data:image/webp;base64,AA=="), "max", ""));
        assert!(!submit_ready(Some("data:image/webp;base64,AA=="), "   ", "hi"));
        assert!(!submit_ready(Some("  "), "max", "hi"));
    }
}
