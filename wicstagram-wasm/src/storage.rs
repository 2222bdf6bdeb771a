const USERNAME_KEY: &str = "wicstagram_username";

fn parse_username(raw: &str) -> Option<String> {
    let username = raw.trim().to_string();
    if username.is_empty() {
        return None;
    }
    Some(username)
}

/// Имя пользователя из прошлой публикации, если оно сохранялось.
pub(crate) fn load_username() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(USERNAME_KEY).ok()??;
    parse_username(&raw)
}

pub(crate) fn save_username(username: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let storage = window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())?;

    storage
        .set_item(USERNAME_KEY, username)
        .map_err(|_| "failed to save username".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_username_trims_and_returns_value() {
        let username = parse_username("  max  ");
        assert_eq!(username.as_deref(), Some("max"));
    }

    #[test]
    fn parse_username_rejects_blank() {
        assert!(parse_username("   ").is_none());
    }
}
