use leptos::prelude::*;

use crate::models::Post;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) posts: RwSignal<Vec<Post>>,
    pub(crate) error: RwSignal<Option<String>>,
    pub(crate) loading: RwSignal<bool>,
    /// Reload-флаг: переключается после успешной публикации,
    /// лента перезагружается на каждое изменение.
    pub(crate) reload: RwSignal<bool>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            posts: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            reload: RwSignal::new(false),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    pub(crate) fn toggle_reload(&self) {
        self.reload.update(|flag| *flag = !*flag);
    }
}
