use leptos::prelude::*;

use crate::api;
use crate::state::AppState;

use crate::components::feed_panel::FeedPanel;
use crate::components::upload_panel::UploadPanel;

fn load_posts(state: AppState) {
    state.loading.set(true);
    state.clear_error();

    leptos::task::spawn_local(async move {
        match api::fetch_feed().await {
            // Список заменяется целиком: прошлый рендер нигде не кэшируется.
            Ok(posts) => state.posts.set(posts),
            // При ошибке старая лента остаётся на экране, баннер показывает текст.
            Err(err) => state.set_error(err.to_string()),
        }
        state.loading.set(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // Лента загружается при монтировании и после каждого переключения
    // reload-флага: одно переключение — один запрос.
    {
        let state = state.clone();
        Effect::new(move |_| {
            state.reload.track();
            load_posts(state.clone());
        });
    }

    let error_text = {
        let state = state.clone();
        move || state.error.get().unwrap_or_default()
    };
    let state_for_banner = state.clone();

    view! {
        <main class="page">
            <section class="container">
                <h1>"Wicstagram"</h1>

                <Show when=move || !state_for_banner.error.get().unwrap_or_default().is_empty()>
                    <div class="error-banner">
                        <strong>"Ошибка: "</strong>
                        {error_text.clone()}
                    </div>
                </Show>

                <UploadPanel state=state.clone() />
                <FeedPanel state=state.clone() />
            </section>
        </main>
    }
}
