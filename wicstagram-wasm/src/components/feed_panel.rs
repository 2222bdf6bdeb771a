use leptos::prelude::*;

use crate::format;
use crate::models::Post;
use crate::state::AppState;

#[component]
pub(crate) fn FeedPanel(state: AppState) -> impl IntoView {
    let state_for_loading = state.clone();
    let state_for_count = state.clone();
    let state_for_each = state.clone();

    view! {
        <h2>"Лента"</h2>

        <Show when=move || state_for_loading.loading.get()>
            <p>"Загрузка..."</p>
        </Show>

        <p style="margin-top: 0.5rem;">
            "Постов в ленте: "
            {move || state_for_count.posts.get().len()}
        </p>

        <div class="feed">
            <For
                each=move || state_for_each.posts.get()
                key=|post| (post.timestamp, post.username.clone())
                children=move |post: Post| {
                    let date_line = format::post_date_line(post.timestamp);
                    view! {
                        <article class="post-card">
                            <header>
                                <strong>{post.username.clone()}</strong>
                            </header>
                            <img src=post.image_url.clone() alt=post.caption.clone() />
                            <p>
                                {post.caption.clone()}
                                <br />
                                <small>{date_line}</small>
                            </p>
                        </article>
                    }
                }
            />
        </div>
    }
}
