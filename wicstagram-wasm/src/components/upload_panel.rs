use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use web_sys::MediaStream;

use crate::api;
use crate::camera;
use crate::format;
use crate::models::NewPost;
use crate::state::AppState;
use crate::storage;

#[component]
pub(crate) fn UploadPanel(state: AppState) -> impl IntoView {
    let show_form = RwSignal::new(false);
    let img_src = RwSignal::new(None::<String>);
    let username = RwSignal::new(storage::load_username().unwrap_or_default());
    let caption = RwSignal::new(String::new());

    // MediaStream не Send, поэтому сигнал локальный для потока рендера.
    let stream = RwSignal::new_local(None::<MediaStream>);
    let video_ref = NodeRef::<html::Video>::new();

    // Камера живёт ровно пока форма открыта и стоп-кадр не сделан.
    {
        let state = state.clone();
        Effect::new(move |_| {
            let live = show_form.get() && img_src.get().is_none();
            if !live {
                if let Some(active) = stream.get_untracked() {
                    camera::stop_stream(&active);
                    stream.set(None);
                }
                return;
            }

            let Some(video) = video_ref.get() else {
                return;
            };
            if let Some(active) = stream.get_untracked() {
                // «Убрать фото» монтирует новый <video>, поток надо перецепить.
                video.set_src_object(Some(&active));
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                match camera::start_stream(&video).await {
                    Ok(active) => {
                        let still_live =
                            show_form.get_untracked() && img_src.get_untracked().is_none();
                        if !still_live {
                            // Форму закрыли, пока getUserMedia ждал разрешения.
                            camera::stop_stream(&active);
                            return;
                        }
                        if let Some(previous) = stream.get_untracked() {
                            camera::stop_stream(&previous);
                        }
                        stream.set(Some(active));
                    }
                    Err(err) => state.set_error(err.to_string()),
                }
            });
        });
    }

    let on_open = Callback::new({
        let state = state.clone();
        move |_: ()| {
            state.clear_error();
            show_form.set(true);
        }
    });

    let on_close = Callback::new(move |_: ()| {
        show_form.set(false);
    });

    let on_capture = Callback::new({
        let state = state.clone();
        move |_: ()| {
            state.clear_error();

            let Some(video) = video_ref.get_untracked() else {
                state.set_error("камера ещё не готова");
                return;
            };
            match camera::capture_frame(&video) {
                Ok(data_url) => img_src.set(Some(data_url)),
                Err(err) => state.set_error(err.to_string()),
            }
        }
    });

    let on_clear = Callback::new({
        let state = state.clone();
        move |_: ()| {
            state.clear_error();
            img_src.set(None);
        }
    });

    let submit_ready = move || {
        format::submit_ready(img_src.get().as_deref(), &username.get(), &caption.get())
    };

    let on_submit = Callback::new({
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            state.clear_error();

            let Some(data_url) = img_src.get_untracked() else {
                state.set_error("Сначала сделайте фото");
                return;
            };
            let username_value = username.get_untracked().trim().to_string();
            let caption_value = caption.get_untracked().trim().to_string();
            if username_value.is_empty() || caption_value.is_empty() {
                state.set_error("Заполните username и caption");
                return;
            }

            let payload = NewPost {
                username: username_value,
                caption: caption_value,
                image: format::strip_data_url_prefix(&data_url).to_string(),
            };

            state.loading.set(true);
            let state2 = state.clone();
            spawn_local(async move {
                match api::create_post(&payload).await {
                    Ok(response) => {
                        // Ответ сервиса нигде не используется, только в консоли.
                        web_sys::console::debug_1(&JsValue::from_str(&response.to_string()));

                        if let Err(err) = storage::save_username(&payload.username) {
                            web_sys::console::warn_1(&JsValue::from_str(&err));
                        }

                        img_src.set(None);
                        username.set(String::new());
                        caption.set(String::new());
                        show_form.set(false);
                        state2.toggle_reload();
                        state2.clear_error();
                    }
                    Err(err) => state2.set_error(err.to_string()),
                }
                state2.loading.set(false);
            });
        }
    });

    let loading = state.loading;

    view! {
        <div class="upload">
            <button on:click=move |_| on_open.run(())>"Новый пост"</button>

            <Show when=move || show_form.get()>
                <div class="create-post-form">
                    <h2>"Создать пост"</h2>

                    <div class="camera">
                        <Show
                            when=move || img_src.get().is_none()
                            fallback=move || {
                                view! {
                                    <div>
                                        <img
                                            src=move || img_src.get().unwrap_or_default()
                                            alt="стоп-кадр"
                                        />
                                        <button on:click=move |_| on_clear.run(())>
                                            "Убрать фото"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <div>
                                <video
                                    node_ref=video_ref
                                    autoplay=true
                                    playsinline=true
                                    muted=true
                                ></video>
                                <button on:click=move |_| on_capture.run(())>
                                    "Сделать фото"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <form on:submit=move |ev| on_submit.run(ev)>
                        <input
                            placeholder="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            placeholder="caption"
                            prop:value=move || caption.get()
                            on:input=move |ev| caption.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || !submit_ready() || loading.get()>
                            "Опубликовать"
                        </button>
                    </form>

                    <button on:click=move |_| on_close.run(())>"Закрыть"</button>
                </div>
            </Show>
        </div>
    }
}
