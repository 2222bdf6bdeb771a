use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// Формат стоп-кадра: сервис получает base64 от webp data-URL.
const CAPTURE_MIME: &str = "image/webp";

#[derive(Debug, Clone)]
pub(crate) enum CameraError {
    Unavailable(String),
    Permission(String),
    Capture(String),
}

impl core::fmt::Display for CameraError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "камера недоступна: {msg}"),
            Self::Permission(msg) => write!(f, "нет доступа к камере: {msg}"),
            Self::Capture(msg) => write!(f, "не удалось сделать кадр: {msg}"),
        }
    }
}

fn js_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Запрашивает видеопоток без звука и подключает его к `<video>`.
pub(crate) async fn start_stream(video: &HtmlVideoElement) -> Result<MediaStream, CameraError> {
    let window = web_sys::window()
        .ok_or_else(|| CameraError::Unavailable("window отсутствует".to_string()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|err| CameraError::Unavailable(js_message(&err)))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::from(true));
    constraints.set_audio(&JsValue::from(false));

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|err| CameraError::Permission(js_message(&err)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|err| CameraError::Permission(js_message(&err)))?;
    let stream: MediaStream = stream
        .dyn_into()
        .map_err(|_| CameraError::Unavailable("getUserMedia вернул не MediaStream".to_string()))?;

    video.set_src_object(Some(&stream));
    // play() возвращает Promise; ждать его не нужно, кадры появятся сами.
    let _ = video.play();

    Ok(stream)
}

/// Останавливает все дорожки потока. Зелёный индикатор камеры гаснет
/// только после stop() на каждой дорожке.
pub(crate) fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Снимает стоп-кадр с `<video>` и возвращает его webp data-URL.
pub(crate) fn capture_frame(video: &HtmlVideoElement) -> Result<String, CameraError> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return Err(CameraError::Capture(
            "видеопоток ещё не выдал ни одного кадра".to_string(),
        ));
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| CameraError::Unavailable("document отсутствует".to_string()))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|err| CameraError::Capture(js_message(&err)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| CameraError::Capture("canvas не создался".to_string()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")
        .map_err(|err| CameraError::Capture(js_message(&err)))?
        .ok_or_else(|| CameraError::Capture("2d-контекст недоступен".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CameraError::Capture("контекст не 2d".to_string()))?;

    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|err| CameraError::Capture(js_message(&err)))?;

    canvas
        .to_data_url_with_type(CAPTURE_MIME)
        .map_err(|err| CameraError::Capture(js_message(&err)))
}
