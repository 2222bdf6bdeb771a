pub(crate) mod feed_panel;
pub(crate) mod upload_panel;
