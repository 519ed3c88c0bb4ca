//! Media-URL classification and safe embed synthesis.

mod classify;
mod embed;
mod tables;

pub use classify::{MediaClass, classify, is_media_url};
pub use embed::{synthesize_embed, youtube_video_id};
