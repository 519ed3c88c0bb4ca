mod attachment;
mod chat_color;
mod outbound;

pub use attachment::{AttachmentError, MediaAttachment};
pub use chat_color::{ChatColor, DEFAULT_COLOR};
pub use outbound::{OutboundMessage, validate_message};
