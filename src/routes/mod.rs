mod chat;
mod health_check;
mod info;
mod stats;

pub use chat::*;
pub use health_check::*;
pub use info::*;
pub use stats::*;
