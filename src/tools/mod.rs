// src/tools/mod.rs
pub mod drive;
pub mod encoding;
pub mod json;
pub mod timestamp;

pub use drive::direct_download_link;
pub use json::{JsonAction, JsonIndent, JsonReport};
pub use timestamp::TimestampInfo;
