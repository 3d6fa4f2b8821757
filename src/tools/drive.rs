// src/tools/drive.rs
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const DOWNLOAD_BASE: &str = "https://drive.google.com/uc?export=download&id=";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriveLinkError {
    #[error("Please enter a Google Drive sharing URL")]
    Empty,

    #[error("Invalid Google Drive URL format. Please use a valid sharing URL.")]
    UnrecognisedUrl,
}

// The first match in the URL wins, whichever form it is
static FILE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/file/d/([a-zA-Z0-9_-]+)/|/open\?id=([a-zA-Z0-9_-]+)").expect("drive id pattern")
});

/// Pull the file id out of a `/file/d/<id>/...` or `/open?id=<id>` URL.
pub fn extract_file_id(url: &str) -> Result<String, DriveLinkError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(DriveLinkError::Empty);
    }

    FILE_ID
        .captures(url)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|id| id.as_str().to_string())
        .ok_or(DriveLinkError::UnrecognisedUrl)
}

pub fn direct_download_link(url: &str) -> Result<String, DriveLinkError> {
    let id = extract_file_id(url)?;
    Ok(format!("{}{}", DOWNLOAD_BASE, id))
}
