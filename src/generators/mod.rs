// src/generators/mod.rs
pub mod lorem;
pub mod password;

pub use lorem::{LoremGenerator, LoremMode};
