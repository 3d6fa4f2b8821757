// src/api/handlers/mod.rs
pub mod color;
pub mod generator;
pub mod system;
pub mod tools;
