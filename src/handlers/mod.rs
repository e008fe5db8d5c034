// src/handlers/mod.rs

pub mod meta;
pub mod questions;
