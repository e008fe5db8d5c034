// src/client/mod.rs

pub mod client;
pub mod fetch;
pub mod state;
pub mod terminal;
pub mod ui;

pub use client::run;
