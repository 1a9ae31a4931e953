// src/core/mod.rs

pub mod battery;
pub mod config;
pub mod config_loader;
pub mod monitor;
pub mod notify;
