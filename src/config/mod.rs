// src/config/mod.rs
//! Configuration system for lm-rsa
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{from_path, from_toml, load, resolve, Config, KeygenSettings, OaepSettings};

mod app;
mod defaults;
