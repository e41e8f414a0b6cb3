//! LYBSYS Library Management Dashboard
//!
//! A Rust implementation of the LYBSYS library dashboard server, providing
//! a REST JSON API for room reservations, hold queues, collection analysis,
//! and inventory tracking.

use std::sync::Arc;

pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
