//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Templates, Settings, Messages)
//! - `controllers/` - Orchestration (live mode, preview refresh)
//! - `services/` - Pure operations (stats, formatting, preview, export)
//! - `infrastructure/` - External integrations (timers, logging, platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Document, Message, Template, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
pub use services::export::{ExportFormat, ExportRequest};
pub use services::stats::DocumentStats;
