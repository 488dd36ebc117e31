//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK event-loop timers
//! - Logging setup
//! - Platform-specific detection
//! - Error types

pub mod error;
pub mod logging;
pub mod platform;
pub mod timer;
