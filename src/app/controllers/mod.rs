//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Live mode and its phase timer
//! - Preview page rendering

pub mod live;
pub mod preview;
