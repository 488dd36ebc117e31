//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The document being written
//! - Writing templates
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;
pub mod template;

pub use document::Document;
pub use messages::Message;
pub use settings::{AppSettings, ThemeMode};
pub use template::{TEMPLATES, Template, TemplateId};
