//! Services layer - pure authoring operations.
//!
//! Nothing in here touches FLTK:
//! - Document statistics and intent detection
//! - Paragraph formatting and preview composition
//! - The phase simulator state machine
//! - Export serialization and delivery

pub mod download;
pub mod epub;
pub mod export;
pub mod formatter;
pub mod intent;
pub mod phases;
pub mod preview;
pub mod stats;
pub mod text_ops;
