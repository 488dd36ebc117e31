use crate::app::services::export::ExportFormat;

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks, the editor buffer and timers send these; the dispatch loop
/// in main handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // Editor
    ContentChanged,
    /// Posted from a zero-delay timeout so sizing sees the laid-out text.
    EditorRelayout,

    // Preview
    PreviewScrollToEnd,

    // Live mode
    ToggleLive,
    PhaseTick,

    // File
    NewFromTemplate,
    InsertPrompt,
    Export(ExportFormat),
    OpenExportFolder,
    SetAuthor,
    FileQuit,
    WindowClose,

    // View
    ToggleFullscreen,
    ToggleDarkMode,
    SetFontSize(i32),

    // Help
    ShowAbout,
}
