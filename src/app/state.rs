use fltk::{
    app::{self, Sender},
    button::LightButton,
    dialog,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};
use tracing::{error, info, warn};

use super::controllers::live::LiveController;
use super::controllers::preview::PreviewController;
use super::domain::{AppSettings, Document, Message, Template, ThemeMode};
use super::infrastructure::platform::detect_system_dark_mode;
use super::infrastructure::timer::{FltkTicker, post_after_layout};
use super::services::download::DirectorySink;
use super::services::export::{self, ExportFormat, ExportRequest, is_exportable};
use super::services::intent::detect_intent;
use crate::ui::dialogs::template_picker::show_prompt_picker;
use crate::ui::editor_surface::EditorSurface;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{set_export_enabled, set_live_checked};
use crate::ui::preview_pane::PreviewPane;
use crate::ui::status_bar::StatusBar;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    body: Flex,
    editor_column: Flex,
    live_button: LightButton,
    editor: EditorSurface,
    preview: PreviewPane,
    status: StatusBar,
    sender: Sender<Message>,
    pub settings: AppSettings,
    document: Document,
    template: Option<&'static Template>,
    live: LiveController<FltkTicker>,
    preview_ctl: PreviewController,
    pub dark_mode: bool,
    preview_fullscreen: bool,
}

pub fn resolve_dark_mode(settings: &AppSettings) -> bool {
    match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    }
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings, sender: Sender<Message>, dark_mode: bool) -> Self {
        let live = LiveController::new(
            FltkTicker::new(sender),
            settings.phase_interval(),
            settings.phase_labels.clone(),
        );
        let document = Document::new("Untitled", settings.author_name.clone());

        let mut state = Self {
            window: widgets.wind,
            menu: widgets.menu,
            body: widgets.body,
            editor_column: widgets.editor_column,
            live_button: widgets.live_button,
            editor: widgets.editor,
            preview: widgets.preview,
            status: widgets.status,
            sender,
            settings,
            document,
            template: None,
            live,
            preview_ctl: PreviewController::new(),
            dark_mode,
            preview_fullscreen: false,
        };
        apply_theme(
            &mut state.window,
            &mut state.menu,
            &mut state.editor,
            &mut state.status,
            state.dark_mode,
        );
        state.refresh_all();
        state
    }

    /// Begin a new, empty book from `template`.
    pub fn start_template(&mut self, template: &'static Template) {
        info!(template = template.id.0, "Starting new book");
        self.template = Some(template);
        self.document = Document::new(template.name, self.settings.author_name.clone());
        self.editor.set_text("");
        self.live.set_live(self.settings.live_on_start, false);
        self.preview_ctl.invalidate();
        self.refresh_all();
        self.editor.focus();
    }

    /// Pull the editor text into the document and refresh everything derived from it.
    pub fn on_content_changed(&mut self) {
        if !self.document.set_raw_text(self.editor.text()) {
            return;
        }
        self.live.on_content_changed(!self.document.is_empty());
        self.refresh_all();
        post_after_layout(self.sender, Message::EditorRelayout);
    }

    pub fn on_editor_relayout(&mut self) {
        self.editor.relayout();
    }

    pub fn on_preview_scroll_to_end(&mut self) {
        if self.live.is_live() {
            self.preview.scroll_to_end();
        }
    }

    pub fn toggle_live(&mut self) {
        let live = self.live.toggle(!self.document.is_empty());
        self.sync_live_controls(live);
        self.refresh_all();
    }

    pub fn on_phase_tick(&mut self) {
        if let Some(label) = self.live.on_tick() {
            self.status.set_phase(Some(label));
        }
    }

    pub fn export(&mut self, format: ExportFormat) {
        let request = ExportRequest::for_format(
            format,
            &self.document.title,
            &self.document.author,
            self.document.raw_text(),
        );
        let mut sink = DirectorySink::resolve(self.settings.export_directory.as_deref());
        match export::export(&request, &mut sink) {
            Ok(Some(path)) => {
                self.status.set_note(&format!("Saved {}", path.display()));
            }
            Ok(None) => {}
            Err(e) => {
                error!(format = format.label(), error = %e, "Export failed");
                dialog::alert_default(&format!("Export failed: {}", e));
            }
        }
    }

    pub fn open_export_folder(&self) {
        let sink = DirectorySink::resolve(self.settings.export_directory.as_deref());
        let dir = sink.dir();
        if let Err(e) = std::fs::create_dir_all(dir).and_then(|()| open::that(dir)) {
            warn!(dir = %dir.display(), error = %e, "Could not open export folder");
            dialog::alert_default(&format!("Could not open {}: {}", dir.display(), e));
        }
    }

    pub fn set_author(&mut self) {
        let Some(name) = dialog::input_default("Author name:", &self.settings.author_name) else {
            return;
        };
        let name = name.trim();
        if name.is_empty() || name == self.settings.author_name {
            return;
        }
        self.settings.author_name = name.to_string();
        self.document.author = name.to_string();
        self.save_settings();
        self.refresh_all();
    }

    pub fn insert_prompt(&mut self) {
        let Some(template) = self.template else {
            dialog::message_default("Start a book from a template to get writing prompts.");
            return;
        };
        if let Some(prompt) = show_prompt_picker(template) {
            self.editor.insert_at_cursor(prompt);
            self.editor.focus();
        }
    }

    pub fn toggle_fullscreen_preview(&mut self) {
        self.preview_fullscreen = !self.preview_fullscreen;
        if self.preview_fullscreen {
            self.editor_column.hide();
        } else {
            self.editor_column.show();
        }
        self.body.layout();
        self.window.redraw();
        post_after_layout(self.sender, Message::EditorRelayout);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        apply_theme(
            &mut self.window,
            &mut self.menu,
            &mut self.editor,
            &mut self.status,
            self.dark_mode,
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);

        self.settings.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
        self.save_settings();
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.editor.set_font_size(size);
        self.preview.set_font_size(size);
        self.settings.font_size = size.max(1) as u32;
        self.save_settings();
    }

    /// Stop the phase timer. Must run before the window goes away.
    pub fn shutdown(&mut self) {
        self.live.shutdown();
        info!("Authoring session closed");
    }

    pub fn quit(&mut self) {
        self.shutdown();
        app::quit();
    }

    fn sync_live_controls(&mut self, live: bool) {
        self.live_button.set_value(live);
        set_live_checked(&mut self.menu, live);
        self.status.set_live(live, self.live.is_generating());
    }

    /// Recompute every view derived from the document.
    fn refresh_all(&mut self) {
        let has_text = is_exportable(self.document.raw_text());
        set_export_enabled(&mut self.menu, has_text);
        self.window.set_label(&self.document.window_title());

        self.status.set_stats(&self.document.stats(), detect_intent(self.document.raw_text()));
        self.status.set_phase(self.live.label());
        self.sync_live_controls(self.live.is_live());

        if let Some(update) = self.preview_ctl.refresh(&self.document, self.live.is_live()) {
            self.preview.set_html(&update.html);
            if update.scroll_to_end {
                post_after_layout(self.sender, Message::PreviewScrollToEnd);
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            warn!(error = %e, "Failed to save settings");
        }
    }
}
