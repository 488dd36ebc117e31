#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use fltk::{app, enums::Event, prelude::*};
use tracing::info;

use kitab::app::domain::{AppSettings, Message};
use kitab::app::infrastructure::logging::init_logging;
use kitab::app::state::{AppState, resolve_dark_mode};
use kitab::ui::dialogs::about::show_about_dialog;
use kitab::ui::dialogs::template_picker::show_template_picker;
use kitab::ui::main_window::build_main_window;
use kitab::ui::menu::build_menu;

fn main() {
    init_logging();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let settings = AppSettings::load();
    let dark_mode = resolve_dark_mode(&settings);
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(settings.font_size as i32, &sender);
    build_menu(&mut widgets.menu, &sender, &settings, dark_mode);
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let mut state = AppState::new(widgets, settings, sender, dark_mode);
    state.window.show();
    #[cfg(target_os = "windows")]
    kitab::ui::theme::set_windows_titlebar_theme(&state.window, state.dark_mode);

    info!(version = env!("CARGO_PKG_VERSION"), "Kitab started");
    sender.send(Message::NewFromTemplate);

    while app.wait() {
        let Some(msg) = receiver.recv() else { continue };
        match msg {
            Message::ContentChanged => state.on_content_changed(),
            Message::EditorRelayout => state.on_editor_relayout(),
            Message::PreviewScrollToEnd => state.on_preview_scroll_to_end(),
            Message::ToggleLive => state.toggle_live(),
            Message::PhaseTick => state.on_phase_tick(),
            Message::NewFromTemplate => {
                if let Some(template) = show_template_picker() {
                    state.start_template(template);
                }
            }
            Message::InsertPrompt => state.insert_prompt(),
            Message::Export(format) => state.export(format),
            Message::OpenExportFolder => state.open_export_folder(),
            Message::SetAuthor => state.set_author(),
            Message::ToggleFullscreen => state.toggle_fullscreen_preview(),
            Message::ToggleDarkMode => state.toggle_dark_mode(),
            Message::SetFontSize(size) => state.set_font_size(size),
            Message::ShowAbout => show_about_dialog(),
            Message::FileQuit | Message::WindowClose => state.quit(),
        }
    }
}
