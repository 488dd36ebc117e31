use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{AppSettings, Message};
use crate::app::services::export::ExportFormat;

const LIVE_ITEM: &str = "View/Toggle Live Mode";

fn export_item_path(format: ExportFormat) -> String {
    format!("File/Export/{}...", format.display_name())
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/New From Template...", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NewFromTemplate) });
    menu.add("File/Insert Prompt...", Shortcut::Ctrl | 'p', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::InsertPrompt) });
    for (i, format) in ExportFormat::all().iter().copied().enumerate() {
        let shortcut = Shortcut::Ctrl | Shortcut::Shift | char::from(b'1' + i as u8);
        menu.add(&export_item_path(format), shortcut, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Export(format)) });
    }
    menu.add("File/Open Export Folder", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenExportFolder) });
    menu.add("File/Set Author...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::SetAuthor) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    let live_flag = if settings.live_on_start { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(LIVE_ITEM, Shortcut::Ctrl | 'l', live_flag, { let s = *s; move |_| s.send(Message::ToggleLive) });
    menu.add("View/Fullscreen Preview", Shortcut::None | Key::F11, MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleFullscreen) });
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Font Size/Small (12)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(12)) });
    menu.add("View/Font Size/Medium (16)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(16)) });
    menu.add("View/Font Size/Large (20)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(20)) });

    // Help
    menu.add("Help/About Kitab", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Export actions are only available while there is text to export.
pub fn set_export_enabled(menu: &mut MenuBar, enabled: bool) {
    for format in ExportFormat::all() {
        if let Some(mut item) = menu.find_item(&export_item_path(*format)) {
            if enabled {
                item.activate();
            } else {
                item.deactivate();
            }
        }
    }
}

/// Keep the live-mode check mark in step with state changed elsewhere.
pub fn set_live_checked(menu: &mut MenuBar, checked: bool) {
    if let Some(mut item) = menu.find_item(LIVE_ITEM) {
        if checked {
            item.set();
        } else {
            item.clear();
        }
    }
}
