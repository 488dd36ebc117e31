use fltk::{enums::Color, menu::MenuBar, prelude::*, window::Window};

use super::editor_surface::EditorSurface;
use super::status_bar::StatusBar;

/// Chrome colors for one theme. The preview page stays white in both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window: Color,
    pub label: Color,
    pub menu: Color,
    pub menu_hover: Color,
    pub editor_bg: Color,
    pub editor_text: Color,
    pub selection: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            window: Color::from_rgb(25, 25, 25),
            label: Color::from_rgb(220, 220, 220),
            menu: Color::from_rgb(35, 35, 35),
            menu_hover: Color::from_rgb(60, 60, 60),
            editor_bg: Color::from_rgb(30, 30, 30),
            editor_text: Color::from_rgb(220, 220, 220),
            selection: Color::from_rgb(70, 70, 100),
        }
    } else {
        Palette {
            window: Color::from_rgb(240, 240, 240),
            label: Color::Black,
            menu: Color::from_rgb(240, 240, 240),
            menu_hover: Color::from_rgb(200, 200, 200),
            editor_bg: Color::White,
            editor_text: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
        }
    }
}

pub fn apply_theme(
    window: &mut Window,
    menu: &mut MenuBar,
    editor: &mut EditorSurface,
    status: &mut StatusBar,
    is_dark: bool,
) {
    let p = palette(is_dark);
    window.set_color(p.window);
    window.set_label_color(p.label);
    menu.set_color(p.menu);
    menu.set_text_color(p.label);
    menu.set_selection_color(p.menu_hover);
    editor.apply_colors(p.editor_bg, p.editor_text, p.selection);
    status.apply_colors(p.window, p.label);

    window.redraw();
    menu.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if is_dark { 1 } else { 0 };
    // 20 is DWMWA_USE_IMMERSIVE_DARK_MODE; builds 1809-1903 used 19
    for attribute in [20, 19] {
        // SAFETY: the window is shown, so raw_handle is a live HWND
        unsafe {
            let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = palette(false);
        let dark = palette(true);
        assert_ne!(light.editor_bg, dark.editor_bg);
        assert_eq!(light.editor_text, Color::Black);
    }
}
