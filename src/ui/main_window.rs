use fltk::{
    app::Sender,
    button::LightButton,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::editor_surface::EditorSurface;
use super::preview_pane::PreviewPane;
use super::status_bar::{STATUS_BAR_HEIGHT, StatusBar};
use crate::app::domain::Message;

const HEADER_HEIGHT: i32 = 32;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub body: Flex,
    pub editor_column: Flex,
    pub live_button: LightButton,
    pub editor: EditorSurface,
    pub preview: PreviewPane,
    pub status: StatusBar,
}

pub fn build_main_window(font_size: i32, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1100, 720, "Kitab");
    wind.set_xclass("Kitab");

    let mut flex = Flex::new(0, 0, 1100, 720, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);
    body.set_spacing(6);

    // Left: editor with its live toggle
    let mut editor_column = Flex::default();
    editor_column.set_type(FlexType::Column);
    let mut editor_header = Flex::default();
    editor_header.set_type(FlexType::Row);
    editor_header.set_margins(8, 4, 4, 4);
    header_label("Editor");
    let mut live_button = LightButton::default().with_label("Live");
    live_button.set_selection_color(Color::from_rgb(34, 197, 94));
    live_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::ToggleLive)
    });
    editor_header.fixed(&live_button, 80);
    editor_header.end();
    editor_column.fixed(&editor_header, HEADER_HEIGHT);
    let editor = EditorSurface::new(*sender, font_size);
    editor_column.end();

    // Right: the rendered page
    let mut preview_column = Flex::default();
    preview_column.set_type(FlexType::Column);
    let preview_header = header_label("Preview");
    preview_column.fixed(&preview_header, HEADER_HEIGHT);
    let preview = PreviewPane::new(font_size);
    preview_column.end();

    body.end();

    let status = StatusBar::new();
    flex.fixed(&status.row, STATUS_BAR_HEIGHT);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        menu,
        body,
        editor_column,
        live_button,
        editor,
        preview,
        status,
    }
}

fn header_label(text: &str) -> Frame {
    let mut frame = Frame::default().with_label(text);
    frame.set_label_font(Font::HelveticaBold);
    frame.set_label_size(13);
    frame.set_align(Align::Left | Align::Inside);
    frame
}
