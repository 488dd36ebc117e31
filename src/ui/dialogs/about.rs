use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;

pub fn show_about_dialog() {
    let mut dialog = Window::default()
        .with_size(420, 300)
        .with_label("About Kitab")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 280, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default().with_label("\u{1F4D6} Kitab");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version = Frame::default().with_label(&format!("Version {}", env!("CARGO_PKG_VERSION")));
    version.set_label_size(14);
    flex.fixed(&version, 25);

    let mut desc = Frame::default().with_label("Write a book and watch it take shape, page by page");
    desc.set_label_size(12);
    desc.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc, 25);

    let mut info = Frame::default().with_label(
        "Exports: PDF (as HTML), EPUB, DOCX (as plain text)\n\n\
         Built with Rust and FLTK",
    );
    info.set_label_size(12);
    info.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| dialog_close.hide());

    dialog.show();
    run_dialog(&dialog);
}
