use fltk::{
    enums::{Color, FrameType},
    misc::HelpView,
    prelude::*,
};

/// Read-only book page rendered by FLTK's HTML viewer.
pub struct PreviewPane {
    view: HelpView,
}

impl PreviewPane {
    pub fn new(font_size: i32) -> Self {
        let mut view = HelpView::default();
        view.set_frame(FrameType::FlatBox);
        view.set_color(Color::White);
        view.set_text_size(font_size);
        Self { view }
    }

    /// Replace the page, keeping the reader's position.
    pub fn set_html(&mut self, html: &str) {
        let top = self.view.top_line();
        self.view.set_value(html);
        self.view.set_top_line(top);
    }

    /// Jump to the last line. Must run after the new page has been laid out.
    pub fn scroll_to_end(&mut self) {
        // HelpView clamps to the real maximum offset
        self.view.set_top_line(i32::MAX);
        self.view.redraw();
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.view.set_text_size(size);
        self.view.redraw();
    }
}
