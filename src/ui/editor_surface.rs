//! The manuscript editor.
//!
//! A word-wrapped `TextEditor` inside a vertical `Scroll`. The editor itself
//! never scrolls: after every change it is resized to the height its text
//! needs and the surrounding `Scroll` provides the scrollbar. Every buffer
//! change is relayed as `Message::ContentChanged`.

use std::ffi::{c_char, c_int, c_void};

use fltk::{
    app::Sender,
    draw,
    enums::{Color, Font, FrameType},
    group::{Scroll, ScrollType},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
};
use tracing::warn;

use crate::app::domain::Message;
use crate::app::infrastructure::timer::post_after_layout;
use crate::app::services::text_ops::insert_at;

/// Space above and below the text, in pixels.
const EDITOR_PADDING: i32 = 16;

type ModifyCb = dyn FnMut(c_int, c_int);

type RawModifyCb =
    unsafe extern "C" fn(c_int, c_int, c_int, c_int, *const c_char, *mut c_void);

/// Single C entry point for every buffer modification. Keeping one fixed
/// function pointer lets `Fl_Text_Buffer_remove_modify_callback` match it.
///
/// # Safety
///
/// `cb_arg` must be the pointer produced by `register_modify_callback` and
/// not yet released by `EditorSurface::drop`.
unsafe extern "C" fn modify_shim(
    _pos: c_int,
    n_inserted: c_int,
    n_deleted: c_int,
    _n_restyled: c_int,
    _deleted_text: *const c_char,
    cb_arg: *mut c_void,
) {
    if cb_arg.is_null() {
        warn!("Buffer modify callback fired without closure data");
        return;
    }
    // SAFETY: non-null cb_arg is a live Box<Box<ModifyCb>> until drop removes it
    unsafe {
        let cb = &mut *(cb_arg as *mut Box<ModifyCb>);
        cb(n_inserted, n_deleted);
    }
}

unsafe extern "C" {
    fn Fl_Text_Buffer_add_modify_callback(buf: *mut c_void, cb: Option<RawModifyCb>, cb_arg: *mut c_void);
    fn Fl_Text_Buffer_remove_modify_callback(buf: *mut c_void, cb: Option<RawModifyCb>, cb_arg: *mut c_void);
    fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut c_char;
    fn free(ptr: *mut c_void);
}

fn register_modify_callback(buffer: &TextBuffer, sender: Sender<Message>) -> *mut c_void {
    let cb: Box<ModifyCb> = Box::new(move |inserted, deleted| {
        if inserted > 0 || deleted > 0 {
            sender.send(Message::ContentChanged);
        }
    });
    let data = Box::into_raw(Box::new(cb)) as *mut c_void;

    // SAFETY: data stays allocated until EditorSurface::drop unregisters the
    // shim and reclaims the box
    unsafe {
        Fl_Text_Buffer_add_modify_callback(buffer.as_ptr() as *mut c_void, Some(modify_shim), data);
    }
    data
}

/// Copy the buffer's text and free FLTK's malloc'd copy.
///
/// `TextBuffer::text()` leaks that copy on every call.
fn buffer_text(buffer: &TextBuffer) -> String {
    // SAFETY: the buffer pointer is valid for the lifetime of `buffer`;
    // Fl_Text_Buffer_text returns a NUL-terminated malloc'd string or null
    unsafe {
        let ptr = Fl_Text_Buffer_text(buffer.as_ptr() as *mut c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut c_void);
        text
    }
}

pub struct EditorSurface {
    scroll: Scroll,
    editor: TextEditor,
    buffer: TextBuffer,
    modify_cb_data: *mut c_void,
}

impl EditorSurface {
    /// Build inside the currently open group, which sizes the outer `Scroll`.
    pub fn new(sender: Sender<Message>, font_size: i32) -> Self {
        let mut scroll = Scroll::new(0, 0, 0, 0, None);
        scroll.set_type(ScrollType::Vertical);
        scroll.set_frame(FrameType::FlatBox);

        let mut editor = TextEditor::new(0, 0, 0, 0, None);
        let buffer = TextBuffer::default();
        editor.set_buffer(buffer.clone());
        editor.set_frame(FrameType::FlatBox);
        editor.set_text_font(Font::Helvetica);
        editor.set_text_size(font_size);
        editor.wrap_mode(WrapMode::AtBounds, 0);
        scroll.end();

        // Width changes rewrap the text, so the height must follow
        scroll.resize_callback(move |_, _, _, _, _| {
            post_after_layout(sender, Message::EditorRelayout);
        });

        let modify_cb_data = register_modify_callback(&buffer, sender);

        Self {
            scroll,
            editor,
            buffer,
            modify_cb_data,
        }
    }

    pub fn text(&self) -> String {
        buffer_text(&self.buffer)
    }

    /// Replace all text. Fires `ContentChanged` like a keystroke would.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(self.buffer.length());
    }

    /// Insert `snippet` at the cursor and leave the cursor after it.
    pub fn insert_at_cursor(&mut self, snippet: &str) {
        let text = self.text();
        let pos = self.editor.insert_position().max(0) as usize;
        let (updated, caret) = insert_at(&text, pos, snippet);
        self.buffer.set_text(&updated);
        self.editor.set_insert_position(caret as i32);
        self.editor.show_insert_position();
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.editor.set_text_size(size);
        self.relayout();
    }

    pub fn focus(&mut self) {
        let _ = self.editor.take_focus();
    }

    /// Height the editor needs to show all wrapped lines without scrolling.
    pub fn required_height(&self) -> i32 {
        let lines = self.editor.count_lines(0, self.buffer.length(), true) + 1;
        draw::set_font(self.editor.text_font(), self.editor.text_size());
        lines * draw::height() + EDITOR_PADDING
    }

    /// Fit the editor to its content. Call once layout has settled.
    pub fn relayout(&mut self) {
        let bar = match self.scroll.scrollbar_size() {
            0 => fltk::app::scrollbar_size(),
            n => n,
        };
        let width = (self.scroll.w() - bar).max(0);
        let height = self.required_height().max(self.scroll.h());
        let (x, y) = (self.scroll.x(), self.editor.y());
        if self.editor.w() != width || self.editor.h() != height {
            self.editor.resize(x, y, width, height);
        }

        // Keep the caret in view when typing at the end of the text
        if self.editor.insert_position() >= self.buffer.length() {
            let bottom = (height - self.scroll.h()).max(0);
            self.scroll.scroll_to(0, bottom);
        }
        self.scroll.redraw();
    }

    pub fn apply_colors(&mut self, background: Color, text: Color, selection: Color) {
        self.scroll.set_color(background);
        self.editor.set_color(background);
        self.editor.set_text_color(text);
        self.editor.set_cursor_color(text);
        self.editor.set_selection_color(selection);
        self.scroll.redraw();
    }
}

impl Drop for EditorSurface {
    fn drop(&mut self) {
        if self.modify_cb_data.is_null() {
            return;
        }
        // SAFETY: unregister first so FLTK stops handing out the pointer,
        // then reclaim the box allocated in register_modify_callback
        unsafe {
            Fl_Text_Buffer_remove_modify_callback(
                self.buffer.as_ptr() as *mut c_void,
                Some(modify_shim),
                self.modify_cb_data,
            );
            drop(Box::from_raw(self.modify_cb_data as *mut Box<ModifyCb>));
        }
        self.modify_cb_data = std::ptr::null_mut();
    }
}
