use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app,
    browser::HoldBrowser,
    button::{Button, ReturnButton},
    enums::Align,
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;

/// Modal single-choice list. Returns the chosen index.
///
/// `describe` fills the detail area below the list for the highlighted row.
/// Double-clicking a row or pressing Enter accepts it.
pub fn pick_from_list(
    title: &str,
    heading: &str,
    items: &[String],
    accept_label: &str,
    describe: impl Fn(usize) -> String + 'static,
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let mut dialog = Window::default().with_size(520, 420).with_label(title).center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 500, 400, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(8);

    let mut heading_frame = Frame::default().with_label(heading);
    heading_frame.set_label_size(16);
    heading_frame.set_align(Align::Left | Align::Inside);
    flex.fixed(&heading_frame, 28);

    let mut list = HoldBrowser::default();
    for item in items {
        list.add(item);
    }

    let mut detail = Frame::default();
    detail.set_label_size(12);
    detail.set_align(Align::Left | Align::Top | Align::Inside | Align::Wrap);
    flex.fixed(&detail, 90);

    let mut buttons = Flex::default();
    buttons.set_type(FlexType::Row);
    Frame::default();
    let mut cancel_btn = Button::default().with_label("Cancel");
    buttons.fixed(&cancel_btn, 100);
    let mut accept_btn = ReturnButton::default().with_label(accept_label);
    buttons.fixed(&accept_btn, 120);
    buttons.end();
    flex.fixed(&buttons, 32);

    flex.end();
    dialog.end();

    let chosen = Rc::new(Cell::new(None::<usize>));

    list.select(1);
    detail.set_label(&describe(0));

    {
        let chosen = chosen.clone();
        let mut dialog = dialog.clone();
        let mut detail = detail.clone();
        list.set_callback(move |b| {
            let Some(index) = selected_index(b) else { return };
            detail.set_label(&describe(index));
            if app::event_clicks() {
                chosen.set(Some(index));
                dialog.hide();
            }
        });
    }
    {
        let chosen = chosen.clone();
        let list = list.clone();
        let mut dialog = dialog.clone();
        accept_btn.set_callback(move |_| {
            chosen.set(selected_index(&list));
            dialog.hide();
        });
    }
    {
        let mut dialog = dialog.clone();
        cancel_btn.set_callback(move |_| dialog.hide());
    }

    dialog.show();
    run_dialog(&dialog);
    chosen.get()
}

/// Zero-based index of the highlighted row, if any.
fn selected_index(list: &HoldBrowser) -> Option<usize> {
    match list.value() {
        0 => None,
        line => Some(line as usize - 1),
    }
}
