use fltk::{
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::services::intent::Intent;
use crate::app::services::stats::DocumentStats;

pub const STATUS_BAR_HEIGHT: i32 = 24;

/// Bottom strip: live indicator, phase label, intent and statistics.
pub struct StatusBar {
    pub row: Flex,
    live: Frame,
    phase: Frame,
    intent: Frame,
    stats: Frame,
}

impl StatusBar {
    pub fn new() -> Self {
        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        row.set_margins(8, 2, 8, 2);
        row.set_spacing(12);

        let live = status_frame(Align::Left | Align::Inside);
        row.fixed(&live, 110);
        let phase = status_frame(Align::Left | Align::Inside);
        let intent = status_frame(Align::Right | Align::Inside);
        row.fixed(&intent, 140);
        let stats = status_frame(Align::Right | Align::Inside);
        row.fixed(&stats, 280);
        row.end();

        let mut bar = Self {
            row,
            live,
            phase,
            intent,
            stats,
        };
        bar.set_live(false, false);
        bar
    }

    /// `is_generating` distinguishes a running phase cycle from live mode
    /// waiting for text.
    pub fn set_live(&mut self, is_live: bool, is_generating: bool) {
        self.live.set_label(live_indicator(is_live, is_generating));
        let color = match (is_live, is_generating) {
            (true, true) => Color::from_rgb(34, 197, 94),
            (true, false) => Color::from_rgb(234, 179, 8),
            (false, _) => Color::from_rgb(120, 120, 120),
        };
        self.live.set_label_color(color);
        self.live.redraw();
    }

    /// Show a phase label, or clear it with `None`.
    pub fn set_phase(&mut self, label: Option<&str>) {
        self.phase.set_label(label.unwrap_or(""));
        self.phase.redraw();
    }

    pub fn set_stats(&mut self, stats: &DocumentStats, intent: Intent) {
        self.stats.set_label(&format_stats(stats));
        self.intent.set_label(intent.display_name());
        self.stats.redraw();
        self.intent.redraw();
    }

    /// Transient note in the phase slot, e.g. where an export went.
    pub fn set_note(&mut self, note: &str) {
        self.phase.set_label(note);
        self.phase.redraw();
    }

    pub fn apply_colors(&mut self, background: Color, text: Color) {
        self.row.set_color(background);
        for frame in [&mut self.phase, &mut self.intent, &mut self.stats] {
            frame.set_label_color(text);
        }
        self.row.redraw();
    }
}

fn status_frame(align: Align) -> Frame {
    let mut frame = Frame::default();
    frame.set_frame(FrameType::NoBox);
    frame.set_label_size(12);
    frame.set_align(align);
    frame
}

pub fn live_indicator(is_live: bool, is_generating: bool) -> &'static str {
    match (is_live, is_generating) {
        (true, true) => "\u{25CF} Live",
        (true, false) => "\u{25D0} Live (idle)",
        (false, _) => "\u{25CB} Off",
    }
}

pub fn format_stats(stats: &DocumentStats) -> String {
    format!(
        "Words: {}  Characters: {}  Reading: {} min",
        stats.word_count, stats.character_count, stats.estimated_reading_minutes
    )
}
