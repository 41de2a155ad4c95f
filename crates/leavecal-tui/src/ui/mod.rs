/// UI module - panels and rendering components
pub mod calendar_panel;
pub mod detail_panel;
pub mod layout;
pub mod legend;
pub mod logs_panel;
pub mod palette;
pub mod stats_bar;

pub use calendar_panel::CalendarPanel;
pub use detail_panel::DetailPanel;
pub use layout::render_layout;
pub use legend::Legend;
pub use logs_panel::LogsPanel;
pub use stats_bar::StatsBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `width` terminal columns, marking the cut with `…`
pub fn fit_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
