/// Four summary counters above the calendar
use leavecal_core::LeaveSummary;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatsBar {
    pub summary: LeaveSummary,
}

impl StatsBar {
    pub fn new(summary: LeaveSummary) -> Self {
        Self { summary }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let cards = [
            ("On Leave Today", self.summary.total_employees_on_leave.to_string(), Color::Cyan),
            ("Pending Approvals", self.summary.pending_approvals.to_string(), Color::Yellow),
            ("Total Managers", self.summary.total_managers.to_string(), Color::Green),
            (
                "On Leave This Week",
                self.summary.managers_on_leave_this_week.to_string(),
                Color::Magenta,
            ),
        ];

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for ((title, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
            Paragraph::new(Line::from(vec![Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(*chunk, buf);
        }
    }
}
