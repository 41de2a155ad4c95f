/// Detail panel listing everyone on leave for the selected day
use crate::ui::palette::token_color;
use chrono::NaiveDate;
use leavecal_core::DayDetail;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct DetailPanel {
    pub date: NaiveDate,
    pub detail: Option<DayDetail>,
}

impl DetailPanel {
    pub fn new(date: NaiveDate, detail: Option<DayDetail>) -> Self {
        Self { date, detail }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Day Details ")
            .border_style(Style::default().fg(Color::Cyan));

        let Some(detail) = &self.detail else {
            Paragraph::new(format!(
                "No one on leave on {}",
                self.date.format("%b %-d, %Y")
            ))
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .render(area, buf);
            return;
        };

        let mut lines = vec![
            Line::styled(
                detail.header(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Line::from(""),
        ];
        for entry in &detail.entries {
            lines.push(Line::from(Span::styled(
                format!(" {} ", entry.department),
                Style::default()
                    .fg(Color::Black)
                    .bg(token_color(entry.token))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::styled(
                entry.employee_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(
                entry.designation.clone(),
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::styled(
                entry.range.clone(),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::styled(
                entry.total.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
