/// Department color legend
use crate::ui::palette::token_color;
use leavecal_core::LEGEND;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Legend;

impl Legend {
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = LEGEND
            .iter()
            .flat_map(|(name, token)| {
                [
                    Span::styled("■ ", Style::default().fg(token_color(*token))),
                    Span::raw(*name),
                    Span::raw("   "),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
