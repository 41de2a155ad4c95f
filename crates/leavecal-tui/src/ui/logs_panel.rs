/// Logs tab: the in-memory application log, newest at the bottom
use crate::stores::app_logs_store::AppLogsState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct LogsPanel {
    pub logs: Vec<String>,
    pub scroll_offset: usize,
}

impl LogsPanel {
    pub fn from_state(state: &AppLogsState) -> Self {
        Self {
            logs: state.logs.clone(),
            scroll_offset: state.scroll_offset,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.logs.is_empty() {
            Paragraph::new("No logs yet...")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Application Logs ")
                        .border_style(Style::default().fg(Color::Cyan)),
                )
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let total = self.logs.len();
        let end = total.saturating_sub(self.scroll_offset).max(inner_height.min(total));
        let start = end.saturating_sub(inner_height);

        let visible: Vec<Line> = self.logs[start..end]
            .iter()
            .map(|log| Line::from(log.as_str()))
            .collect();

        let title = if total > inner_height {
            format!(" Application Logs [{}/{}] ", end, total)
        } else {
            " Application Logs ".to_string()
        };

        Paragraph::new(visible)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
