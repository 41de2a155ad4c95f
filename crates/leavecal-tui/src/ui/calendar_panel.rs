/// Month grid with up to two colored names per day and a "+N more" overflow
use crate::ui::fit_width;
use crate::ui::palette::token_color;
use chrono::NaiveDate;
use leavecal_core::{DayCell, MonthGrid, department_token};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct CalendarPanel<'a> {
    pub grid: &'a MonthGrid,
    pub selected_day: NaiveDate,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub is_loading: bool,
}

impl<'a> CalendarPanel<'a> {
    /// Draw the grid and return the area each day cell occupies
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Vec<(NaiveDate, Rect)> {
        let arrow_style = |enabled: bool| {
            if enabled {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };
        let mut title = vec![
            Span::styled(" ◀ ", arrow_style(self.can_go_back)),
            Span::styled(
                self.grid.month.label(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶ ", arrow_style(self.can_go_forward)),
        ];
        if self.is_loading {
            title.push(Span::styled("loading… ", Style::default().fg(Color::Yellow)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title).alignment(Alignment::Center))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width < 7 {
            return Vec::new();
        }

        let col_width = inner.width / 7;
        for (i, name) in WEEKDAYS.iter().enumerate() {
            let header = Rect::new(inner.x + i as u16 * col_width, inner.y, col_width, 1);
            Paragraph::new(*name)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .render(header, buf);
        }

        let areas = day_areas(inner, self.grid);
        for ((_, cell_area), cell) in areas.iter().zip(self.grid.days.iter()) {
            self.render_cell(cell, *cell_area, buf);
        }
        areas
    }

    fn render_cell(&self, cell: &DayCell, area: Rect, buf: &mut Buffer) {
        let is_selected = cell.date == self.selected_day;
        let border_color = if is_selected {
            Color::Cyan
        } else if cell.is_today {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let day_style = if cell.is_today {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!("{}", cell.day()), day_style))
            .border_style(Style::default().fg(border_color));
        if is_selected {
            block = block.border_style(
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let inner = block.inner(area);
        let width = inner.width as usize;
        let mut lines: Vec<Line> = cell
            .inline()
            .iter()
            .map(|r| {
                Line::from(Span::styled(
                    fit_width(r.first_name(), width),
                    Style::default().fg(token_color(department_token(&r.department))),
                ))
            })
            .collect();
        if cell.overflow() > 0 {
            lines.push(Line::from(Span::styled(
                fit_width(&format!("+{} more", cell.overflow()), width),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Cell rectangle for every day of the grid, laid out Sunday first below a
/// one-line weekday header. Empty when `inner` cannot fit one line per week,
/// so no rect ever extends past the panel.
pub fn day_areas(inner: Rect, grid: &MonthGrid) -> Vec<(NaiveDate, Rect)> {
    let rows = grid.weeks().len().max(1) as u16;
    let col_width = inner.width / 7;
    let row_height = inner.height.saturating_sub(1) / rows;
    if row_height == 0 || col_width == 0 {
        return Vec::new();
    }

    grid.days
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let slot = (grid.leading_blanks + i) as u16;
            let rect = Rect::new(
                inner.x + (slot % 7) * col_width,
                inner.y + 1 + (slot / 7) * row_height,
                col_width,
                row_height,
            );
            (cell.date, rect)
        })
        .collect()
}
