/// Layout manager for the TUI application
use crate::actions::TabId;
use crate::stores::{AppLogsStore, CalendarStore, LeavesStore, UIStore};
use crate::ui::{CalendarPanel, DetailPanel, Legend, LogsPanel, StatsBar};
use itertools::Itertools;
use leavecal_core::utils::pluralise;
use leavecal_core::{DayDetail, MonthGrid};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Widget, Wrap},
};

const CALENDAR_KEYS: [&str; 7] = [
    "q:Quit",
    "1/2:Switch Tab",
    "h/l:Month",
    "←→↑↓:Day",
    "Enter:Details",
    "Esc:Close",
    "?:Help",
];

const LOGS_KEYS: [&str; 4] = ["q:Quit", "1/2:Switch Tab", "j/k:Scroll", "?:Help"];

/// Render the complete application layout
pub fn render_layout(
    frame: &mut Frame,
    leaves_store: &LeavesStore,
    calendar_store: &CalendarStore,
    ui_store: &UIStore,
    app_logs_store: &AppLogsStore,
) {
    let area = frame.area();

    // Main layout: Header | Tabs | Content | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, vertical_chunks[0], leaves_store);

    let ui_state = ui_store.get_state();
    render_tabs(frame, vertical_chunks[1], &ui_state.active_tab);

    match ui_state.active_tab {
        TabId::Calendar => {
            render_calendar_content(frame, vertical_chunks[2], leaves_store, calendar_store);
        }
        TabId::Logs => {
            calendar_store.set_day_areas(Vec::new());
            render_logs_content(frame, vertical_chunks[2], app_logs_store);
        }
    }

    render_footer(frame, vertical_chunks[3], &ui_state.active_tab);

    if ui_state.show_help {
        render_help_popup(frame, area);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active_tab: &TabId) {
    let tab_titles = vec!["1: Calendar", "2: Logs"];
    let selected_index = match active_tab {
        TabId::Calendar => 0,
        TabId::Logs => 1,
    };

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected_index)
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_calendar_content(
    frame: &mut Frame,
    area: Rect,
    leaves_store: &LeavesStore,
    calendar_store: &CalendarStore,
) {
    let leaves_state = leaves_store.get_state();
    let calendar_state = calendar_store.get_state();

    // Stats | Legend | Calendar (+ Details)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    StatsBar::new(leaves_store.summary(calendar_state.today)).render(chunks[0], frame.buffer_mut());
    Legend.render(chunks[1], frame.buffer_mut());

    let grid = MonthGrid::build(
        calendar_state.month(),
        &leaves_state.dataset.records,
        calendar_state.today,
    );

    let body = if calendar_state.show_detail {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[2])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(chunks[2])
    };

    let panel = CalendarPanel {
        grid: &grid,
        selected_day: calendar_state.selected_day,
        can_go_back: calendar_state.window.can_go_back(),
        can_go_forward: calendar_state.window.can_go_forward(),
        is_loading: leaves_state.is_loading,
    };
    let areas = panel.render(body[0], frame.buffer_mut());
    calendar_store.set_day_areas(areas);

    if calendar_state.show_detail {
        let detail = grid
            .cell(calendar_state.selected_day)
            .and_then(DayDetail::for_cell);
        DetailPanel::new(calendar_state.selected_day, detail).render(body[1], frame.buffer_mut());
    }
}

fn render_logs_content(frame: &mut Frame, area: Rect, app_logs_store: &AppLogsStore) {
    let app_logs_state = app_logs_store.get_state();
    let logs_panel = LogsPanel::from_state(&app_logs_state);
    logs_panel.render(area, frame.buffer_mut());
}

fn render_header(frame: &mut Frame, area: Rect, leaves_store: &LeavesStore) {
    let leaves_state = leaves_store.get_state();

    let status_string;
    let status = if leaves_state.is_loading {
        "Loading..."
    } else if let Some(err) = &leaves_state.error {
        err.as_str()
    } else {
        status_string = pluralise(leaves_state.dataset.len() as i64, "record");
        &status_string
    };

    let status_color = if leaves_state.error.is_some() {
        Color::Red
    } else if leaves_state.is_loading {
        Color::Yellow
    } else {
        Color::Green
    };

    let header_text = Line::from(vec![
        Span::styled(
            " LEAVECAL ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Management Leave Tracker | "),
        Span::styled(status, Style::default().fg(status_color)),
    ]);

    Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_footer(frame: &mut Frame, area: Rect, active_tab: &TabId) {
    let help_text = match active_tab {
        TabId::Calendar => CALENDAR_KEYS.iter().join(" | "),
        TabId::Logs => LOGS_KEYS.iter().join(" | "),
    };

    let footer_text = Line::from(vec![Span::raw(" "), Span::raw(help_text)]);

    Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    let lines = vec![
        Line::styled("Calendar", Style::default().add_modifier(Modifier::BOLD)),
        Line::from("  h / p / PageUp      previous month"),
        Line::from("  l / n / PageDown    next month"),
        Line::from("  arrows / j / k      move the selected day"),
        Line::from("  Enter / Space       show or hide day details"),
        Line::from("  Esc                 close day details"),
        Line::from("  mouse               hover a day for details, wheel changes month"),
        Line::from(""),
        Line::styled("General", Style::default().add_modifier(Modifier::BOLD)),
        Line::from("  1 / 2               switch tab"),
        Line::from("  ?                   toggle this help"),
        Line::from("  q                   quit"),
    ];

    Clear.render(popup, frame.buffer_mut());
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .render(popup, frame.buffer_mut());
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
