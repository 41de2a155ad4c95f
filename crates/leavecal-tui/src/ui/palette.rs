use leavecal_core::DepartmentToken;
use ratatui::style::Color;

/// Terminal color for a department token
pub fn token_color(token: DepartmentToken) -> Color {
    match token {
        DepartmentToken::Blue => Color::LightBlue,
        DepartmentToken::Green => Color::LightGreen,
        DepartmentToken::Purple => Color::LightMagenta,
        DepartmentToken::Pink => Color::Rgb(255, 150, 200),
        DepartmentToken::Orange => Color::Rgb(255, 165, 80),
        DepartmentToken::Gray => Color::Gray,
        DepartmentToken::Cyan => Color::LightCyan,
        DepartmentToken::Yellow => Color::LightYellow,
        DepartmentToken::Slate => Color::Rgb(148, 163, 184),
    }
}
