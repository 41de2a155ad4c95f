use leavecal_core::{DepartmentToken, LEGEND};

/// Department name and color token per line, with the fallback for any other
/// department last
pub fn render() -> String {
    let width = LEGEND.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 2;
    let mut lines: Vec<String> = LEGEND
        .iter()
        .map(|(name, token)| format!("{name:<width$}{token}"))
        .collect();
    lines.push(format!("{:<width$}{}", "(other)", DepartmentToken::Slate));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_lists_every_department_in_order() {
        let out = render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "IT          blue");
        assert_eq!(lines[7], "C&F         yellow");
        assert_eq!(lines[8], "(other)     slate");
    }
}
