use serde::Serialize;
use std::fmt;

/// Visual category used purely for color-coding leave entries by department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentToken {
    Blue,
    Green,
    Purple,
    Pink,
    Orange,
    Gray,
    Cyan,
    Yellow,
    /// anything not in the known department list
    Slate,
}

impl fmt::Display for DepartmentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Gray => "gray",
            Self::Cyan => "cyan",
            Self::Yellow => "yellow",
            Self::Slate => "slate",
        };
        f.write_str(s)
    }
}

/// Named departments in legend order
pub const LEGEND: [(&str, DepartmentToken); 8] = [
    ("IT", DepartmentToken::Blue),
    ("Sales", DepartmentToken::Green),
    ("Finance", DepartmentToken::Purple),
    ("HR", DepartmentToken::Pink),
    ("Operations", DepartmentToken::Orange),
    ("General", DepartmentToken::Gray),
    ("Transport", DepartmentToken::Cyan),
    ("C&F", DepartmentToken::Yellow),
];

/// Total mapping from a department name to its token. Matching is exact and
/// case-sensitive.
pub fn department_token(department: &str) -> DepartmentToken {
    match department {
        "IT" => DepartmentToken::Blue,
        "Sales" => DepartmentToken::Green,
        "Finance" => DepartmentToken::Purple,
        "HR" => DepartmentToken::Pink,
        "Operations" => DepartmentToken::Orange,
        "General" => DepartmentToken::Gray,
        "Transport" => DepartmentToken::Cyan,
        "C&F" => DepartmentToken::Yellow,
        _ => DepartmentToken::Slate,
    }
}
