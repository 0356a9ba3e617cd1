/// Languages checked against each posting, in table-column order.
/// Popular languages for 2023, taken from
/// <https://www.simplilearn.com/best-programming-languages-start-learning-today-article>.
pub const LANGUAGES: &[&str] = &[
    "javascript",
    "python",
    "golang",
    "java",
    "kotlin",
    "php",
    "c#",
    "swift",
    "r",
    "ruby",
    "c",
    "c++",
    "matlab",
    "typescript",
    "scala",
    "sql",
    "html",
    "css",
    "mysql",
    "nosql",
    "rust",
    "perl",
];

/// Display names that are not valid SQL identifiers, with their storage form.
const RENAMES: &[(&str, &str)] = &[("c#", "c_sharp"), ("c++", "cpp")];

/// Storage-safe column identifier for a vocabulary entry.
pub fn storage_column(display: &'static str) -> &'static str {
    RENAMES
        .iter()
        .find(|(from, _)| *from == display)
        .map_or(display, |(_, to)| *to)
}

/// Storage column names in vocabulary order.
pub fn storage_columns() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|lang| storage_column(lang))
}

// ── Tests ──
