use std::fmt;

/// Desktop entry type, per the freedesktop.org specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryType {
    #[default]
    Application,
    Link,
    Directory,
}

impl EntryType {
    /// Parse user input into an entry type. Exact match on the three
    /// literal spellings; anything else is rejected.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "Application" => Some(EntryType::Application),
            "Link" => Some(EntryType::Link),
            "Directory" => Some(EntryType::Directory),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryType::Application => "Application",
            EntryType::Link => "Link",
            EntryType::Directory => "Directory",
        };
        write!(f, "{}", s)
    }
}

/// All fields of one desktop entry, collected field-by-field by the prompt
/// sequence and consumed once by the renderer. Lives only for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    /// Application name
    pub name: String,
    /// Optional comment; an empty string means "no comment line"
    pub comment: String,
    /// Path to the executable (may not exist if the user confirmed it)
    pub exec: String,
    /// Whether to wrap exec in a terminal emulator invocation
    pub terminal: bool,
    /// Entry type
    pub entry_type: EntryType,
    /// Path to the icon (existence not checked)
    pub icon: String,
    /// Catalog-filtered category tokens, in input order
    pub categories: Vec<String>,
}
