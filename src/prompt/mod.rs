//! Interactive prompt sequence
//!
//! Acquires every EntryDraft field from the terminal in a fixed order:
//! name -> comment -> exec -> terminal -> type -> icon -> categories.
//! Each prompt blocks until the user submits a line; validation failures
//! are recovered by re-prompting and never surface as errors.

use std::path::Path;

use inquire::ui::{Color, RenderConfig, StyleSheet};
use inquire::validator::Validation;
use inquire::{Confirm, Text};

use crate::categories;
use crate::error::Result;
use crate::models::{EntryDraft, EntryType};

/// Prompt styling derived once from the startup color decision
pub struct PromptTheme {
    render_config: RenderConfig<'static>,
}

impl PromptTheme {
    pub fn new(use_colors: bool) -> Self {
        let render_config = if use_colors {
            let mut config = RenderConfig::default_colored();
            config.prompt = StyleSheet::new().with_fg(Color::LightMagenta);
            config
        } else {
            RenderConfig::empty()
        };
        Self { render_config }
    }
}

/// Run the full prompt sequence and return the populated draft
pub fn collect_draft(theme: &PromptTheme) -> Result<EntryDraft> {
    let name = ask_name(theme)?;
    let comment = ask_comment(theme)?;
    let exec = ask_exec(theme)?;
    let terminal = ask_terminal(theme)?;
    let entry_type = ask_entry_type(theme)?;
    let icon = ask_icon(theme)?;
    let categories = ask_categories(theme)?;

    Ok(EntryDraft {
        name,
        comment,
        exec,
        terminal,
        entry_type,
        icon,
        categories,
    })
}

fn ask_name(theme: &PromptTheme) -> Result<String> {
    let name = Text::new("Name of the application:")
        .with_render_config(theme.render_config)
        .prompt()?;
    Ok(name)
}

fn ask_comment(theme: &PromptTheme) -> Result<String> {
    let comment = Text::new("Comment for the application:")
        .with_help_message("Enter to skip")
        .with_render_config(theme.render_config)
        .prompt()?;
    Ok(comment)
}

/// Ask for the executable path. A missing path is allowed only after the
/// user explicitly confirms it; declining re-asks the prompt.
fn ask_exec(theme: &PromptTheme) -> Result<String> {
    loop {
        let path = Text::new("Path to the executable:")
            .with_validator(|input: &str| {
                if input.is_empty() {
                    Ok(Validation::Invalid("Path must not be empty".into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .with_render_config(theme.render_config)
            .prompt()?;

        if path_exists(&path) {
            return Ok(path);
        }

        let keep = Confirm::new(&format!("File '{}' does not exist. Continue?", path))
            .with_default(false)
            .with_render_config(theme.render_config)
            .prompt()?;
        if keep {
            return Ok(path);
        }
    }
}

fn ask_terminal(theme: &PromptTheme) -> Result<bool> {
    let terminal = Confirm::new("Run in terminal?")
        .with_default(false)
        .with_render_config(theme.render_config)
        .prompt()?;
    Ok(terminal)
}

fn ask_entry_type(theme: &PromptTheme) -> Result<EntryType> {
    let input = Text::new("Type (Application/Link/Directory):")
        .with_default("Application")
        .with_validator(|input: &str| {
            if input.is_empty() || EntryType::from_input(input).is_some() {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    "Type must be Application, Link, or Directory".into(),
                ))
            }
        })
        .with_render_config(theme.render_config)
        .prompt()?;
    Ok(resolve_entry_type(&input))
}

fn ask_icon(theme: &PromptTheme) -> Result<String> {
    // Existence of the icon path is deliberately not checked.
    let icon = Text::new("Path to the icon:")
        .with_validator(|input: &str| {
            if input.is_empty() {
                Ok(Validation::Invalid("Path must not be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .with_render_config(theme.render_config)
        .prompt()?;
    Ok(icon)
}

fn ask_categories(theme: &PromptTheme) -> Result<Vec<String>> {
    let input = Text::new("Space-separated categories to show this app in:")
        .with_help_message("Enter to skip, see https://github.com/akpi816218/dtop#categories")
        .with_render_config(theme.render_config)
        .prompt()?;
    Ok(categories::filter_known(&input))
}

/// Map validated type input to an entry type, defaulting empty input
/// to Application
fn resolve_entry_type(input: &str) -> EntryType {
    EntryType::from_input(input).unwrap_or_default()
}

fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_entry_type_empty_defaults_to_application() {
        assert_eq!(resolve_entry_type(""), EntryType::Application);
    }

    #[test]
    fn test_resolve_entry_type_exact_literals() {
        assert_eq!(resolve_entry_type("Link"), EntryType::Link);
        assert_eq!(resolve_entry_type("Directory"), EntryType::Directory);
        assert_eq!(resolve_entry_type("Application"), EntryType::Application);
    }

    #[test]
    fn test_path_exists_for_real_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(path_exists(&file.path().display().to_string()));
    }

    #[test]
    fn test_path_exists_for_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(!path_exists(&missing.display().to_string()));
    }
}
