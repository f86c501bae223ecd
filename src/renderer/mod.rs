//! Desktop entry rendering
//!
//! Assembles a populated EntryDraft into the freedesktop.org
//! `[Desktop Entry]` key=value text block. Pure string work; cannot fail.

use crate::models::EntryDraft;

/// Exec prefix used when the entry should run in a terminal
pub const TERMINAL_PREFIX: &str = "x-terminal-emulator -e ";

/// Render a draft as a desktop entry text block.
///
/// The Comment line is omitted entirely when the comment is empty.
/// Identical drafts always yield byte-identical output.
pub fn render(draft: &EntryDraft) -> String {
    let mut out = String::from("[Desktop Entry]\n");

    out.push_str(&format!("Name={}\n", draft.name));

    if !draft.comment.is_empty() {
        out.push_str(&format!("Comment={}\n", draft.comment));
    }

    let prefix = if draft.terminal { TERMINAL_PREFIX } else { "" };
    out.push_str(&format!("Exec={}{}\n", prefix, draft.exec));

    out.push_str(&format!("Type={}\n", draft.entry_type));
    out.push_str(&format!("Icon={}\n", draft.icon));
    out.push_str(&format!("Categories={}\n", draft.categories.join(";")));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories;
    use crate::models::EntryType;

    fn sample_draft() -> EntryDraft {
        EntryDraft {
            name: "Foo".to_string(),
            comment: String::new(),
            exec: "/usr/bin/foo".to_string(),
            terminal: false,
            entry_type: EntryType::Application,
            icon: "/icons/foo.png".to_string(),
            categories: vec!["Utility".to_string(), "Office".to_string()],
        }
    }

    #[test]
    fn test_render_basic_block() {
        let output = render(&sample_draft());
        assert_eq!(
            output,
            "[Desktop Entry]\n\
             Name=Foo\n\
             Exec=/usr/bin/foo\n\
             Type=Application\n\
             Icon=/icons/foo.png\n\
             Categories=Utility;Office\n"
        );
    }

    #[test]
    fn test_render_omits_empty_comment() {
        let output = render(&sample_draft());
        assert!(!output.contains("Comment="));
    }

    #[test]
    fn test_render_includes_nonempty_comment() {
        let mut draft = sample_draft();
        draft.comment = "A foo tool".to_string();
        let output = render(&draft);
        assert!(output.contains("Comment=A foo tool\n"));
    }

    #[test]
    fn test_render_terminal_prefix() {
        let mut draft = sample_draft();
        draft.terminal = true;
        let output = render(&draft);
        assert!(output.contains("Exec=x-terminal-emulator -e /usr/bin/foo\n"));
    }

    #[test]
    fn test_render_no_terminal_prefix() {
        let output = render(&sample_draft());
        assert!(output.contains("Exec=/usr/bin/foo\n"));
    }

    #[test]
    fn test_render_entry_types() {
        let mut draft = sample_draft();
        draft.entry_type = EntryType::Link;
        assert!(render(&draft).contains("Type=Link\n"));
        draft.entry_type = EntryType::Directory;
        assert!(render(&draft).contains("Type=Directory\n"));
    }

    #[test]
    fn test_render_empty_categories() {
        let mut draft = sample_draft();
        draft.categories = vec![];
        assert!(render(&draft).contains("Categories=\n"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let draft = sample_draft();
        assert_eq!(render(&draft), render(&draft));
    }

    #[test]
    fn test_render_full_draft_scenario() {
        // name "Foo", empty comment, no terminal, empty type input
        // (defaulted to Application), categories "Utility Blah Office"
        let draft = EntryDraft {
            name: "Foo".to_string(),
            comment: String::new(),
            exec: "/usr/bin/foo".to_string(),
            terminal: false,
            entry_type: EntryType::default(),
            icon: "/icons/foo.png".to_string(),
            categories: categories::filter_known("Utility Blah Office"),
        };
        let output = render(&draft);
        assert!(output.contains("Name=Foo\n"));
        assert!(!output.contains("Comment="));
        assert!(output.contains("Exec=/usr/bin/foo\n"));
        assert!(output.contains("Type=Application\n"));
        assert!(output.contains("Icon=/icons/foo.png\n"));
        assert!(output.contains("Categories=Utility;Office\n"));
    }
}
