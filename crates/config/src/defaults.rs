//! Built-in demonstration bindings.
//!
//! Responsibilities:
//! - Provide the binding tree used when the user has no bindings of
//!   their own, and the base tree user bindings merge onto.
//!
//! Does NOT handle:
//! - Merge-strategy selection (see `effective` module).
//!
//! Invariants:
//! - The default tree passes `validate_bindings` and contains no
//!   duplicate keys at any level.

use crate::types::{Binding, CommandInvocation};

fn command(key: &str, name: &str, command_id: &str, icon: &str) -> Binding {
    Binding::Command {
        key: key.into(),
        name: name.into(),
        command: command_id.into(),
        args: None,
        detail: None,
        icon: Some(icon.into()),
    }
}

/// The built-in binding tree.
///
/// Intentionally demonstrates every binding kind, nested submenus, and
/// 2-character keys (`of`, `od`, `qa`, `wq`).
pub fn default_bindings() -> Vec<Binding> {
    vec![
        Binding::Submenu {
            key: "b".into(),
            name: "Buffer".into(),
            detail: Some("File and editor commands".into()),
            icon: Some("code".into()),
            items: vec![
                command("s", "Save", "file.save", "save"),
                command("S", "Save All", "file.saveAll", "save-all"),
                command("c", "Close Editor", "editor.close", "close"),
                command("f", "Format Document", "editor.format", "json"),
            ],
        },
        Binding::Submenu {
            key: "g".into(),
            name: "Navigate".into(),
            detail: Some("Go-to and symbol commands".into()),
            icon: Some("milestone".into()),
            items: vec![
                command("d", "Go to Definition", "editor.goToDefinition", "symbol-class"),
                command("r", "Go to References", "editor.goToReferences", "references"),
                command("s", "Go to Symbol", "workspace.gotoSymbol", "mention"),
            ],
        },
        Binding::Submenu {
            key: "p".into(),
            name: "Project".into(),
            detail: Some("Project and workspace commands".into()),
            icon: Some("root-folder".into()),
            items: vec![
                command("of", "Open File", "workspace.openFile", "file"),
                command("od", "Open Directory", "workspace.openFolder", "folder-opened"),
                command("r", "Open Recent", "workspace.openRecent", "history"),
            ],
        },
        Binding::Submenu {
            key: "s".into(),
            name: "Search".into(),
            detail: Some("Search commands".into()),
            icon: Some("search".into()),
            items: vec![
                command("f", "Find in File", "editor.find", "search-fuzzy"),
                command("F", "Find in Project", "workspace.findInFiles", "search"),
                command("r", "Replace in File", "editor.replace", "replace"),
            ],
        },
        command("f", "Format Document", "editor.format", "json"),
        command("q", "Close Editor", "editor.close", "close"),
        command("qa", "Close All Editors", "editor.closeAll", "close-all"),
        command("w", "Write", "file.save", "save"),
        Binding::CommandList {
            key: "wq".into(),
            name: "Write and Close Editor".into(),
            detail: Some("Save and close the current editor".into()),
            icon: Some("save-all".into()),
            commands: vec![
                CommandInvocation::Id("file.save".into()),
                CommandInvocation::Id("editor.close".into()),
            ],
        },
    ]
}
