//! The binding tree: commands, command lists, and nested submenus.

use serde::{Deserialize, Serialize};

/// One entry in the binding tree.
///
/// Discriminated by the `type` field in configuration files. Every
/// variant carries the trigger `key` (1-2 printable characters, unique
/// within its sibling list after deduplication) and a display `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Binding {
    /// Invokes a single host command.
    #[serde(rename = "command")]
    Command {
        key: String,
        name: String,
        /// Host command identifier to execute.
        command: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    /// Invokes several host commands in order.
    ///
    /// Order is significant. Execution does not roll back commands that
    /// already ran when a later one fails; that is the executor's
    /// contract, not this model's.
    #[serde(rename = "commands")]
    CommandList {
        key: String,
        name: String,
        commands: Vec<CommandInvocation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    /// Opens a nested menu of further bindings.
    #[serde(rename = "submenu")]
    Submenu {
        key: String,
        name: String,
        /// Must be non-empty; enforced by `validate_bindings`.
        items: Vec<Binding>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
}

impl Binding {
    /// The trigger key within this binding's own menu level.
    pub fn key(&self) -> &str {
        match self {
            Self::Command { key, .. } | Self::CommandList { key, .. } | Self::Submenu { key, .. } => {
                key
            }
        }
    }

    /// The display label.
    pub fn name(&self) -> &str {
        match self {
            Self::Command { name, .. }
            | Self::CommandList { name, .. }
            | Self::Submenu { name, .. } => name,
        }
    }

    /// Free-text detail override, if configured.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Command { detail, .. }
            | Self::CommandList { detail, .. }
            | Self::Submenu { detail, .. } => detail.as_deref(),
        }
    }

    /// Icon identifier, if configured.
    pub fn icon(&self) -> Option<&str> {
        match self {
            Self::Command { icon, .. }
            | Self::CommandList { icon, .. }
            | Self::Submenu { icon, .. } => icon.as_deref(),
        }
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self, Self::Submenu { .. })
    }
}

/// One command within a [`Binding::CommandList`]: either a bare command
/// identifier or a command with arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandInvocation {
    Id(String),
    WithArgs {
        command: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<serde_json::Value>,
    },
}

impl CommandInvocation {
    pub fn command(&self) -> &str {
        match self {
            Self::Id(command) => command,
            Self::WithArgs { command, .. } => command,
        }
    }

    pub fn args(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Id(_) => None,
            Self::WithArgs { args, .. } => args.as_ref(),
        }
    }
}

/// A leaf binding paired with the concatenated keys from the tree root
/// down to it. Produced by [`crate::tree::flatten`]; submenus never
/// appear here, only their descendants do.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingWithPath {
    pub binding: Binding,
    pub path: String,
}

/// A dropped same-key sibling, reported by [`crate::tree::deduplicate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// The colliding key.
    pub key: String,
    /// Rendered path prefix of the menu level the collision occurred at.
    pub path: String,
}
