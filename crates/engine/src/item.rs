//! Display item derivation for menu entries.
//!
//! Responsibilities:
//! - Derive the label, icon, description, and detail text shown for a
//!   binding, honoring the show-icons and show-detail settings.
//!
//! Does NOT handle:
//! - Rendering; the host's picker decides how to display these fields.

use leader_config::{Binding, BindingWithPath};

/// Icon used for submenus without an explicit icon.
const SUBMENU_ICON: &str = "folder";
/// Icon used for leaf bindings without an explicit icon.
const LEAF_ICON: &str = "play";
/// Marker appended to submenu descriptions.
const SUBMENU_MARKER: &str = "›";

/// One labeled entry handed to the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// The trigger key (or flat path), padded to two columns.
    pub label: String,
    /// Icon identifier, `None` when icons are disabled.
    pub icon: Option<String>,
    /// The binding's name; submenus carry a trailing marker.
    pub description: String,
    /// Detail line, `None` when details are disabled.
    pub detail: Option<String>,
}

impl MenuItem {
    /// Build the item for one binding at the current menu level.
    pub fn for_binding(binding: &Binding, show_icons: bool, show_detail: bool) -> Self {
        Self::build(binding, binding.key(), show_icons, show_detail)
    }

    /// Build the item for a flattened leaf, labeled by its full path.
    pub fn for_flat(entry: &BindingWithPath, show_icons: bool, show_detail: bool) -> Self {
        Self::build(&entry.binding, &entry.path, show_icons, show_detail)
    }

    fn build(binding: &Binding, keys: &str, show_icons: bool, show_detail: bool) -> Self {
        Self {
            label: format!("{keys:<2}"),
            icon: icon_for(binding, show_icons),
            description: description_for(binding),
            detail: detail_for(binding, show_detail),
        }
    }
}

fn icon_for(binding: &Binding, show_icons: bool) -> Option<String> {
    if !show_icons {
        return None;
    }
    let icon = binding.icon().unwrap_or(if binding.is_submenu() {
        SUBMENU_ICON
    } else {
        LEAF_ICON
    });
    Some(icon.to_string())
}

fn description_for(binding: &Binding) -> String {
    if binding.is_submenu() {
        format!("{} {SUBMENU_MARKER}", binding.name())
    } else {
        binding.name().to_string()
    }
}

fn detail_for(binding: &Binding, show_detail: bool) -> Option<String> {
    if !show_detail {
        return None;
    }
    if let Some(detail) = binding.detail() {
        if !detail.is_empty() {
            return Some(detail.to_string());
        }
    }
    Some(match binding {
        Binding::Command { command, .. } => command.clone(),
        Binding::CommandList { commands, .. } => format!("{} commands", commands.len()),
        Binding::Submenu { items, .. } => format!("{} items", items.len()),
    })
}
