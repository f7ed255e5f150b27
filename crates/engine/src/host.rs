//! Capabilities the host must provide to run a menu session.
//!
//! Responsibilities:
//! - Define the picker, executor, and notifier seams the session
//!   controller drives.
//!
//! Does NOT handle:
//! - Any concrete widget, command execution, or notification surface;
//!   those live in the embedding application.

use anyhow::Result;
use leader_config::Binding;

use crate::item::MenuItem;

/// Creates one picker widget per menu level.
///
/// The session disposes the previous level's picker before asking for a
/// new one, so implementations may pool or recreate freely.
pub trait PickerFactory {
    type Picker: Picker;

    fn create(&mut self) -> Self::Picker;
}

/// A pop-up list widget showing one menu level.
///
/// The host must forward the widget's text-change, accept, and hide
/// events to the session as [`crate::MenuEvent`]s; the engine treats
/// those events as the sole triggers for its state transitions.
pub trait Picker {
    fn set_items(&mut self, items: Vec<MenuItem>);
    fn set_placeholder(&mut self, text: &str);
    fn show(&mut self);
    fn hide(&mut self);
    fn dispose(&mut self);

    /// Index of the highlighted entry in the most recently set item
    /// list, used when the user accepts instead of typing a key.
    fn selected(&self) -> Option<usize>;
}

/// Runs committed leaf bindings.
///
/// Invoked exactly once per committed leaf. Execution is
/// fire-and-forget from the engine's perspective: a returned error is
/// logged and never retried or inspected. Command lists run in order
/// and a failure must not roll back commands that already ran.
pub trait Executor {
    fn execute(&mut self, binding: &Binding) -> Result<()>;
}

/// User-facing reporting for unmatched key sequences.
pub trait Notifier {
    /// Called with the full attempted path when no binding matches.
    fn no_binding(&mut self, attempted_path: &str);
}
