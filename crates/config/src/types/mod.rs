//! Configuration type definitions for the leader menu.
//!
//! Responsibilities:
//! - Define the binding tree (`Binding`) and its leaf projection
//!   (`BindingWithPath`).
//! - Define the user-facing configuration schema (`MenuConfig`) and its
//!   enums (`MergeStrategy`, `SortOrder`).
//!
//! Does NOT handle:
//! - Validation of binding trees or timeouts (see `validate` module at
//!   crate root).
//! - Tree transformations such as merging or deduplication (see `tree`
//!   module at crate root).
//!
//! Invariants:
//! - `Binding` serialization matches the external schema: a `type` tag
//!   with values `command`, `commands`, or `submenu`, and camelCase
//!   config field names.
//! - Types here are plain data; a tree is immutable once built and a
//!   configuration reload produces a wholly new tree.

mod binding;
mod settings;

pub use binding::{Binding, BindingWithPath, CommandInvocation, Duplicate};
pub use settings::{MenuConfig, MergeStrategy, SortOrder};
