//! Configuration and binding-tree model for the leader menu.
//!
//! This crate provides the binding tree data model, the configuration
//! schema users write their bindings in, construction-time validation,
//! and the pure tree operations (flatten, merge, deduplicate, sort) the
//! menu engine builds on.

pub mod constants;
pub mod defaults;
mod effective;
mod loader;
pub mod tree;
pub mod types;
pub mod validate;

pub use effective::effective_bindings;
pub use loader::load_config;
pub use types::{
    Binding, BindingWithPath, CommandInvocation, Duplicate, MenuConfig, MergeStrategy, SortOrder,
};
pub use validate::{ConfigError, validate_bindings, validate_config};
