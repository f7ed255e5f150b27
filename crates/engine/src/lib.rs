//! Interactive key-sequence engine for the leader menu.
//!
//! This crate turns a validated binding tree into an interactive
//! session: the host supplies a picker widget, an executor, and a
//! notifier; the engine resolves keystrokes level by level, descends
//! into submenus, and commits leaf bindings to the executor.
//!
//! The host drives the engine by forwarding its widget events:
//!
//! ```ignore
//! let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut session = MenuSession::new(options, factory, executor, notifier, events_tx);
//! session.start(&bindings);
//!
//! // Forward picker events and internal timer events until done.
//! while let Some(event) = events_rx.recv().await {
//!     session.handle_event(event);
//!     if session.is_finished() {
//!         break;
//!     }
//! }
//! ```

pub mod host;
pub mod item;
pub mod resolver;
pub mod session;

pub use host::{Executor, Notifier, Picker, PickerFactory};
pub use item::MenuItem;
pub use resolver::{KeyResolver, ResolveStep};
pub use session::{MenuEvent, MenuSession, SessionOptions, SessionStatus};
