//! Session controller driving nested menu levels.
//!
//! Responsibilities:
//! - Open, descend, and tear down menu levels over a binding tree.
//! - Own the disambiguation timer and its stale-fire guard.
//! - Hand committed leaves to the executor and unmatched paths to the
//!   notifier.
//!
//! Does NOT handle:
//! - Keystroke matching itself (see `resolver`).
//! - Widget rendering or event production; the host forwards picker
//!   events into `handle_event`.
//!
//! Invariants:
//! - At most one level is live and at most one timer is armed at a
//!   time; arming aborts the previous timer first.
//! - Every keystroke and level change bumps the generation counter, so
//!   a timer fire that raced an event in the channel is a no-op.
//! - Every termination path (commit, reject, hidden) releases the
//!   level's timer and picker exactly once.

use std::time::Duration;

use leader_config::{Binding, MenuConfig, SortOrder, tree};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::host::{Executor, Notifier, Picker, PickerFactory};
use crate::item::MenuItem;
use crate::resolver::{KeyResolver, ResolveStep};

/// Events that drive a session. The host forwards picker events; the
/// session itself produces `TimerElapsed` through its event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// A keystroke of the picker's filter text.
    Key(String),
    /// The user accepted the highlighted entry.
    Accepted,
    /// The picker was hidden externally (focus loss, escape).
    Hidden,
    /// The disambiguation timer for the given generation fired.
    TimerElapsed(u64),
}

/// Whether the session is still consuming events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Finished,
}

/// Display and timing settings a session runs with.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub sort_order: SortOrder,
    pub show_icons: bool,
    pub show_detail: bool,
    pub key_sequence_timeout_ms: u64,
}

impl From<&MenuConfig> for SessionOptions {
    fn from(config: &MenuConfig) -> Self {
        Self {
            sort_order: config.sort_order,
            show_icons: config.show_icons,
            show_detail: config.show_detail,
            key_sequence_timeout_ms: config.key_sequence_timeout,
        }
    }
}

struct Level<P> {
    resolver: KeyResolver,
    picker: P,
}

/// Drives one interactive menu session across nested levels.
pub struct MenuSession<F, E, N>
where
    F: PickerFactory,
    E: Executor,
    N: Notifier,
{
    options: SessionOptions,
    factory: F,
    executor: E,
    notifier: N,
    events: UnboundedSender<MenuEvent>,
    current_path: Vec<String>,
    level: Option<Level<F::Picker>>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
    status: SessionStatus,
}

impl<F, E, N> MenuSession<F, E, N>
where
    F: PickerFactory,
    E: Executor,
    N: Notifier,
{
    /// Create a session. `events` is the sending half of the channel
    /// the host drains into [`Self::handle_event`]; the session uses it
    /// to deliver its own timer fires.
    pub fn new(
        options: SessionOptions,
        factory: F,
        executor: E,
        notifier: N,
        events: UnboundedSender<MenuEvent>,
    ) -> Self {
        Self {
            options,
            factory,
            executor,
            notifier,
            events,
            current_path: Vec::new(),
            level: None,
            generation: 0,
            timer: None,
            status: SessionStatus::Finished,
        }
    }

    /// Open the root menu level over the given bindings.
    pub fn start(&mut self, bindings: &[Binding]) {
        self.cancel_timer();
        self.current_path.clear();
        self.status = SessionStatus::Active;
        self.open_level(bindings);
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    /// Keys pressed so far to reach the current level.
    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    /// Single entry point for all session events.
    pub fn handle_event(&mut self, event: MenuEvent) {
        if self.is_finished() {
            return;
        }
        match event {
            MenuEvent::Key(text) => self.on_key(&text),
            MenuEvent::Accepted => self.on_accepted(),
            MenuEvent::Hidden => self.on_hidden(),
            MenuEvent::TimerElapsed(generation) => self.on_timer(generation),
        }
    }

    pub fn handle_keystroke(&mut self, text: &str) {
        self.handle_event(MenuEvent::Key(text.to_string()));
    }

    pub fn handle_accept(&mut self) {
        self.handle_event(MenuEvent::Accepted);
    }

    pub fn handle_hidden(&mut self) {
        self.handle_event(MenuEvent::Hidden);
    }

    fn on_key(&mut self, text: &str) {
        // A keystroke preempts any armed timer, including a fire already
        // queued behind this event.
        self.cancel_timer();
        self.generation += 1;

        let step = match self.level.as_mut() {
            Some(level) => level.resolver.handle_key(text),
            None => return,
        };

        match step {
            ResolveStep::Pending => {}
            ResolveStep::Commit(binding) => self.select(binding),
            ResolveStep::ArmTimer(binding) => {
                debug!(key = binding.key(), "exact match shadowed by longer key, arming timer");
                self.arm_timer();
            }
            ResolveStep::Reject(candidate) => self.reject(&candidate),
        }
    }

    fn on_accepted(&mut self) {
        self.cancel_timer();
        self.generation += 1;
        let selected = self.level.as_ref().and_then(|level| {
            level
                .picker
                .selected()
                .and_then(|index| level.resolver.siblings().get(index).cloned())
        });
        if let Some(binding) = selected {
            self.select(binding);
        }
    }

    fn on_hidden(&mut self) {
        self.cancel_timer();
        self.generation += 1;
        // Externally hidden: no outcome is emitted, just release.
        if let Some(mut level) = self.level.take() {
            level.picker.dispose();
        }
        self.status = SessionStatus::Finished;
        debug!("menu session cancelled");
    }

    fn on_timer(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "stale timer fire ignored");
            return;
        }
        self.timer = None;
        let pending = self
            .level
            .as_mut()
            .and_then(|level| level.resolver.take_pending());
        if let Some(binding) = pending {
            self.select(binding);
        }
    }

    /// Commit a resolved binding: descend into submenus, execute leaves.
    fn select(&mut self, binding: Binding) {
        self.cancel_timer();
        match binding {
            Binding::Submenu { key, items, .. } => {
                debug!(key = %key, "descending into submenu");
                self.current_path.push(key);
                self.open_level(&items);
            }
            leaf => {
                debug!(key = leaf.key(), "committing binding");
                self.teardown_picker();
                self.status = SessionStatus::Finished;
                // Fire-and-forget: failures are reported downstream by
                // the executor, never acted on here.
                if let Err(error) = self.executor.execute(&leaf) {
                    warn!(%error, key = leaf.key(), "binding execution failed");
                }
            }
        }
    }

    fn reject(&mut self, candidate: &str) {
        let attempted = format!("{}{candidate}", self.current_path.concat());
        debug!(%attempted, "no binding for key sequence");
        self.notifier.no_binding(&attempted);
        self.teardown_picker();
        self.status = SessionStatus::Finished;
    }

    fn open_level(&mut self, siblings: &[Binding]) {
        self.generation += 1;
        if let Some(mut previous) = self.level.take() {
            previous.picker.dispose();
        }

        let sorted = tree::sort(siblings, self.options.sort_order);
        let items: Vec<MenuItem> = sorted
            .iter()
            .map(|b| MenuItem::for_binding(b, self.options.show_icons, self.options.show_detail))
            .collect();

        let mut picker = self.factory.create();
        picker.set_items(items);
        picker.set_placeholder(&self.placeholder());
        picker.show();

        self.level = Some(Level {
            resolver: KeyResolver::new(sorted, self.options.key_sequence_timeout_ms),
            picker,
        });
    }

    fn placeholder(&self) -> String {
        let keys = self.current_path.concat();
        if keys.is_empty() {
            "Select a command".to_string()
        } else {
            format!("[{keys}] Select a command")
        }
    }

    fn arm_timer(&mut self) {
        self.cancel_timer();
        let generation = self.generation;
        let delay = Duration::from_millis(self.options.key_sequence_timeout_ms);
        let events = self.events.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(MenuEvent::TimerElapsed(generation));
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn teardown_picker(&mut self) {
        if let Some(mut level) = self.level.take() {
            level.picker.hide();
            level.picker.dispose();
        }
    }
}

impl<F, E, N> Drop for MenuSession<F, E, N>
where
    F: PickerFactory,
    E: Executor,
    N: Notifier,
{
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
