//! Per-level key-sequence resolution.
//!
//! Responsibilities:
//! - Decide, after each keystroke at one menu level, whether to commit
//!   a binding, keep waiting, arm the disambiguation timer, or reject.
//!
//! Does NOT handle:
//! - Timers or teardown; the session controller owns both. The
//!   resolver only reports when a timer should be armed.
//!
//! Invariants:
//! - The timer is requested only when an exact match is also a strict
//!   prefix of a longer sibling key and the timeout is non-zero.
//! - A prefix-only state never arms a timer; ambiguity without a
//!   completed match waits indefinitely.
//! - A zero timeout commits the first exact match immediately, which
//!   makes longer keys sharing that prefix unreachable through the
//!   menu. That is deliberate; such bindings stay reachable through a
//!   flat search surface built on `tree::flatten`.

use leader_config::Binding;

/// Outcome of feeding one keystroke to the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveStep {
    /// The input is a prefix of at least one key; wait for more.
    Pending,
    /// Commit this binding now.
    Commit(Binding),
    /// Exact match shadowed by a longer key: the caller should arm the
    /// disambiguation timer and later call [`KeyResolver::take_pending`].
    ArmTimer(Binding),
    /// No key starts with the input; carries the attempted candidate.
    Reject(String),
}

/// State machine scoped to one menu level's sibling list.
///
/// Reset by construction whenever a new level is entered.
#[derive(Debug)]
pub struct KeyResolver {
    siblings: Vec<Binding>,
    timeout_ms: u64,
    typed: String,
    pending: Option<Binding>,
}

impl KeyResolver {
    /// Build a resolver over one level's sorted siblings.
    ///
    /// The siblings must already be deduplicated: at most one sibling
    /// per key.
    pub fn new(siblings: Vec<Binding>, timeout_ms: u64) -> Self {
        Self {
            siblings,
            timeout_ms,
            typed: String::new(),
            pending: None,
        }
    }

    /// The level's siblings, in display order.
    pub fn siblings(&self) -> &[Binding] {
        &self.siblings
    }

    /// Characters accepted so far at this level.
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Feed the next keystroke.
    ///
    /// A new keystroke always supersedes a previously armed match: the
    /// caller must cancel its timer before acting on the result.
    pub fn handle_key(&mut self, text: &str) -> ResolveStep {
        self.pending = None;
        let mut candidate = std::mem::take(&mut self.typed);
        candidate.push_str(text);

        let exact = self
            .siblings
            .iter()
            .position(|b| b.key() == candidate);
        let has_longer = self
            .siblings
            .iter()
            .any(|b| b.key().starts_with(&candidate) && b.key().len() > candidate.len());

        if let Some(index) = exact {
            let binding = self.siblings[index].clone();
            if !has_longer || self.timeout_ms == 0 {
                return ResolveStep::Commit(binding);
            }
            self.typed = candidate;
            self.pending = Some(binding.clone());
            return ResolveStep::ArmTimer(binding);
        }

        if has_longer {
            self.typed = candidate;
            return ResolveStep::Pending;
        }
        ResolveStep::Reject(candidate)
    }

    /// Take the armed exact match when the disambiguation timer fires.
    pub fn take_pending(&mut self) -> Option<Binding> {
        self.pending.take()
    }
}
