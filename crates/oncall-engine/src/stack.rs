//! LIFO stack of currently active overrides.
//!
//! The top of the stack is the most recently started override still in
//! effect. Nesting guarantees that the override whose end fires is always the
//! one on top.

use chrono::{DateTime, Utc};

use crate::model::Override;

#[derive(Debug, Default, Clone)]
pub struct OverrideStack<'a> {
    entries: Vec<&'a Override>,
}

impl<'a> OverrideStack<'a> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build the stack as it stands at `from`.
    ///
    /// Every override with `start < from < end` is pushed oldest first. The
    /// input must already be in precedence order (start ascending, enclosing
    /// overrides before the ones nested in them). Overrides starting exactly
    /// at `from` are left for their own start event.
    pub fn seeded<I>(ordered: I, from: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a Override>,
    {
        let entries = ordered
            .into_iter()
            .filter(|o| o.start < from && from < o.end)
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, entry: &'a Override) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<&'a Override> {
        self.entries.pop()
    }

    pub fn top(&self) -> Option<&'a Override> {
        self.entries.last().copied()
    }

    /// The user of the innermost active override, if any.
    pub fn current(&self) -> Option<&'a str> {
        self.top().map(|o| o.user.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
