//! Undo/redo over whole-document snapshots.

use std::collections::VecDeque;

/// Append-only log of snapshots with a cursor on the current one.
///
/// Pushing a snapshot equal to the current one is a no-op, so edits that
/// change nothing never create an undo step. Pushing after an undo discards
/// the redo tail.
#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: VecDeque<T>,
    cursor: usize,
    max_steps: Option<usize>,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: VecDeque::from([initial]),
            cursor: 0,
            max_steps: None,
        }
    }

    /// Keeps at most `max_steps` undo steps; the oldest snapshots go first.
    pub fn with_limit(initial: T, max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Self::new(initial)
        }
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Records `snapshot` as the new head. Returns `false` when it equals the
    /// current snapshot and nothing was recorded.
    pub fn push(&mut self, snapshot: T) -> bool {
        if *self.current() == snapshot {
            return false;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(snapshot);
        self.cursor += 1;

        if let Some(max_steps) = self.max_steps {
            while self.snapshots.len() > max_steps + 1 {
                self.snapshots.pop_front();
                self.cursor -= 1;
            }
        }
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_snapshots_are_coalesced() {
        let mut history = History::new(vec![1]);
        assert!(!history.push(vec![1]));
        assert!(history.push(vec![1, 2]));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn undo_and_redo_walk_the_log() {
        let mut history = History::new("a");
        history.push("b");
        history.push("c");
        assert_eq!(history.undo(), Some(&"b"));
        assert_eq!(history.undo(), Some(&"a"));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(&"b"));
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn push_after_undo_drops_redo_tail() {
        let mut history = History::new(0);
        history.push(1);
        history.push(2);
        history.undo();
        history.push(3);
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(&1));
    }

    #[test]
    fn limit_drops_oldest_steps() {
        let mut history = History::with_limit(0, 2);
        for n in 1..=5 {
            history.push(n);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(*history.current(), 5);
        history.undo();
        history.undo();
        assert!(!history.can_undo());
        assert_eq!(*history.current(), 3);
    }
}
