//! Snapshot history backing the undo action.
//!
//! The pad records a full PNG snapshot of the canvas at the start of every
//! stroke. Undo walks that sequence backwards: the most recent snapshot moves
//! onto the redone pile and the canvas is restored from whatever snapshot
//! remains on top. The redone pile only ever receives entries; there is no
//! redo action that drains it.

use log::debug;

/// Ordered snapshot storage for the undo sequence.
///
/// Snapshots are PNG-encoded canvas states, most recent last. Starting a new
/// stroke never discards redone entries, so the redone pile grows for the
/// lifetime of the pad.
#[derive(Default)]
pub struct History {
    /// Canvas states captured at each stroke start, oldest first
    strokes: Vec<Vec<u8>>,
    /// Snapshots displaced by undo, in the order they were undone
    redone: Vec<Vec<u8>>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the canvas state captured at the start of a stroke.
    pub fn push(&mut self, snapshot: Vec<u8>) {
        debug!(
            "Recording canvas snapshot ({} bytes, {} kept)",
            snapshot.len(),
            self.strokes.len() + 1
        );
        self.strokes.push(snapshot);
    }

    /// Moves the most recent snapshot onto the redone pile.
    ///
    /// Returns `true` if a snapshot was moved, `false` when there is nothing
    /// to undo. After a successful call, [`History::latest`] yields the state
    /// the canvas should be restored from.
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(snapshot) => {
                self.redone.push(snapshot);
                debug!("Undo: {} snapshots remain", self.strokes.len());
                true
            }
            None => {
                debug!("Undo requested with empty history");
                false
            }
        }
    }

    /// The snapshot currently on top of the undo sequence, if any.
    pub fn latest(&self) -> Option<&[u8]> {
        self.strokes.last().map(Vec::as_slice)
    }

    /// Number of snapshots available to undo.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True when no snapshots are recorded.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Number of snapshots displaced by undo so far.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn redone_len(&self) -> usize {
        self.redone.len()
    }
}
