use log::warn;

use crate::draw::SurfaceError;

use super::Sketchpad;

impl Sketchpad {
    /// Undoes the most recent stroke.
    ///
    /// Moves the top history snapshot onto the redone pile, clears the
    /// canvas, and repaints it from the snapshot that remains on top. When
    /// the popped snapshot was the last one the canvas stays cleared. A
    /// no-op when the history is empty.
    ///
    /// The restore decodes the PNG snapshot synchronously, so the canvas is
    /// consistent before the next event is processed.
    pub fn undo(&mut self) {
        if !self.history.undo() {
            return;
        }

        self.surface.clear();
        if let Some(snapshot) = self.history.latest()
            && let Err(err) = self.surface.restore_png(snapshot)
        {
            warn!("Canvas left cleared, snapshot restore failed: {err}");
        }
        self.needs_redraw = true;
    }

    /// Clears the canvas without touching the undo history.
    ///
    /// Snapshots recorded before the clear stay undoable; an undo after a
    /// clear brings their content back.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.needs_redraw = true;
    }

    /// Encodes the current canvas content as a PNG image.
    ///
    /// Export reads the canvas as-is; the undo history is not consulted.
    pub fn to_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.encode_png()
    }
}
