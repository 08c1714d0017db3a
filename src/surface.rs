//! Presentation surface
//!
//! The collapser never touches the page directly. Pending changes are
//! flushed through a [`NavSurface`], which the browser binding implements on
//! top of the DOM.

use crate::item::Visibility;

/// Receives presentation changes for navigation items, by index
pub trait NavSurface {
    /// Add or remove the selection marker of a section header
    fn set_selected(&mut self, index: usize, selected: bool);

    /// Show or hide a leaf item
    fn set_visibility(&mut self, index: usize, visibility: Visibility);
}

/// One write issued to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceWrite {
    Selected(usize, bool),
    Visibility(usize, Visibility),
}

/// Surface that keeps every write, in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub writes: Vec<SurfaceWrite>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the writes recorded so far
    pub fn take(&mut self) -> Vec<SurfaceWrite> {
        std::mem::take(&mut self.writes)
    }
}

impl NavSurface for RecordingSurface {
    fn set_selected(&mut self, index: usize, selected: bool) {
        self.writes.push(SurfaceWrite::Selected(index, selected));
    }

    fn set_visibility(&mut self, index: usize, visibility: Visibility) {
        self.writes.push(SurfaceWrite::Visibility(index, visibility));
    }
}
