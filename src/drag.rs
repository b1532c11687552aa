/// Receives the outcome of a drag gesture on a reorderable list
pub trait ReorderHandler {
    /// `destination` is `None` when the drag was released outside any row
    fn on_reorder_requested(&self, source: usize, destination: Option<usize>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderRequest {
    pub source: usize,
    pub destination: Option<usize>,
}

impl ReorderRequest {
    pub fn send_to(self, handler: &impl ReorderHandler) {
        handler.on_reorder_requested(self.source, self.destination);
    }
}

/// Tracks one HTML5 drag gesture over the rows of a list
///
/// Rows are identified by their current index. Browsers fire `dragend`
/// after `drop`, so a gesture produces a request either on drop or on
/// end, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    dragged: Option<usize>,
    over: Option<usize>,
}

impl DragState {
    pub fn start(&mut self, index: usize) {
        self.dragged = Some(index);
        self.over = None;
    }

    pub fn hover(&mut self, index: usize) {
        if self.dragged.is_some() {
            self.over = Some(index);
        }
    }

    pub fn leave(&mut self, index: usize) {
        if self.over == Some(index) {
            self.over = None;
        }
    }

    /// The row was dropped on the row at `index`
    pub fn drop_on(&mut self, index: usize) -> Option<ReorderRequest> {
        let source = self.dragged.take()?;
        self.over = None;
        Some(ReorderRequest {
            source,
            destination: Some(index),
        })
    }

    /// The gesture ended; only yields a request if no drop happened
    pub fn end(&mut self) -> Option<ReorderRequest> {
        let source = self.dragged.take()?;
        self.over = None;
        Some(ReorderRequest {
            source,
            destination: None,
        })
    }

    #[must_use]
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragged == Some(index)
    }

    #[must_use]
    pub fn is_over(&self, index: usize) -> bool {
        self.over == Some(index) && self.dragged != Some(index)
    }
}
