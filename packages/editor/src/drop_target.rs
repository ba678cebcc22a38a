//! Canvas drop target for blocks dragged from the palette.

use folio_common::BlockKind;

/// Drag state of the canvas. Purely visual; reset on drop or leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropTarget {
    accepting: bool,
}

impl DropTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_over(&mut self) {
        self.accepting = true;
    }

    pub fn drag_leave(&mut self) {
        self.accepting = false;
    }

    /// Finish a drag. Returns the block type to add, if the payload names one.
    pub fn drop(&mut self, payload: &str) -> Option<BlockKind> {
        self.accepting = false;

        let tag = payload.trim();
        if tag.is_empty() {
            return None;
        }
        Some(BlockKind::parse(tag))
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_indicator() {
        let mut target = DropTarget::new();
        assert!(!target.is_accepting());

        target.drag_over();
        assert!(target.is_accepting());
        target.drag_leave();
        assert!(!target.is_accepting());

        target.drag_over();
        target.drop("text");
        assert!(!target.is_accepting());
    }

    #[test]
    fn test_drop_payloads() {
        let mut target = DropTarget::new();

        assert_eq!(target.drop("gallery"), Some(BlockKind::Gallery));
        assert_eq!(
            target.drop("timeline"),
            Some(BlockKind::Other("timeline".to_string()))
        );
        assert_eq!(target.drop(""), None);
        assert_eq!(target.drop("   "), None);
    }
}
