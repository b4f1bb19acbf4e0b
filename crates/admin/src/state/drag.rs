//! Drag reorder controller - list-agnostic drag state machine
//!
//! Tracks the dragged row's origin index, the live pointer position (the
//! floating preview is a pure function of this state), and hands the final
//! move back on drop. The native drag ghost is suppressed by the view; the
//! preview follows a document-level pointer listener so it stays with the
//! cursor outside the source row.

use rosterly_domain::Member;

/// Pointer position in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Some browsers emit a final spurious (0,0) drag event right before
    /// dragend; it must not move the preview back to the origin.
    pub fn is_degenerate(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// A settled drop: move the element at `from` to land at `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderMove {
    pub from: usize,
    pub to: usize,
}

/// Drag gesture state; exists only while a drag is active
#[derive(Debug, Clone, Default)]
pub struct DragController {
    dragged_index: Option<usize>,
    pointer: Option<PointerPosition>,
    preview: Option<Member>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer
    }

    /// The member rendered as the floating preview, only while dragging.
    pub fn preview(&self) -> Option<&Member> {
        self.preview.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.dragged_index.is_some()
    }

    /// Begin a drag from `index`.
    pub fn drag_start(&mut self, index: usize, member: Member, pointer: PointerPosition) {
        self.dragged_index = Some(index);
        self.preview = Some(member);
        self.pointer = Some(pointer);
    }

    /// Track pointer movement, ignoring the degenerate terminal (0,0).
    pub fn drag_move(&mut self, pointer: PointerPosition) {
        if !self.is_active() || pointer.is_degenerate() {
            return;
        }
        self.pointer = Some(pointer);
    }

    /// Settle a drop on `target`. Same-index drops and drops with no active
    /// drag yield `None` (no list mutation, no flicker).
    pub fn drop_on(&mut self, target: usize) -> Option<ReorderMove> {
        let from = self.dragged_index?;
        if from == target {
            return None;
        }
        Some(ReorderMove { from, to: target })
    }

    /// Fires on drop and on cancel (e.g. Escape): always clears everything,
    /// whether or not a drop occurred. No stuck dragged index.
    pub fn drag_end(&mut self) {
        self.dragged_index = None;
        self.pointer = None;
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterly_domain::{Category, CategoryId, MemberId, MemberStatus};

    fn member(id: i64) -> Member {
        Member {
            id: MemberId::from_i64(id),
            full_name: "Ada Smith".to_string(),
            description: String::new(),
            photo: None,
            status: MemberStatus::Draft,
            category: Category::new(CategoryId::from_i64(1), "Core Team"),
        }
    }

    #[test]
    fn test_drag_start_captures_index_preview_and_pointer() {
        let mut drag = DragController::new();
        drag.drag_start(1, member(2), PointerPosition::new(10.0, 20.0));

        assert_eq!(drag.dragged_index(), Some(1));
        assert_eq!(drag.pointer(), Some(PointerPosition::new(10.0, 20.0)));
        assert!(drag.preview().is_some());
    }

    #[test]
    fn test_spurious_zero_zero_move_keeps_last_position() {
        let mut drag = DragController::new();
        drag.drag_start(1, member(2), PointerPosition::new(10.0, 20.0));
        drag.drag_move(PointerPosition::new(42.0, 84.0));

        drag.drag_move(PointerPosition::new(0.0, 0.0));
        assert_eq!(drag.pointer(), Some(PointerPosition::new(42.0, 84.0)));
    }

    #[test]
    fn test_move_without_active_drag_is_ignored() {
        let mut drag = DragController::new();
        drag.drag_move(PointerPosition::new(5.0, 5.0));
        assert_eq!(drag.pointer(), None);
    }

    #[test]
    fn test_pointer_stream_feeds_only_the_active_drag() {
        // The page pipes a document-level dragover stream straight into the
        // controller; positions outside an active gesture must not stick.
        let mut drag = DragController::new();
        drag.drag_move(PointerPosition::new(7.0, 7.0));
        assert_eq!(drag.pointer(), None);

        drag.drag_start(0, member(1), PointerPosition::new(1.0, 1.0));
        drag.drag_move(PointerPosition::new(30.0, 40.0));
        assert_eq!(drag.pointer(), Some(PointerPosition::new(30.0, 40.0)));

        drag.drag_end();
        drag.drag_move(PointerPosition::new(50.0, 60.0));
        assert_eq!(drag.pointer(), None);
    }

    #[test]
    fn test_drop_yields_move_for_distinct_indices() {
        let mut drag = DragController::new();
        drag.drag_start(0, member(1), PointerPosition::default());

        assert_eq!(drag.drop_on(2), Some(ReorderMove { from: 0, to: 2 }));
    }

    #[test]
    fn test_drop_on_same_index_is_noop() {
        let mut drag = DragController::new();
        drag.drag_start(2, member(1), PointerPosition::default());

        assert_eq!(drag.drop_on(2), None);
    }

    #[test]
    fn test_drop_without_active_drag_is_noop() {
        let mut drag = DragController::new();
        assert_eq!(drag.drop_on(0), None);
    }

    #[test]
    fn test_drag_end_always_clears_state() {
        let mut drag = DragController::new();
        drag.drag_start(1, member(2), PointerPosition::new(3.0, 4.0));

        // Cancelled drag (no drop) still resets everything.
        drag.drag_end();
        assert_eq!(drag.dragged_index(), None);
        assert_eq!(drag.pointer(), None);
        assert!(drag.preview().is_none());
        assert!(!drag.is_active());
    }
}
