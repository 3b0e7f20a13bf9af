use crate::models::{CellPosition, Rectangle};

/// Drag-selection state machine for the grid editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        anchor: CellPosition,
        hover: Rectangle,
    },
}

impl DragGesture {
    /// Start a gesture at `position`. A gesture already in progress is
    /// restarted from the new anchor.
    pub fn pointer_down(&mut self, position: CellPosition) {
        *self = DragGesture::Dragging {
            anchor: position,
            hover: Rectangle::cell(position),
        };
    }

    /// Extend the hover area to the bounding box of the anchor and `position`
    pub fn pointer_enter(&mut self, position: CellPosition) {
        if let DragGesture::Dragging { anchor, hover } = self {
            *hover = Rectangle::spanning(*anchor, position);
        }
    }

    /// Finish the gesture, returning the selected rectangle if one was in progress
    pub fn pointer_up(&mut self) -> Option<Rectangle> {
        let finished = self.hover_area();
        *self = DragGesture::Idle;
        finished
    }

    pub fn hover_area(&self) -> Option<Rectangle> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Dragging { hover, .. } => Some(*hover),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }
}

/// How a cell is drawn in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Hovered,
    Locked,
}

/// Locked takes precedence over hovered.
pub fn cell_state(
    position: CellPosition,
    locked: &[Rectangle],
    hover: Option<Rectangle>,
) -> CellState {
    if locked.iter().any(|rect| rect.contains(position)) {
        CellState::Locked
    } else if hover.is_some_and(|rect| rect.contains(position)) {
        CellState::Hovered
    } else {
        CellState::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn drag(from: CellPosition, path: &[CellPosition]) -> Option<Rectangle> {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(from);
        for position in path {
            gesture.pointer_enter(*position);
        }
        gesture.pointer_up()
    }

    #[rstest]
    #[case::top_left_to_bottom_right((1, 1), (3, 4))]
    #[case::bottom_right_to_top_left((3, 4), (1, 1))]
    #[case::top_right_to_bottom_left((1, 4), (3, 1))]
    #[case::bottom_left_to_top_right((3, 1), (1, 4))]
    fn test_drag_direction_does_not_matter(#[case] from: (u32, u32), #[case] to: (u32, u32)) {
        let rect = drag(
            CellPosition::new(from.0, from.1),
            &[CellPosition::new(to.0, to.1)],
        );

        assert_eq!(rect, Some(Rectangle::new(1, 3, 1, 4)));
    }

    #[test]
    fn test_click_without_drag_selects_single_cell() {
        let rect = drag(CellPosition::new(2, 5), &[]);
        assert_eq!(rect, Some(Rectangle::new(2, 2, 5, 5)));
    }

    #[test]
    fn test_hover_follows_last_entered_cell() {
        // Wandering out and back in shrinks the selection again
        let rect = drag(
            CellPosition::new(2, 2),
            &[
                CellPosition::new(4, 4),
                CellPosition::new(5, 1),
                CellPosition::new(2, 3),
            ],
        );
        assert_eq!(rect, Some(Rectangle::new(2, 2, 2, 3)));
    }

    #[test]
    fn test_pointer_up_resets_to_idle() {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(CellPosition::new(1, 1));
        assert!(gesture.is_dragging());

        assert!(gesture.pointer_up().is_some());
        assert_eq!(gesture, DragGesture::Idle);
        assert_eq!(gesture.hover_area(), None);
        assert_eq!(gesture.pointer_up(), None);
    }

    #[test]
    fn test_enter_while_idle_is_ignored() {
        let mut gesture = DragGesture::default();
        gesture.pointer_enter(CellPosition::new(3, 3));
        assert_eq!(gesture, DragGesture::Idle);
    }

    #[test]
    fn test_pointer_down_restarts_gesture() {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(CellPosition::new(1, 1));
        gesture.pointer_enter(CellPosition::new(3, 3));
        gesture.pointer_down(CellPosition::new(5, 5));

        assert_eq!(gesture.hover_area(), Some(Rectangle::new(5, 5, 5, 5)));
    }

    #[test]
    fn test_locked_wins_over_hover() {
        let locked = [Rectangle::new(1, 2, 1, 2)];
        let hover = Some(Rectangle::new(2, 3, 2, 3));

        assert_eq!(
            cell_state(CellPosition::new(2, 2), &locked, hover),
            CellState::Locked
        );
        assert_eq!(
            cell_state(CellPosition::new(3, 3), &locked, hover),
            CellState::Hovered
        );
        assert_eq!(
            cell_state(CellPosition::new(4, 4), &locked, hover),
            CellState::Empty
        );
    }

    #[test]
    fn test_overlapping_locked_rectangles_are_allowed() {
        let locked = [Rectangle::new(1, 3, 1, 3), Rectangle::new(2, 2, 2, 2)];
        assert_eq!(
            cell_state(CellPosition::new(2, 2), &locked, None),
            CellState::Locked
        );
    }
}
