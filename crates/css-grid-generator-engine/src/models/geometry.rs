use serde::{Deserialize, Serialize};

pub const DEFAULT_COLUMNS: i32 = 5;
pub const DEFAULT_ROWS: i32 = 5;
pub const DEFAULT_GAP: i32 = 8;

/// A 1-based cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: u32,
    pub col: u32,
}

impl CellPosition {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A contiguous block of cells with inclusive 1-based bounds.
///
/// Every constructor orders the bounds, so `start_row <= end_row` and
/// `start_col <= end_col` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    start_row: u32,
    end_row: u32,
    start_col: u32,
    end_col: u32,
}

impl Rectangle {
    /// Create a rectangle from two row bounds and two column bounds, in any order
    pub fn new(row_a: u32, row_b: u32, col_a: u32, col_b: u32) -> Self {
        Self {
            start_row: row_a.min(row_b),
            end_row: row_a.max(row_b),
            start_col: col_a.min(col_b),
            end_col: col_a.max(col_b),
        }
    }

    /// The 1×1 rectangle covering a single cell
    pub fn cell(position: CellPosition) -> Self {
        Self::spanning(position, position)
    }

    /// The bounding rectangle of two cells. Axes are ordered independently,
    /// so the corners may be given in any order.
    pub fn spanning(a: CellPosition, b: CellPosition) -> Self {
        Self::new(a.row, b.row, a.col, b.col)
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    pub fn start_col(&self) -> u32 {
        self.start_col
    }

    pub fn end_col(&self) -> u32 {
        self.end_col
    }

    /// Whether the cell lies inside this rectangle (bounds inclusive)
    pub fn contains(&self, position: CellPosition) -> bool {
        (self.start_row..=self.end_row).contains(&position.row)
            && (self.start_col..=self.end_col).contains(&position.col)
    }

    /// Grid lines bounding the columns: `(start, end)` with an exclusive end line
    pub fn column_lines(&self) -> (u32, u32) {
        (self.start_col, self.end_col + 1)
    }

    /// Grid lines bounding the rows: `(start, end)` with an exclusive end line
    pub fn row_lines(&self) -> (u32, u32) {
        (self.start_row, self.end_row + 1)
    }

    pub fn width(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    pub fn height(&self) -> u32 {
        self.end_row - self.start_row + 1
    }
}

/// Grid size as entered by the user.
///
/// Values are not validated: zero or negative sizes give an empty editor
/// and are written into the generated CSS as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridDimensions {
    pub columns: i32,
    pub rows: i32,
    /// Gap between tracks, in pixels
    pub gap: i32,
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            gap: DEFAULT_GAP,
        }
    }
}

impl GridDimensions {
    pub fn new(columns: i32, rows: i32, gap: i32) -> Self {
        Self { columns, rows, gap }
    }

    /// Number of cells in the editor; zero when either dimension is not positive
    pub fn cell_count(&self) -> usize {
        Self::positive(self.columns) * Self::positive(self.rows)
    }

    /// Map a row-major flat index to its cell, or `None` outside the grid
    pub fn cell_position(&self, index: usize) -> Option<CellPosition> {
        if index >= self.cell_count() {
            return None;
        }
        let columns = Self::positive(self.columns);
        Some(CellPosition::new(
            (index / columns + 1) as u32,
            (index % columns + 1) as u32,
        ))
    }

    /// All cells in row-major order, paired with their flat index
    pub fn cells(&self) -> impl Iterator<Item = (usize, CellPosition)> + '_ {
        (0..self.cell_count()).filter_map(move |index| {
            self.cell_position(index)
                .map(|position| (index, position))
        })
    }

    fn positive(value: i32) -> usize {
        value.max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_compact_debug_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, 1)]
    #[case(4, 1, 5)]
    #[case(5, 2, 1)]
    #[case(12, 3, 3)]
    #[case(24, 5, 5)]
    fn test_cell_position_is_row_major(#[case] index: usize, #[case] row: u32, #[case] col: u32) {
        let dims = GridDimensions::new(5, 5, 8);
        assert_eq!(dims.cell_position(index), Some(CellPosition::new(row, col)));
    }

    #[test]
    fn test_cell_position_outside_grid() {
        let dims = GridDimensions::new(3, 2, 0);
        assert_eq!(dims.cell_count(), 6);
        assert_eq!(dims.cell_position(6), None);
    }

    #[rstest]
    #[case(0, 5)]
    #[case(5, 0)]
    #[case(-2, 4)]
    #[case(4, -1)]
    fn test_degenerate_dimensions_have_no_cells(#[case] columns: i32, #[case] rows: i32) {
        let dims = GridDimensions::new(columns, rows, 8);
        assert_eq!(dims.cell_count(), 0);
        assert_eq!(dims.cell_position(0), None);
        assert_eq!(dims.cells().count(), 0);
    }

    #[test]
    fn test_cells_enumerates_every_index() {
        let dims = GridDimensions::new(3, 2, 0);
        let cells: Vec<_> = dims.cells().collect();

        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (0, CellPosition::new(1, 1)));
        assert_eq!(cells[3], (3, CellPosition::new(2, 1)));
        assert_eq!(cells[5], (5, CellPosition::new(2, 3)));
    }

    #[test]
    fn test_rectangle_orders_bounds() {
        let rect = Rectangle::new(4, 2, 3, 1);
        assert_compact_debug_snapshot!(rect, @"Rectangle { start_row: 2, end_row: 4, start_col: 1, end_col: 3 }");
    }

    #[test]
    fn test_spanning_ignores_corner_order() {
        let top_left = CellPosition::new(1, 2);
        let bottom_right = CellPosition::new(3, 4);
        let top_right = CellPosition::new(1, 4);
        let bottom_left = CellPosition::new(3, 2);

        let expected = Rectangle::spanning(top_left, bottom_right);
        assert_eq!(Rectangle::spanning(bottom_right, top_left), expected);
        assert_eq!(Rectangle::spanning(top_right, bottom_left), expected);
        assert_eq!(Rectangle::spanning(bottom_left, top_right), expected);
        assert_eq!((expected.width(), expected.height()), (3, 3));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rectangle::new(2, 3, 2, 4);

        assert!(rect.contains(CellPosition::new(2, 2)));
        assert!(rect.contains(CellPosition::new(3, 4)));
        assert!(!rect.contains(CellPosition::new(1, 2)));
        assert!(!rect.contains(CellPosition::new(3, 5)));
    }

    #[test]
    fn test_grid_lines_use_exclusive_end() {
        let rect = Rectangle::new(1, 2, 1, 3);
        assert_eq!(rect.column_lines(), (1, 4));
        assert_eq!(rect.row_lines(), (1, 3));
    }

    #[test]
    fn test_single_cell_rectangle() {
        let rect = Rectangle::cell(CellPosition::new(3, 2));
        assert_eq!(rect, Rectangle::new(3, 3, 2, 2));
        assert_eq!((rect.width(), rect.height()), (1, 1));
    }
}
