//! Rectangular region selection over cached cell bounding boxes.
//!
//! Geometry is screen-space: cell boxes are computed once at layout
//! time and reused for every hit test, so they go stale if the layout
//! changes without a rebuild. Two coordinate frames are tracked during
//! a gesture: canvas-local (for drawing the feedback rectangle) and
//! window-global (for hit-testing the cached boxes).

use super::CellularGrid;

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen space.
///
/// Not required to be normalized; a drag that moves up-left produces
/// right < left until [`normalized`](Rect::normalized) is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Swap inverted edges so left <= right and top <= bottom.
    pub fn normalized(&self) -> Rect {
        Rect {
            left: self.left.min(self.right),
            right: self.left.max(self.right),
            top: self.top.min(self.bottom),
            bottom: self.top.max(self.bottom),
        }
    }

    /// Strict interior containment; points on the border do not count.
    pub fn contains(&self, point: Point) -> bool {
        self.left < point.x && point.x < self.right && self.top < point.y && point.y < self.bottom
    }

    /// Standard interval-overlap test on both axes.
    ///
    /// Rectangles that merely share an edge do not intersect, which is
    /// what keeps a drag over one cell's exact box from picking up the
    /// cells that abut it.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// A cell paired with its cached screen-space bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Selectable {
    pub row: usize,
    pub col: usize,
    pub bounds: Rect,
}

/// Screen placement of the grid, used to compute selectable boxes.
#[derive(Debug, Clone, Copy)]
pub struct CellLayout {
    /// Window-global position of the grid's top-left corner.
    pub origin: Point,
    /// Cell edge length in pixels.
    pub cell_size: u32,
}

impl CellLayout {
    /// Compute the cached bounding box of every cell, row-major.
    pub fn selectables(&self, rows: usize, cols: usize) -> Vec<Selectable> {
        let size = self.cell_size as i32;
        let mut boxes = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let left = self.origin.x + col as i32 * size;
                let top = self.origin.y + row as i32 * size;
                boxes.push(Selectable {
                    row,
                    col,
                    bounds: Rect::new(left, top, left + size, top + size),
                });
            }
        }
        boxes
    }
}

/// What a completed gesture did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Released outside every cell, or no gesture was in progress.
    Nothing,
    /// Click released inside one cell; its state was toggled.
    Toggled { row: usize, col: usize },
    /// Drag released; these cells are now the selection.
    Selected { cells: Vec<(usize, usize)> },
}

/// Which sides of the selection's bounding box a cell sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderSides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

/// A border-marker request for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub row: usize,
    pub col: usize,
    pub sides: BorderSides,
}

/// Press/move/release gesture state machine for region selection.
pub struct RegionSelector {
    selectables: Vec<Selectable>,
    selecting: bool,
    dragging: bool,
    canvas: Rect,
    window: Rect,
}

impl RegionSelector {
    /// Build from precomputed selectable boxes.
    pub fn new(selectables: Vec<Selectable>) -> Self {
        Self {
            selectables,
            selecting: false,
            dragging: false,
            canvas: Rect::new(0, 0, 0, 0),
            window: Rect::new(0, 0, 0, 0),
        }
    }

    /// Build from a layout covering a rows x cols grid.
    pub fn from_layout(layout: &CellLayout, rows: usize, cols: usize) -> Self {
        Self::new(layout.selectables(rows, cols))
    }

    /// Whether a gesture is in progress.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Pointer pressed: start a gesture.
    pub fn begin(&mut self, canvas: Point, window: Point) {
        self.selecting = true;
        self.dragging = false;
        self.canvas = Rect::new(canvas.x, canvas.y, canvas.x, canvas.y);
        self.window = Rect::new(window.x, window.y, window.x, window.y);
    }

    /// Pointer moved: extend the gesture.
    ///
    /// Returns the canvas-space feedback rectangle to draw, normalized;
    /// `None` when no gesture is in progress.
    pub fn update(&mut self, canvas: Point, window: Point) -> Option<Rect> {
        if !self.selecting {
            return None;
        }
        if window.x != self.window.left || window.y != self.window.top {
            self.dragging = true;
        }
        self.canvas.right = canvas.x;
        self.canvas.bottom = canvas.y;
        self.window.right = window.x;
        self.window.bottom = window.y;
        Some(self.canvas.normalized())
    }

    /// Pointer released: resolve the gesture against the grid.
    ///
    /// A click (no movement since press) toggles the single cell whose
    /// box strictly contains the press point. A drag replaces the
    /// grid's selection with every cell whose box overlaps the
    /// normalized query rectangle.
    pub fn finish(&mut self, grid: &mut CellularGrid) -> SelectionOutcome {
        if !self.selecting {
            return SelectionOutcome::Nothing;
        }
        self.selecting = false;

        if !self.dragging {
            let point = Point::new(self.window.left, self.window.top);
            let hit = self
                .selectables
                .iter()
                .find(|selectable| selectable.bounds.contains(point));
            return match hit {
                Some(selectable) => {
                    grid.toggle(selectable.row, selectable.col);
                    SelectionOutcome::Toggled {
                        row: selectable.row,
                        col: selectable.col,
                    }
                }
                None => SelectionOutcome::Nothing,
            };
        }

        let query = self.window.normalized();
        grid.clear_selection();

        let mut cells = Vec::new();
        for selectable in &self.selectables {
            if selectable.bounds.intersects(&query) {
                grid.set_selected(selectable.row, selectable.col, true);
                cells.push((selectable.row, selectable.col));
            }
        }

        if cells.is_empty() {
            SelectionOutcome::Nothing
        } else {
            SelectionOutcome::Selected { cells }
        }
    }

    /// Abort the gesture without touching the grid (escape key).
    pub fn cancel(&mut self) {
        self.selecting = false;
        self.dragging = false;
    }

    /// Border markers for the current selection.
    ///
    /// Cells on the extreme edge of the selection's bounding box get
    /// the marker for that side: the leftmost column a left marker, and
    /// so on. Membership is read back from the grid's selected flags.
    pub fn border_highlights(&self, grid: &CellularGrid) -> Vec<Highlight> {
        let selected: Vec<&Selectable> = self
            .selectables
            .iter()
            .filter(|s| grid.cell(s.row, s.col).is_selected())
            .collect();

        let Some(first) = selected.first() else {
            return Vec::new();
        };

        let mut left = first.bounds.left;
        let mut right = first.bounds.right;
        let mut top = first.bounds.top;
        let mut bottom = first.bounds.bottom;
        for selectable in &selected {
            left = left.min(selectable.bounds.left);
            right = right.max(selectable.bounds.right);
            top = top.min(selectable.bounds.top);
            bottom = bottom.max(selectable.bounds.bottom);
        }

        selected
            .iter()
            .map(|selectable| Highlight {
                row: selectable.row,
                col: selectable.col,
                sides: BorderSides {
                    left: selectable.bounds.left == left,
                    right: selectable.bounds.right == right,
                    top: selectable.bounds.top == top,
                    bottom: selectable.bounds.bottom == bottom,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CellLayout {
        CellLayout {
            origin: Point::new(0, 0),
            cell_size: 25,
        }
    }

    fn selector(rows: usize, cols: usize) -> RegionSelector {
        RegionSelector::from_layout(&layout(), rows, cols)
    }

    #[test]
    fn test_normalized_swaps_inverted_edges() {
        let rect = Rect::new(50, 80, 10, 20).normalized();
        assert_eq!(rect, Rect::new(10, 20, 50, 80));
    }

    #[test]
    fn test_contains_is_strict() {
        let rect = Rect::new(0, 0, 25, 25);
        assert!(rect.contains(Point::new(12, 12)));
        assert!(!rect.contains(Point::new(0, 12)));
        assert!(!rect.contains(Point::new(12, 25)));
    }

    #[test]
    fn test_shared_edge_does_not_intersect() {
        let a = Rect::new(0, 0, 25, 25);
        let b = Rect::new(25, 0, 50, 25);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(24, 0, 50, 25)));
    }

    #[test]
    fn test_click_toggles_hit_cell() {
        let mut grid = CellularGrid::new(4, 4);
        let mut selector = selector(4, 4);

        // Press and release inside cell (1, 2) without moving.
        selector.begin(Point::new(60, 30), Point::new(60, 30));
        let outcome = selector.finish(&mut grid);

        assert_eq!(outcome, SelectionOutcome::Toggled { row: 1, col: 2 });
        assert!(grid.is_alive(1, 2));
    }

    #[test]
    fn test_click_outside_grid_does_nothing() {
        let mut grid = CellularGrid::new(3, 3);
        let mut selector = selector(3, 3);

        selector.begin(Point::new(200, 200), Point::new(200, 200));
        assert_eq!(selector.finish(&mut grid), SelectionOutcome::Nothing);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_drag_over_exact_cell_box_selects_only_that_cell() {
        let mut grid = CellularGrid::new(4, 4);
        let mut selector = selector(4, 4);

        // Cell (1, 1) occupies (25, 25)..(50, 50).
        selector.begin(Point::new(25, 25), Point::new(25, 25));
        selector.update(Point::new(50, 50), Point::new(50, 50));
        let outcome = selector.finish(&mut grid);

        assert_eq!(
            outcome,
            SelectionOutcome::Selected {
                cells: vec![(1, 1)]
            }
        );
        assert_eq!(grid.selected_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_inverted_drag_selects_same_region() {
        let mut grid = CellularGrid::new(4, 4);
        let mut selector = selector(4, 4);

        // Up-left drag across cells (0..2, 0..2).
        selector.begin(Point::new(48, 48), Point::new(48, 48));
        selector.update(Point::new(2, 2), Point::new(2, 2));
        let outcome = selector.finish(&mut grid);

        assert_eq!(
            outcome,
            SelectionOutcome::Selected {
                cells: vec![(0, 0), (0, 1), (1, 0), (1, 1)]
            }
        );
    }

    #[test]
    fn test_partial_overlap_selects_border_cells() {
        let mut grid = CellularGrid::new(4, 4);
        let mut selector = selector(4, 4);

        // Rectangle straddling the right edge of column 1.
        selector.begin(Point::new(30, 30), Point::new(30, 30));
        selector.update(Point::new(55, 45), Point::new(55, 45));
        let outcome = selector.finish(&mut grid);

        assert_eq!(
            outcome,
            SelectionOutcome::Selected {
                cells: vec![(1, 1), (1, 2)]
            }
        );
    }

    #[test]
    fn test_new_drag_replaces_previous_selection() {
        let mut grid = CellularGrid::new(4, 4);
        let mut selector = selector(4, 4);

        selector.begin(Point::new(2, 2), Point::new(2, 2));
        selector.update(Point::new(20, 20), Point::new(20, 20));
        selector.finish(&mut grid);
        assert_eq!(grid.selected_cells(), vec![(0, 0)]);

        selector.begin(Point::new(80, 80), Point::new(80, 80));
        selector.update(Point::new(95, 95), Point::new(95, 95));
        selector.finish(&mut grid);
        assert_eq!(grid.selected_cells(), vec![(3, 3)]);
    }

    #[test]
    fn test_cancel_leaves_grid_untouched() {
        let mut grid = CellularGrid::new(4, 4);
        let mut selector = selector(4, 4);

        selector.begin(Point::new(10, 10), Point::new(10, 10));
        selector.update(Point::new(90, 90), Point::new(90, 90));
        selector.cancel();

        assert_eq!(selector.finish(&mut grid), SelectionOutcome::Nothing);
        assert!(grid.selected_cells().is_empty());
    }

    #[test]
    fn test_border_highlights_mark_extremes() {
        let mut grid = CellularGrid::new(4, 4);
        let mut selector = selector(4, 4);

        // Select the 2x2 block of cells (1..3, 1..3).
        selector.begin(Point::new(30, 30), Point::new(30, 30));
        selector.update(Point::new(70, 70), Point::new(70, 70));
        selector.finish(&mut grid);

        let highlights = selector.border_highlights(&grid);
        assert_eq!(highlights.len(), 4);

        let sides_of = |row: usize, col: usize| {
            highlights
                .iter()
                .find(|h| h.row == row && h.col == col)
                .map(|h| h.sides)
                .unwrap()
        };
        assert_eq!(
            sides_of(1, 1),
            BorderSides {
                left: true,
                right: false,
                top: true,
                bottom: false
            }
        );
        assert_eq!(
            sides_of(2, 2),
            BorderSides {
                left: false,
                right: true,
                top: false,
                bottom: true
            }
        );
    }

    #[test]
    fn test_single_cell_selection_marks_all_sides() {
        let mut grid = CellularGrid::new(3, 3);
        let mut selector = selector(3, 3);

        selector.begin(Point::new(30, 30), Point::new(30, 30));
        selector.update(Point::new(40, 40), Point::new(40, 40));
        selector.finish(&mut grid);

        let highlights = selector.border_highlights(&grid);
        assert_eq!(highlights.len(), 1);
        assert_eq!(
            highlights[0].sides,
            BorderSides {
                left: true,
                right: true,
                top: true,
                bottom: true
            }
        );
    }
}
