// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::ops::Range;

/// Cursor plus scroll window over a list rendered `page` rows tall.
///
/// Invariant after every operation: `viewport_top <= cursor` and
/// `cursor < viewport_top + page` whenever the list is non-empty. Scrolling
/// moves the window by exactly the deficit, never more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    cursor: usize,
    viewport_top: usize,
    page: usize,
}

impl ListCursor {
    pub fn new(page: usize) -> Self {
        Self {
            cursor: 0,
            viewport_top: 0,
            page: page.max(1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport_top(&self) -> usize {
        self.viewport_top
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.viewport_top = 0;
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor < self.viewport_top {
                self.viewport_top = self.cursor;
            }
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
            if self.cursor >= self.viewport_top + self.page {
                self.viewport_top = self.cursor + 1 - self.page;
            }
        }
    }

    /// Re-establishes the invariant after the underlying list shrank, e.g.
    /// when a search filter narrowed the items.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        if self.cursor >= len {
            self.cursor = len - 1;
        }
        if self.cursor < self.viewport_top {
            self.viewport_top = self.cursor;
        }
        if self.cursor >= self.viewport_top + self.page {
            self.viewport_top = self.cursor + 1 - self.page;
        }
    }

    /// Index range of the rows currently inside the viewport.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let top = self.viewport_top.min(len);
        let bottom = (self.viewport_top + self.page).min(len);
        top..bottom
    }
}

#[cfg(test)]
mod tests {
    use super::ListCursor;

    fn assert_invariant(cursor: &ListCursor, len: usize) {
        if len == 0 {
            return;
        }
        assert!(cursor.cursor() < len);
        assert!(cursor.viewport_top() <= cursor.cursor());
        assert!(cursor.cursor() < cursor.viewport_top() + cursor.page());
    }

    #[test]
    fn cursor_stays_in_bounds_at_edges() {
        let mut cursor = ListCursor::new(3);
        cursor.move_up();
        assert_eq!(cursor.cursor(), 0);

        for _ in 0..10 {
            cursor.move_down(5);
        }
        assert_eq!(cursor.cursor(), 4);
        assert_invariant(&cursor, 5);
    }

    #[test]
    fn scrolling_moves_window_by_exact_deficit() {
        let mut cursor = ListCursor::new(3);
        for _ in 0..3 {
            cursor.move_down(10);
        }
        // Cursor at 3, one past the bottom of a 3-row window starting at 0.
        assert_eq!(cursor.cursor(), 3);
        assert_eq!(cursor.viewport_top(), 1);

        for _ in 0..3 {
            cursor.move_up();
        }
        assert_eq!(cursor.cursor(), 0);
        assert_eq!(cursor.viewport_top(), 0);
    }

    #[test]
    fn invariant_holds_under_arbitrary_move_sequences() {
        let len = 23;
        let mut cursor = ListCursor::new(7);
        let script = [
            true, true, true, true, true, true, true, true, true, false, false, true, true, false,
            true, true, true, true, true, true, true, true, true, true, true, false, false, false,
            false, false, false, false, false, false, false, false, false, false,
        ];
        for down in script {
            if down {
                cursor.move_down(len);
            } else {
                cursor.move_up();
            }
            assert_invariant(&cursor, len);
        }
    }

    #[test]
    fn clamp_recovers_after_list_shrinks() {
        let mut cursor = ListCursor::new(4);
        for _ in 0..9 {
            cursor.move_down(10);
        }
        assert_eq!(cursor.cursor(), 9);

        cursor.clamp(3);
        assert_eq!(cursor.cursor(), 2);
        assert_invariant(&cursor, 3);

        cursor.clamp(0);
        assert_eq!(cursor.cursor(), 0);
        assert_eq!(cursor.viewport_top(), 0);
    }

    #[test]
    fn visible_range_is_bounded_by_list_length() {
        let mut cursor = ListCursor::new(5);
        assert_eq!(cursor.visible_range(2), 0..2);

        for _ in 0..7 {
            cursor.move_down(8);
        }
        assert_eq!(cursor.visible_range(8), 3..8);
    }

    #[test]
    fn empty_list_never_moves() {
        let mut cursor = ListCursor::new(3);
        cursor.move_down(0);
        cursor.move_up();
        assert_eq!(cursor.cursor(), 0);
        assert_eq!(cursor.visible_range(0), 0..0);
    }
}
