//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves a row-major grid cursor based on arrow keys.
///
/// Movement stops at the edges. Other keys leave the cursor unchanged.
pub fn move_cursor(cursor: usize, key: KeyCode, rows: usize, cols: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    let cursor = cursor.min(rows * cols - 1);
    let (row, col) = (cursor / cols, cursor % cols);

    let (row, col) = match key {
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col + 1 < cols => (row, col + 1),
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row + 1 < rows => (row + 1, col),
        _ => (row, col),
    };
    row * cols + col
}

/// Moves a list focus forward or back, wrapping at both ends.
pub fn cycle_focus(focus: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        // 3 x 4 board
        assert_eq!(move_cursor(5, KeyCode::Right, 3, 4), 6);
        assert_eq!(move_cursor(5, KeyCode::Left, 3, 4), 4);
        assert_eq!(move_cursor(5, KeyCode::Up, 3, 4), 1);
        assert_eq!(move_cursor(5, KeyCode::Down, 3, 4), 9);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Left, 3, 4), 0);
        assert_eq!(move_cursor(0, KeyCode::Up, 3, 4), 0);
        assert_eq!(move_cursor(3, KeyCode::Right, 3, 4), 3);
        assert_eq!(move_cursor(11, KeyCode::Down, 3, 4), 11);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        assert_eq!(move_cursor(7, KeyCode::Enter, 4, 6), 7);
    }

    #[test]
    fn test_out_of_range_cursor_is_clamped() {
        assert_eq!(move_cursor(30, KeyCode::Enter, 3, 4), 11);
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(cycle_focus(8, 9, true), 0);
        assert_eq!(cycle_focus(0, 9, false), 8);
        assert_eq!(cycle_focus(3, 9, true), 4);
    }
}
