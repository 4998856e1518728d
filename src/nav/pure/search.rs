// Directional focus search over a logical (row, col) grid (pure functions)

use crate::nav::types::{NavDirection, NavError, NavigationItem};

/// Find an item by id. Duplicate ids resolve to the first in insertion order.
pub fn find_item<'a>(items: &'a [NavigationItem], id: &str) -> Option<&'a NavigationItem> {
    items.iter().find(|item| item.id == id)
}

/// Find the item occupying an exact coordinate (first match wins)
pub fn item_at(items: &[NavigationItem], row: i32, col: i32) -> Option<&NavigationItem> {
    items.iter().find(|item| item.row == row && item.col == col)
}

/// Adjacent coordinate in `direction`, clamped to the grid.
///
/// Rows clamp at 0 going up but are unbounded going down: the total row
/// count is not known here. Columns clamp to `[0, grid_cols - 1]`.
pub fn target_coordinate(row: i32, col: i32, direction: NavDirection, grid_cols: i32) -> (i32, i32) {
    match direction {
        NavDirection::Up => (row.saturating_sub(1).max(0), col),
        NavDirection::Down => (row.saturating_add(1), col),
        NavDirection::Left => (row, col.saturating_sub(1).max(0)),
        NavDirection::Right => (row, col.saturating_add(1).min(grid_cols.saturating_sub(1))),
    }
}

/// Closest item strictly beyond `from` along the movement axis.
///
/// Vertical moves only consider items in the same column, horizontal moves
/// only the same row. Ties resolve to the first in insertion order.
pub fn nearest_along_axis<'a>(
    items: &'a [NavigationItem],
    from: &NavigationItem,
    direction: NavDirection,
) -> Option<&'a NavigationItem> {
    items
        .iter()
        .filter_map(|item| {
            let delta = match direction {
                NavDirection::Up if item.col == from.col => i64::from(from.row) - i64::from(item.row),
                NavDirection::Down if item.col == from.col => i64::from(item.row) - i64::from(from.row),
                NavDirection::Left if item.row == from.row => i64::from(from.col) - i64::from(item.col),
                NavDirection::Right if item.row == from.row => i64::from(item.col) - i64::from(from.col),
                _ => return None,
            };
            (delta > 0).then_some((delta, item))
        })
        .min_by_key(|(delta, _)| *delta)
        .map(|(_, item)| item)
}

/// Item on the target row whose column is closest to `col`.
///
/// Used when a vertical move lands in a short row, e.g. moving down into a
/// partially filled last row of a grid.
pub fn nearest_in_row(items: &[NavigationItem], row: i32, col: i32) -> Option<&NavigationItem> {
    items
        .iter()
        .filter(|item| item.row == row)
        .min_by_key(|item| item.col.abs_diff(col))
}

/// Compute the next focus target for a directional move.
///
/// Pure query: the item set is never modified. Search order is the exact
/// target cell, then the nearest item along the movement axis, then (for
/// vertical moves) the nearest column on the target row.
pub fn compute_next_focus<'a>(
    items: &'a [NavigationItem],
    current_id: &str,
    direction: NavDirection,
    grid_cols: i32,
) -> Result<&'a NavigationItem, NavError> {
    let current =
        find_item(items, current_id).ok_or_else(|| NavError::NotFound(current_id.to_string()))?;

    let (target_row, target_col) = target_coordinate(current.row, current.col, direction, grid_cols);

    item_at(items, target_row, target_col)
        .or_else(|| nearest_along_axis(items, current, direction))
        .or_else(|| {
            if direction.is_vertical() && target_row != current.row {
                nearest_in_row(items, target_row, current.col)
            } else {
                None
            }
        })
        .ok_or_else(|| NavError::NoTarget {
            from: current_id.to_string(),
            direction,
        })
}

/// Resolve where focus lands when a view mounts or its item set changes
pub fn initial_focus_target<'a>(
    items: &'a [NavigationItem],
    initial_focus: Option<&str>,
) -> Option<&'a NavigationItem> {
    initial_focus
        .and_then(|id| find_item(items, id))
        .or_else(|| items.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: i32, cols: i32) -> Vec<NavigationItem> {
        let mut items = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                items.push(NavigationItem::new(format!("r{row}c{col}"), row, col));
            }
        }
        items
    }

    fn column(len: i32) -> Vec<NavigationItem> {
        (0..len)
            .map(|row| NavigationItem::new(format!("item{row}"), row, 0))
            .collect()
    }

    fn next_id(items: &[NavigationItem], from: &str, direction: NavDirection, cols: i32) -> Option<String> {
        compute_next_focus(items, from, direction, cols)
            .ok()
            .map(|item| item.id.clone())
    }

    #[test]
    fn test_target_coordinate_clamping() {
        assert_eq!(target_coordinate(0, 1, NavDirection::Up, 3), (0, 1));
        assert_eq!(target_coordinate(0, 0, NavDirection::Left, 3), (0, 0));
        assert_eq!(target_coordinate(1, 2, NavDirection::Right, 3), (1, 2));
        // Downward movement is never clamped
        assert_eq!(target_coordinate(41, 0, NavDirection::Down, 3), (42, 0));
    }

    #[test]
    fn test_exact_moves_in_full_grid() {
        let items = grid(3, 3);
        assert_eq!(next_id(&items, "r1c1", NavDirection::Up, 3).as_deref(), Some("r0c1"));
        assert_eq!(next_id(&items, "r1c1", NavDirection::Down, 3).as_deref(), Some("r2c1"));
        assert_eq!(next_id(&items, "r1c1", NavDirection::Left, 3).as_deref(), Some("r1c0"));
        assert_eq!(next_id(&items, "r1c1", NavDirection::Right, 3).as_deref(), Some("r1c2"));
    }

    #[test]
    fn test_right_from_last_column_stays_put() {
        let items = grid(3, 3);
        for row in 0..3 {
            let id = format!("r{row}c2");
            let next = compute_next_focus(&items, &id, NavDirection::Right, 3).unwrap();
            assert_eq!(next.col, 2);
            assert_eq!(next.id, id);
        }
    }

    #[test]
    fn test_single_column_horizontal_moves_stay_put() {
        let items = column(5);
        for i in 0..5 {
            let id = format!("item{i}");
            assert_eq!(next_id(&items, &id, NavDirection::Left, 1), Some(id.clone()));
            assert_eq!(next_id(&items, &id, NavDirection::Right, 1), Some(id.clone()));
        }
    }

    #[test]
    fn test_single_column_edges() {
        let items = column(5);
        // Up from row 0 resolves to the item itself
        assert_eq!(next_id(&items, "item0", NavDirection::Up, 1).as_deref(), Some("item0"));
        // Down from the last row has nowhere to go
        assert_eq!(
            compute_next_focus(&items, "item4", NavDirection::Down, 1),
            Err(NavError::NoTarget {
                from: "item4".to_string(),
                direction: NavDirection::Down
            })
        );
    }

    #[test]
    fn test_sparse_column_prefers_same_column() {
        let items = vec![
            NavigationItem::new("a", 0, 1),
            NavigationItem::new("near", 1, 0),
            NavigationItem::new("b", 2, 1),
        ];
        assert_eq!(next_id(&items, "a", NavDirection::Down, 2).as_deref(), Some("b"));
    }

    #[test]
    fn test_sparse_row_fallback() {
        let items = vec![
            NavigationItem::new("a", 0, 0),
            NavigationItem::new("far", 0, 3),
            NavigationItem::new("near", 0, 2),
        ];
        assert_eq!(next_id(&items, "a", NavDirection::Right, 4).as_deref(), Some("near"));
        assert_eq!(next_id(&items, "far", NavDirection::Left, 4).as_deref(), Some("near"));
    }

    #[test]
    fn test_up_fallback_picks_closest_row() {
        let items = vec![
            NavigationItem::new("top", 0, 0),
            NavigationItem::new("mid", 2, 0),
            NavigationItem::new("bottom", 5, 0),
        ];
        assert_eq!(next_id(&items, "bottom", NavDirection::Up, 1).as_deref(), Some("mid"));
    }

    #[test]
    fn test_down_into_short_last_row() {
        let items = vec![
            NavigationItem::new("a", 0, 0),
            NavigationItem::new("b", 0, 1),
            NavigationItem::new("c", 1, 0),
        ];
        assert_eq!(next_id(&items, "b", NavDirection::Down, 2).as_deref(), Some("c"));
    }

    #[test]
    fn test_unknown_current_is_not_found() {
        let items = grid(2, 2);
        assert_eq!(
            compute_next_focus(&items, "missing", NavDirection::Down, 2),
            Err(NavError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_duplicate_coordinates_use_first_match() {
        let items = vec![
            NavigationItem::new("a", 0, 0),
            NavigationItem::new("first", 0, 1),
            NavigationItem::new("second", 0, 1),
        ];
        assert_eq!(next_id(&items, "a", NavDirection::Right, 2).as_deref(), Some("first"));
    }

    #[test]
    fn test_initial_focus_target() {
        let items = grid(2, 2);
        assert_eq!(initial_focus_target(&items, Some("r1c0")).map(|i| i.id.as_str()), Some("r1c0"));
        assert_eq!(initial_focus_target(&items, Some("gone")).map(|i| i.id.as_str()), Some("r0c0"));
        assert_eq!(initial_focus_target(&items, None).map(|i| i.id.as_str()), Some("r0c0"));
        assert!(initial_focus_target(&[], Some("r0c0")).is_none());
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let edge = vec![NavigationItem::new("edge", i32::MAX, 0)];
        // Saturates onto itself, which the navigator treats as no move
        assert_eq!(next_id(&edge, "edge", NavDirection::Down, 1).as_deref(), Some("edge"));

        let column = vec![
            NavigationItem::new("top", i32::MIN, 0),
            NavigationItem::new("bottom", i32::MAX, 0),
        ];
        assert_eq!(next_id(&column, "bottom", NavDirection::Up, 1).as_deref(), Some("top"));
        assert_eq!(next_id(&column, "top", NavDirection::Down, 1).as_deref(), Some("bottom"));

        let row = vec![
            NavigationItem::new("left", 0, i32::MIN),
            NavigationItem::new("right", 0, i32::MAX),
        ];
        assert_eq!(next_id(&row, "left", NavDirection::Right, i32::MAX).as_deref(), Some("right"));
        assert_eq!(
            nearest_in_row(&row, 0, i32::MAX).map(|item| item.id.as_str()),
            Some("right")
        );
    }

    #[test]
    fn test_extreme_target_coordinates() {
        assert_eq!(target_coordinate(i32::MAX, 0, NavDirection::Down, 1), (i32::MAX, 0));
        assert_eq!(target_coordinate(i32::MIN, 0, NavDirection::Up, 1), (0, 0));
        assert_eq!(target_coordinate(0, i32::MIN, NavDirection::Left, 1), (0, 0));
        assert_eq!(target_coordinate(0, i32::MAX, NavDirection::Right, i32::MIN), (0, i32::MIN));
    }
}
