// Item layout planning: ordered ids -> grid descriptors (pure, deterministic)

use crate::nav::types::NavigationItem;

/// How a flat list of items is placed on the logical grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Everything on row 0
    SingleRow,
    /// One item per row
    SingleColumn,
    /// Row-major fill with a fixed column count
    Grid { cols: i32 },
}

impl LayoutPolicy {
    /// Column count the navigator clamps rightward movement to
    pub fn grid_cols(self, item_count: usize) -> i32 {
        match self {
            LayoutPolicy::SingleRow => (item_count as i32).max(1),
            LayoutPolicy::SingleColumn => 1,
            LayoutPolicy::Grid { cols } => cols.max(1),
        }
    }

    fn place(self, index: i32) -> (i32, i32) {
        match self {
            LayoutPolicy::SingleRow => (0, index),
            LayoutPolicy::SingleColumn => (index, 0),
            LayoutPolicy::Grid { cols } => {
                let cols = cols.max(1);
                (index / cols, index % cols)
            }
        }
    }
}

/// Place ids on the grid in order
pub fn build_items<I, S>(ids: I, policy: LayoutPolicy) -> Vec<NavigationItem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter()
        .enumerate()
        .map(|(index, id)| {
            let (row, col) = policy.place(index as i32);
            NavigationItem::new(id, row, col)
        })
        .collect()
}

/// Number of rows a built layout occupies
pub fn row_count(items: &[NavigationItem]) -> usize {
    items
        .iter()
        .map(|item| item.row + 1)
        .max()
        .unwrap_or(0) as usize
}
