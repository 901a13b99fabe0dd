//! Slide ordering.
//!
//! A reorder is always expressed as the complete sequence of `{id, order}`
//! pairs with contiguous 1-based positions, never as a relative move.

use crate::domain::entities::{CarouselSlide, Identified, SlideOrder};

/// Direction of a single-step move in the admin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Sort slides by their stored `order`, keeping load order for ties.
pub fn by_display_order(slides: &[CarouselSlide]) -> Vec<CarouselSlide> {
    let mut sorted = slides.to_vec();
    sorted.sort_by_key(|s| s.order);
    sorted
}

/// Number the given sequence 1..=N.
pub fn renumber<T: Identified>(items: &[T]) -> Vec<SlideOrder> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| SlideOrder {
            id: item.id().to_string(),
            order: i as u32 + 1,
        })
        .collect()
}

/// Remove the item at `from`, reinsert it at `to`, and renumber the result.
///
/// Returns `None` when either index is out of bounds.
pub fn reorder<T: Identified + Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<SlideOrder>> {
    if from >= items.len() || to >= items.len() {
        return None;
    }
    let mut local = items.to_vec();
    let moved = local.remove(from);
    local.insert(to, moved);
    Some(renumber(&local))
}

/// Move the item with `id` one step in `direction`.
///
/// Returns `None` if the id is unknown or the move would leave the list.
pub fn move_in_direction<T: Identified + Clone>(
    items: &[T],
    id: &str,
    direction: Direction,
) -> Option<Vec<SlideOrder>> {
    let from = items.iter().position(|item| item.id() == id)?;
    let to = match direction {
        Direction::Up => from.checked_sub(1)?,
        Direction::Down => from + 1,
    };
    reorder(items, from, to)
}
