//! Domain Services
//!
//! Pure business rules that operate on already loaded entities.

pub mod catalog;
pub mod ordering;

pub use catalog::{
    category_badge, category_label, collate, format_price, sort_items, sorted, status_label,
    BadgeVariant, CatalogEntity, CatalogQuery, CatalogStats, PriceRange, SortKey, ALL_CATEGORIES,
    CATEGORIES,
};
pub use ordering::{by_display_order, move_in_direction, renumber, reorder, Direction};
