//! Catalog search, sorting and aggregate statistics.
//!
//! Pure functions over the loaded lists of services and products. The
//! dashboard and the public catalog pages only differ in which predicate
//! they apply.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use crate::domain::entities::{Product, Service, StockStatus};

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "todos";

/// Known category keys and their display labels.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("seguridad", "Seguridad"),
    ("climatizacion", "Climatización"),
    ("informatica", "Informática"),
    ("mantenimiento", "Mantenimiento"),
    ("otros", "Otros"),
];

pub fn category_label(key: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// Common read-only view over services and products.
pub trait CatalogEntity {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
    fn price(&self) -> f64;
    fn is_active(&self) -> bool;

    fn stock(&self) -> Option<u32> {
        None
    }

    fn duration_minutes(&self) -> Option<u32> {
        None
    }
}

impl CatalogEntity for Service {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn price(&self) -> f64 {
        self.price
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn duration_minutes(&self) -> Option<u32> {
        Some(self.estimated_duration)
    }
}

impl CatalogEntity for Product {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn price(&self) -> f64 {
        self.price
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn stock(&self) -> Option<u32> {
        Some(self.stock)
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// User-selectable sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
    Category,
    /// Highest stock first
    Stock,
    /// Shortest duration first
    Duration,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Category => "category",
            Self::Stock => "stock",
            Self::Duration => "duration",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price" | "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "category" => Ok(Self::Category),
            "stock" => Ok(Self::Stock),
            "duration" => Ok(Self::Duration),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

/// Sort in place. The sort is stable, so equal keys keep their load order.
pub fn sort_items<T: CatalogEntity>(items: &mut [T], key: SortKey) {
    items.sort_by(|a, b| compare(a, b, key));
}

pub fn sorted<T: CatalogEntity + Clone>(items: &[T], key: SortKey) -> Vec<T> {
    let mut out = items.to_vec();
    sort_items(&mut out, key);
    out
}

fn compare<T: CatalogEntity>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => collate(a.name(), b.name()),
        SortKey::PriceAsc => a.price().total_cmp(&b.price()),
        SortKey::PriceDesc => b.price().total_cmp(&a.price()),
        SortKey::Category => collate(a.category(), b.category()),
        SortKey::Stock => b.stock().unwrap_or(0).cmp(&a.stock().unwrap_or(0)),
        SortKey::Duration => a
            .duration_minutes()
            .unwrap_or(0)
            .cmp(&b.duration_minutes().unwrap_or(0)),
    }
}

/// Spanish-friendly text comparison: case and accents are ignored first,
/// then the raw strings break ties so the order stays total.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            // ñ sorts right after n
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

// =============================================================================
// Filtering
// =============================================================================

/// Public catalog price buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    Any,
    UpTo100k,
    From100kTo500k,
    From500kTo1m,
    Over1m,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        match self {
            Self::Any => true,
            Self::UpTo100k => price <= 100_000.0,
            Self::From100kTo500k => price > 100_000.0 && price <= 500_000.0,
            Self::From500kTo1m => price > 500_000.0 && price <= 1_000_000.0,
            Self::Over1m => price > 1_000_000.0,
        }
    }
}

impl FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "todos" | "" => Ok(Self::Any),
            "0-100" => Ok(Self::UpTo100k),
            "100-500" => Ok(Self::From100kTo500k),
            "500-1000" => Ok(Self::From500kTo1m),
            "1000+" => Ok(Self::Over1m),
            other => Err(format!("unknown price range '{}'", other)),
        }
    }
}

/// Filter applied to a loaded list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    term: String,
    /// Also match the category key against the term
    search_category: bool,
    active_only: bool,
    category: Option<String>,
    price_range: PriceRange,
}

impl CatalogQuery {
    /// Dashboard search: name, description or category contains the term.
    pub fn admin(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
            search_category: true,
            ..Default::default()
        }
    }

    /// Public catalog: active items only, exact category (`"todos"` = all),
    /// name or description contains the term.
    pub fn public(term: &str, category: &str) -> Self {
        let category = match category.trim() {
            "" | ALL_CATEGORIES => None,
            c => Some(c.to_string()),
        };
        Self {
            term: term.to_lowercase(),
            search_category: false,
            active_only: true,
            category,
            price_range: PriceRange::Any,
        }
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn matches<T: CatalogEntity>(&self, item: &T) -> bool {
        if self.active_only && !item.is_active() {
            return false;
        }
        if let Some(category) = &self.category {
            if item.category() != category {
                return false;
            }
        }
        if !self.price_range.contains(item.price()) {
            return false;
        }
        self.matches_term(item)
    }

    fn matches_term<T: CatalogEntity>(&self, item: &T) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let contains = |field: &str| field.to_lowercase().contains(&self.term);
        contains(item.name())
            || contains(item.description())
            || (self.search_category && contains(item.category()))
    }

    pub fn apply<T: CatalogEntity + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|i| self.matches(*i)).cloned().collect()
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Aggregates over the full loaded list (never the filtered view).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Number of distinct categories
    pub categories: usize,
    pub total_stock: u64,
    /// Σ price × stock
    pub inventory_value: f64,
    pub out_of_stock: usize,
    pub low_stock: usize,
    pub average_price: f64,
}

impl CatalogStats {
    pub fn compute<T: CatalogEntity>(items: &[T]) -> Self {
        let mut stats = Self {
            total: items.len(),
            ..Default::default()
        };
        let mut categories = HashSet::new();
        let mut price_sum = 0.0;

        for item in items {
            if item.is_active() {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
            categories.insert(item.category());
            price_sum += item.price();

            if let Some(stock) = item.stock() {
                stats.total_stock += u64::from(stock);
                stats.inventory_value += item.price() * f64::from(stock);
                match StockStatus::from_stock(stock) {
                    StockStatus::OutOfStock => stats.out_of_stock += 1,
                    StockStatus::Low => stats.low_stock += 1,
                    StockStatus::InStock => {}
                }
            }
        }

        stats.categories = categories.len();
        if !items.is_empty() {
            stats.average_price = price_sum / items.len() as f64;
        }
        stats
    }
}

// =============================================================================
// Presentation helpers
// =============================================================================

/// Badge style for a category in the dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
    Outline,
}

pub fn category_badge(category: &str) -> BadgeVariant {
    match category {
        "seguridad" => BadgeVariant::Destructive,
        "informatica" => BadgeVariant::Secondary,
        "mantenimiento" => BadgeVariant::Outline,
        _ => BadgeVariant::Default,
    }
}

/// Active flag label.
pub fn status_label(is_active: bool) -> &'static str {
    if is_active {
        "Activo"
    } else {
        "Inactivo"
    }
}

/// Format a price as Colombian pesos without decimals, e.g. `$ 1.299.000`.
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}
