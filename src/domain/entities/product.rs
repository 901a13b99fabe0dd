//! Product entity and stock status derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Identified;

/// Stock level at or above which a product counts as comfortably in stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub icon: Option<String>,

    /// Product image URL
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }

    /// price × stock
    pub fn inventory_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

/// Payload for `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_active: bool,
    pub stock: u32,
    pub features: Vec<String>,
}

/// Payload for `PUT /products/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl ProductUpdate {
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Default::default()
        }
    }
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Derived stock badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
}

impl StockStatus {
    pub fn from_stock(stock: u32) -> Self {
        match stock {
            0 => Self::OutOfStock,
            s if s < LOW_STOCK_THRESHOLD => Self::Low,
            _ => Self::InStock,
        }
    }

    /// Badge label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutOfStock => "Sin stock",
            Self::Low => "Stock bajo",
            Self::InStock => "En stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_true() -> bool {
    true
}
