//! Editor forms
//!
//! Mutable form state behind the create/edit modals. A form is filled from
//! defaults or from an existing entity, validated, and turned into the
//! create or update payload of its resource.

use validator::Validate;

use crate::domain::{
    CarouselSlide, CarouselSlideCreate, CarouselSlideUpdate, Product, ProductCreate, ProductUpdate,
    Service, ServiceCreate, ServiceUpdate,
};
use crate::infrastructure::http::{Products, Resource, Services, Slides};
use crate::shared::error::AppError;
use crate::shared::validation::{non_blank, validation_error};

/// Icon preselected for new services and products.
pub const DEFAULT_ICON: &str = "monitor";

pub use crate::domain::DEFAULT_DURATION_MINUTES;

// =============================================================================
// Feature list
// =============================================================================

/// Ordered list of feature strings without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureList(Vec<String>);

impl FeatureList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed feature. Blank values and duplicates are ignored.
    pub fn add(&mut self, feature: &str) -> bool {
        let feature = feature.trim();
        if feature.is_empty() || self.0.iter().any(|f| f == feature) {
            return false;
        }
        self.0.push(feature.to_string());
        true
    }

    /// Remove every entry equal to `feature`.
    pub fn remove(&mut self, feature: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|f| f != feature);
        self.0.len() != before
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for FeatureList {
    fn from(features: Vec<String>) -> Self {
        let mut list = Self::new();
        for feature in &features {
            list.add(feature);
        }
        list
    }
}

// =============================================================================
// Form contract
// =============================================================================

/// A modal form bound to one resource.
pub trait EntityForm<R: Resource>: Clone + Validate + Send + Sync {
    /// Defaults for a new entity.
    fn blank() -> Self;

    /// Pre-populated from an existing entity.
    fn from_entity(entity: &R::Entity) -> Self;

    fn to_create(&self) -> R::Create;

    fn to_update(&self) -> R::Update;

    /// Client-side validation run before any request.
    fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(validation_error)
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// =============================================================================
// Service form
// =============================================================================

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ServiceForm {
    #[validate(custom(function = "non_blank", message = "El nombre es obligatorio"))]
    pub name: String,

    #[validate(custom(function = "non_blank", message = "La descripción es obligatoria"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub price: f64,

    #[validate(custom(function = "non_blank", message = "La categoría es obligatoria"))]
    pub category: String,

    pub icon: String,

    #[validate(range(min = 1, message = "La duración debe ser mayor a cero"))]
    pub estimated_duration: u32,

    pub is_active: bool,

    pub features: FeatureList,
}

impl EntityForm<Services> for ServiceForm {
    fn blank() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: String::new(),
            icon: DEFAULT_ICON.to_string(),
            estimated_duration: DEFAULT_DURATION_MINUTES,
            is_active: true,
            features: FeatureList::new(),
        }
    }

    fn from_entity(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            price: service.price,
            category: service.category.clone(),
            icon: service
                .icon
                .clone()
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            estimated_duration: match service.estimated_duration {
                0 => DEFAULT_DURATION_MINUTES,
                minutes => minutes,
            },
            is_active: service.is_active,
            features: FeatureList::from(service.features.clone()),
        }
    }

    fn to_create(&self) -> ServiceCreate {
        ServiceCreate {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            category: self.category.trim().to_string(),
            icon: optional(&self.icon),
            is_active: self.is_active,
            estimated_duration: self.estimated_duration,
            features: self.features.to_vec(),
        }
    }

    fn to_update(&self) -> ServiceUpdate {
        ServiceUpdate {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            price: Some(self.price),
            category: Some(self.category.trim().to_string()),
            icon: optional(&self.icon),
            is_active: Some(self.is_active),
            estimated_duration: Some(self.estimated_duration),
            features: Some(self.features.to_vec()),
        }
    }
}

// =============================================================================
// Product form
// =============================================================================

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductForm {
    #[validate(custom(function = "non_blank", message = "El nombre es obligatorio"))]
    pub name: String,

    #[validate(custom(function = "non_blank", message = "La descripción es obligatoria"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub price: f64,

    #[validate(custom(function = "non_blank", message = "La categoría es obligatoria"))]
    pub category: String,

    pub icon: String,

    /// Uploaded image URL, empty for none
    pub image: String,

    pub stock: u32,

    pub is_active: bool,

    pub features: FeatureList,
}

impl EntityForm<Products> for ProductForm {
    fn blank() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: String::new(),
            icon: DEFAULT_ICON.to_string(),
            image: String::new(),
            stock: 0,
            is_active: true,
            features: FeatureList::new(),
        }
    }

    fn from_entity(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            icon: product
                .icon
                .clone()
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            image: product.image.clone().unwrap_or_default(),
            stock: product.stock,
            is_active: product.is_active,
            features: FeatureList::from(product.features.clone()),
        }
    }

    fn to_create(&self) -> ProductCreate {
        ProductCreate {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            category: self.category.trim().to_string(),
            icon: optional(&self.icon),
            image: optional(&self.image),
            is_active: self.is_active,
            stock: self.stock,
            features: self.features.to_vec(),
        }
    }

    fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            price: Some(self.price),
            category: Some(self.category.trim().to_string()),
            icon: optional(&self.icon),
            image: optional(&self.image),
            is_active: Some(self.is_active),
            stock: Some(self.stock),
            features: Some(self.features.to_vec()),
        }
    }
}

// =============================================================================
// Slide form
// =============================================================================

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SlideForm {
    #[validate(custom(function = "non_blank", message = "El título es obligatorio"))]
    pub title: String,

    pub description: String,

    #[validate(custom(function = "non_blank", message = "La imagen es obligatoria"))]
    pub image_url: String,

    /// Only submitted while `show_button` is on
    pub button_text: String,

    /// Only submitted while `show_button` is on
    pub button_link: String,

    pub show_button: bool,

    pub is_active: bool,
}

impl SlideForm {
    fn button(&self) -> (Option<String>, Option<String>) {
        if self.show_button {
            (optional(&self.button_text), optional(&self.button_link))
        } else {
            (None, None)
        }
    }
}

impl EntityForm<Slides> for SlideForm {
    fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            button_text: String::new(),
            button_link: String::new(),
            show_button: false,
            is_active: true,
        }
    }

    fn from_entity(slide: &CarouselSlide) -> Self {
        Self {
            title: slide.title.clone(),
            description: slide.description.clone(),
            image_url: slide.image_url.clone(),
            button_text: slide.button_text.clone().unwrap_or_default(),
            button_link: slide.button_link.clone().unwrap_or_default(),
            show_button: slide.show_button,
            is_active: slide.is_active,
        }
    }

    fn to_create(&self) -> CarouselSlideCreate {
        let (button_text, button_link) = self.button();
        CarouselSlideCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            button_text,
            button_link,
            show_button: self.show_button,
            order: None,
            is_active: self.is_active,
        }
    }

    fn to_update(&self) -> CarouselSlideUpdate {
        let (button_text, button_link) = self.button();
        CarouselSlideUpdate {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            image_url: Some(self.image_url.trim().to_string()),
            button_text,
            button_link,
            show_button: Some(self.show_button),
            order: None,
            is_active: Some(self.is_active),
        }
    }
}
