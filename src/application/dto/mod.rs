//! Data Transfer Objects
//!
//! Form state and validated requests built by the screens.

pub mod forms;
pub mod request;

pub use forms::{
    EntityForm, FeatureList, ProductForm, ServiceForm, SlideForm, DEFAULT_DURATION_MINUTES,
    DEFAULT_ICON,
};
pub use request::{ContactForm, LoginRequest, CONTACT_REQUIRED_MESSAGE};
