//! Carousel slide entities.
//!
//! Remote slides come from the backend; static slides are the built-in
//! fallback shown before mount and whenever the backend has nothing to show.
//! Both are unified behind [`Slide`] so render code never has to sniff
//! field presence.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Image used when a slide has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Primary call-to-action copy for slides without their own button.
pub const DEFAULT_PRIMARY_CTA: &str = "Ver Servicios";

/// Secondary call-to-action copy, always present when controls are shown.
pub const SECONDARY_CTA: &str = "Solicitar Cotización";

/// A slide stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSlide {
    #[serde(alias = "_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub button_text: Option<String>,

    #[serde(default)]
    pub button_link: Option<String>,

    #[serde(default)]
    pub show_button: bool,

    /// Display position, 1-based once reordered
    #[serde(default)]
    pub order: u32,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /carousel/slides`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSlideCreate {
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    pub show_button: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    pub is_active: bool,
}

/// Payload for `PUT /carousel/slides/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CarouselSlideUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// One entry of a reorder batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideOrder {
    pub id: String,
    pub order: u32,
}

impl Identified for CarouselSlide {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A built-in slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSlide {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Call-to-action controls rendered on top of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub primary_text: String,
    /// Target of the primary button; `None` for the default copy
    pub primary_link: Option<String>,
    pub secondary_text: String,
}

/// A slide as the carousel renders it.
#[derive(Debug, Clone, PartialEq)]
pub enum Slide {
    Static(StaticSlide),
    Remote(CarouselSlide),
}

impl Slide {
    /// Stable render key.
    pub fn key(&self, index: usize) -> String {
        match self {
            Slide::Static(_) => format!("static-{}", index),
            Slide::Remote(slide) => slide.id.clone(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Slide::Static(slide) => slide.title,
            Slide::Remote(slide) => &slide.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Slide::Static(slide) => slide.description,
            Slide::Remote(slide) => &slide.description,
        }
    }

    pub fn image_src(&self) -> &str {
        let src = match self {
            Slide::Static(slide) => slide.src,
            Slide::Remote(slide) => slide.image_url.as_str(),
        };
        if src.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            src
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            Slide::Static(slide) => slide.alt,
            Slide::Remote(slide) => &slide.title,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Slide::Static(_))
    }

    /// Controls for this slide, if any.
    ///
    /// Static slides always show the default copy. Remote slides show
    /// controls only when `show_button` is set, and use their own button
    /// only when both text and link are present.
    pub fn call_to_action(&self) -> Option<CallToAction> {
        match self {
            Slide::Static(_) => Some(CallToAction::default_copy()),
            Slide::Remote(slide) if slide.show_button => {
                let own = slide
                    .button_text
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .zip(slide.button_link.as_deref().filter(|l| !l.is_empty()));

                Some(match own {
                    Some((text, link)) => CallToAction {
                        primary_text: text.to_string(),
                        primary_link: Some(link.to_string()),
                        secondary_text: SECONDARY_CTA.to_string(),
                    },
                    None => CallToAction::default_copy(),
                })
            }
            Slide::Remote(_) => None,
        }
    }
}

impl CallToAction {
    fn default_copy() -> Self {
        Self {
            primary_text: DEFAULT_PRIMARY_CTA.to_string(),
            primary_link: None,
            secondary_text: SECONDARY_CTA.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}
