//! Backend resource descriptors.
//!
//! Services, products and slides share the same CRUD shape; each marker
//! type ties a collection path to its entity and payload types so the API
//! client and the management layer can be written once.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{
    CarouselSlide, CarouselSlideCreate, CarouselSlideUpdate, Identified, Product, ProductCreate,
    ProductUpdate, Service, ServiceCreate, ServiceUpdate,
};

pub trait Resource: Send + Sync + 'static {
    type Entity: DeserializeOwned + Identified + Clone + Send + Sync + 'static;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    /// Collection path relative to the API prefix
    const PATH: &'static str;

    /// Route template of a single item, used as a metrics label
    const ITEM_ROUTE: &'static str;

    /// Lowercase Spanish noun used in user-facing messages
    const NOUN: &'static str;

    /// Message shown when the initial load fails
    const LOAD_ERROR: &'static str;
}

/// Resources exposing `/categories` and `/search`.
pub trait Searchable: Resource {
    const CATEGORIES_ROUTE: &'static str;
    const SEARCH_ROUTE: &'static str;
}

pub struct Services;

pub struct Products;

pub struct Slides;

impl Resource for Services {
    type Entity = Service;
    type Create = ServiceCreate;
    type Update = ServiceUpdate;

    const PATH: &'static str = "/services";
    const ITEM_ROUTE: &'static str = "/services/:id";
    const NOUN: &'static str = "servicio";
    const LOAD_ERROR: &'static str = "Error al cargar servicios";
}

impl Searchable for Services {
    const CATEGORIES_ROUTE: &'static str = "/services/categories";
    const SEARCH_ROUTE: &'static str = "/services/search";
}

impl Resource for Products {
    type Entity = Product;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    const PATH: &'static str = "/products";
    const ITEM_ROUTE: &'static str = "/products/:id";
    const NOUN: &'static str = "producto";
    const LOAD_ERROR: &'static str = "Error al cargar productos";
}

impl Searchable for Products {
    const CATEGORIES_ROUTE: &'static str = "/products/categories";
    const SEARCH_ROUTE: &'static str = "/products/search";
}

impl Resource for Slides {
    type Entity = CarouselSlide;
    type Create = CarouselSlideCreate;
    type Update = CarouselSlideUpdate;

    const PATH: &'static str = "/carousel/slides";
    const ITEM_ROUTE: &'static str = "/carousel/slides/:id";
    const NOUN: &'static str = "slide";
    const LOAD_ERROR: &'static str = "Error al cargar slides del carrusel";
}
