//! Admin console
//!
//! Command tree of the `reset-admin` binary. Every command drives the same
//! application-layer screen models a graphical client would use.

pub mod handlers;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::services::Direction;

/// RESET Multiservicios admin console
#[derive(Parser, Debug)]
#[command(name = "reset-admin", version, about)]
pub struct Cli {
    /// Print outbound request metrics after the command
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        /// Falls back to RESET_ADMIN_PASSWORD
        #[arg(long, env = "RESET_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// End the session
    Logout,

    /// Show the logged in user
    Whoami,

    /// Manage services
    Services {
        #[command(subcommand)]
        command: ServiceCommands,
    },

    /// Manage products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },

    /// Manage carousel slides
    Slides {
        #[command(subcommand)]
        command: SlideCommands,
    },

    /// Home page carousel
    Carousel {
        #[command(subcommand)]
        command: CarouselCommands,
    },

    /// Public catalog as visitors see it
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Upload an image (JPG, PNG or WebP, max 5MB)
    Upload { path: PathBuf },

    /// Manage uploaded images
    Images {
        #[command(subcommand)]
        command: ImageCommands,
    },

    /// Send the contact lead form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: Option<String>,
    },

    /// Print a WhatsApp click-to-chat link
    Whatsapp {
        /// Predefined message: general, quote, emergency, support
        #[arg(long, conflicts_with = "message")]
        quick: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
}

/// Listing controls shared by services and products.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Match name, description or category
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// name, price-asc, price-desc, category, stock, duration
    #[arg(long, default_value = "name")]
    pub sort: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServiceFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    /// Estimated duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,
    /// Repeat to add several features
    #[arg(long = "feature")]
    pub features: Vec<String>,
    /// Feature to drop (updates only)
    #[arg(long = "remove-feature")]
    pub remove_features: Vec<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    /// Image URL as returned by `upload`
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub stock: Option<u32>,
    #[arg(long = "feature")]
    pub features: Vec<String>,
    #[arg(long = "remove-feature")]
    pub remove_features: Vec<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// List services with stats
    List(ListArgs),
    Show { id: String },
    Create(ServiceFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: ServiceFields,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Flip the active flag
    Toggle { id: String },
    Categories,
    /// Server-side search
    Search { query: String },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products with stats
    List(ListArgs),
    Show { id: String },
    Create(ProductFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    Toggle { id: String },
    Categories,
    Search { query: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SlideFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub button_text: Option<String>,
    #[arg(long)]
    pub button_link: Option<String>,
    #[arg(long)]
    pub show_button: Option<bool>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SlideCommands {
    List,
    Show { id: String },
    Create(SlideFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: SlideFields,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    Toggle { id: String },
    /// Move a slide one position
    Move {
        id: String,
        #[arg(value_enum)]
        direction: MoveDirection,
    },
}

#[derive(Subcommand, Debug)]
pub enum CarouselCommands {
    /// Run the carousel and print every slide change
    Watch {
        /// Stop after this many seconds (runs until Ctrl-C otherwise)
        #[arg(long)]
        seconds: Option<u64>,
    },
    /// Print the slides the carousel would show
    Show,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Category key, "todos" for all
    #[arg(long, default_value = "todos")]
    pub category: String,
    /// todos, 0-100, 100-500, 500-1000, 1000+ (thousands of pesos)
    #[arg(long, default_value = "todos")]
    pub price: String,
    #[arg(long, default_value = "name")]
    pub sort: String,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    Services(CatalogArgs),
    Products(CatalogArgs),
}

#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    List,
    Delete {
        filename: String,
        #[arg(short, long)]
        yes: bool,
    },
}
