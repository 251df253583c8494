//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod scaffold;
pub mod seo;
pub mod theme;

pub use entities::*;
pub use error::DomainError;
pub use scaffold::{scaffold_plan, ScaffoldStep, WorkDir, COMPONENTS, DEPENDENCIES};
pub use seo::{generate_seo_config, SeoConfig};
pub use theme::{generate_theme_variables, theme_variables, StyleBlock};
