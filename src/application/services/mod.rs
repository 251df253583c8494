//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner)
//! but are themselves concrete structs, not traits.

mod artifacts;
mod scaffold;

pub use artifacts::{
    render_seo, replace_theme_section, ArtifactService, THEME_END_DELIMITER,
    THEME_START_DELIMITER,
};
pub use scaffold::ScaffoldService;
