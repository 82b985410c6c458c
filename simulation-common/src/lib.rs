pub mod cli;
pub mod config;
pub mod coordinates;
pub mod directive;
pub mod error;
pub mod parameters;
pub mod vecmath;

// Re-export key types for easier use by dependent crates
pub use cli::CommandLineOverride;
pub use config::{SimulationConfig, DIRECTIVE_FILE};
pub use coordinates::{AtomRecord, CoordinateFrame};
pub use directive::{DirectiveKeyword, Dispatch, KEYWORDS};
pub use error::{Error, Result};
pub use vecmath::Vec3;
