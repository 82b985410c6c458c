use crate::cli::CommandLineOverride;
use crate::coordinates::{self, AtomRecord};
use crate::directive;
use crate::error::{Error, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Name of the directive file, looked up relative to the working directory.
pub const DIRECTIVE_FILE: &str = "INPUT";

/// State of one setup run: where the coordinates came from and what they contained.
///
/// `Default` is the empty state the run starts from. After [`SimulationConfig::load_coordinates`]
/// succeeds, `atoms.len() == atom_count`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationConfig {
    pub coordinate_file: PathBuf,
    pub atom_count: usize,
    pub box_length: f64,
    pub debug: bool,
    pub atoms: Vec<AtomRecord>,
}

impl SimulationConfig {
    /// Runs the whole setup: directives from `directive_file`, then the command-line
    /// overrides, then the coordinate file.
    ///
    /// A missing directive file is logged and skipped. Every other error is returned,
    /// including a coordinate file that cannot be opened.
    pub fn initialize<P: AsRef<Path>>(directive_file: P, overrides: &CommandLineOverride) -> Result<Self> {
        let mut config = SimulationConfig::default();

        match directive::read_directive_file(directive_file, &mut config) {
            Ok(()) => {}
            Err(e @ Error::MissingDirectiveFile { .. }) => warn!("{}", e),
            Err(e) => return Err(e),
        }

        overrides.apply(&mut config);
        config.load_coordinates()?;
        Ok(config)
    }

    /// Reads the coordinate file named by `coordinate_file`, replacing any atoms held.
    pub fn load_coordinates(&mut self) -> Result<()> {
        info!("Reading coordinates from '{}'", self.coordinate_file.display());
        let frame = coordinates::load(&self.coordinate_file)?;

        self.atom_count = frame.atoms.len();
        self.box_length = frame.box_length;
        self.atoms = frame.atoms;
        Ok(())
    }
}
