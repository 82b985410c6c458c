//! Command-line overrides: `-f <path>` and `-debug`, both matched case-insensitively.

use crate::config::SimulationConfig;
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

/// Settings taken from the process arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineOverride {
    /// Coordinate file given with `-f`. The last `-f` pair wins.
    pub coordinate_file: Option<PathBuf>,
    pub debug: bool,
}

impl CommandLineOverride {
    /// Scans `args`, skipping the program name in position 0.
    ///
    /// The argument after `-f` is not consumed, so it is examined as a flag in its own
    /// right. A trailing `-f` with nothing after it is ignored, as is anything unrecognised.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut overrides = CommandLineOverride::default();

        for i in 1..args.len() {
            if args[i].eq_ignore_ascii_case("-f") && i + 1 < args.len() {
                overrides.coordinate_file = Some(PathBuf::from(&args[i + 1]));
            } else if args[i].eq_ignore_ascii_case("-debug") {
                overrides.debug = true;
            }
        }
        overrides
    }

    /// Applies the overrides on top of whatever the directive file set.
    pub fn apply(&self, config: &mut SimulationConfig) {
        if let Some(path) = &self.coordinate_file {
            debug!(
                "Coordinate file '{}' overridden by -f '{}'",
                config.coordinate_file.display(),
                path.display()
            );
            config.coordinate_file = path.clone();
        }
        if self.debug {
            config.debug = true;
        }
    }
}
