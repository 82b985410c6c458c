//! Handlers bound to directive keywords.
//!
//! Each handler receives the whole directive line and extracts its value with
//! [`get_parameter`]. Only `XYZ_FILE` changes the configuration; the others parse their
//! value and return it without applying it, so they are ready to be wired to real settings.

use crate::config::SimulationConfig;
use log::{trace, warn};
use std::path::PathBuf;

/// Signature shared by every directive handler. Returns the extracted value, if any.
pub type Handler = for<'a> fn(&'a str, &mut SimulationConfig) -> Option<&'a str>;

/// Returns the token immediately following the keyword.
pub fn get_parameter(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}

/// `XYZ_FILE <path>`: sets the coordinate file path.
pub fn xyz_file<'a>(line: &'a str, config: &mut SimulationConfig) -> Option<&'a str> {
    let parameter = get_parameter(line);
    match parameter {
        Some(path) => config.coordinate_file = PathBuf::from(path),
        None => warn!(
            "XYZ_FILE given without a path, keeping '{}'",
            config.coordinate_file.display()
        ),
    }
    parameter
}

pub fn test_forces<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("TEST_FORCES", line)
}

pub fn constant_temperature<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("CONSTANT_TEMPERATURE", line)
}

pub fn tau<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("TAU", line)
}

pub fn ntsteps<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("NTSTEPS", line)
}

pub fn dt<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("DT", line)
}

pub fn temp<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("TEMP", line)
}

pub fn init_temp<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("INIT_TEMP", line)
}

pub fn iprint<'a>(line: &'a str, _config: &mut SimulationConfig) -> Option<&'a str> {
    unapplied("IPRINT", line)
}

fn unapplied<'a>(keyword: &str, line: &'a str) -> Option<&'a str> {
    let parameter = get_parameter(line);
    trace!("{} = {:?} (not applied)", keyword, parameter);
    parameter
}
