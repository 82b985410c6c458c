//! Line-oriented parser for the `INPUT` directive file.
//!
//! A line is skipped when its very first character is `#`. Otherwise it is tested against
//! every entry of [`KEYWORDS`] with a case-insensitive prefix match, and each matching
//! handler is called with the whole line. The match does not stop at a token boundary
//! (`TAU_FOO 1` matches `TAU`), and a `#` later in the line is left in place.

use crate::config::SimulationConfig;
use crate::error::{Error, Result};
use crate::parameters::{self, Handler};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Longest directive line accepted, in bytes, excluding the line terminator.
pub const MAX_LINE_LENGTH: usize = 256;

/// A recognised keyword and the handler it dispatches to.
#[derive(Clone, Copy)]
pub struct DirectiveKeyword {
    pub keyword: &'static str,
    pub handler: Handler,
}

impl DirectiveKeyword {
    /// Case-insensitive test for whether `line` begins with this keyword.
    pub fn matches(&self, line: &str) -> bool {
        line.get(..self.keyword.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(self.keyword))
    }
}

// No entry may be a prefix of another, or both would fire on the same line.
pub const KEYWORDS: [DirectiveKeyword; 9] = [
    DirectiveKeyword { keyword: "XYZ_FILE", handler: parameters::xyz_file },
    DirectiveKeyword { keyword: "TEST_FORCES", handler: parameters::test_forces },
    DirectiveKeyword { keyword: "CONSTANT_TEMPERATURE", handler: parameters::constant_temperature },
    DirectiveKeyword { keyword: "TAU", handler: parameters::tau },
    DirectiveKeyword { keyword: "NTSTEPS", handler: parameters::ntsteps },
    DirectiveKeyword { keyword: "DT", handler: parameters::dt },
    DirectiveKeyword { keyword: "TEMP", handler: parameters::temp },
    DirectiveKeyword { keyword: "INIT_TEMP", handler: parameters::init_temp },
    DirectiveKeyword { keyword: "IPRINT", handler: parameters::iprint },
];

/// One handler invocation made for a directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch<'a> {
    pub keyword: &'static str,
    pub value: Option<&'a str>,
}

/// Dispatches a single line to every matching keyword handler.
pub fn parse_line<'a>(line: &'a str, config: &mut SimulationConfig) -> Vec<Dispatch<'a>> {
    if line.starts_with('#') {
        debug!("String {} has a # at the beginning of the string", line);
        return Vec::new();
    }

    let mut dispatched = Vec::new();
    for entry in KEYWORDS.iter().filter(|entry| entry.matches(line)) {
        debug!("Found {} in INPUT file", entry.keyword);
        dispatched.push(Dispatch {
            keyword: entry.keyword,
            value: (entry.handler)(line, config),
        });
    }
    dispatched
}

/// Reads directives line by line from `reader`.
pub fn parse_directives<R: BufRead>(reader: R, config: &mut SimulationConfig) -> Result<()> {
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.len() > MAX_LINE_LENGTH {
            return Err(Error::LineTooLong {
                line: i + 1,
                length: line.len(),
                limit: MAX_LINE_LENGTH,
            });
        }
        parse_line(&line, config);
    }
    Ok(())
}

/// Opens the directive file at `path` and applies its directives to `config`.
///
/// A file that cannot be opened yields [`Error::MissingDirectiveFile`] with `config`
/// untouched.
pub fn read_directive_file<P: AsRef<Path>>(path: P, config: &mut SimulationConfig) -> Result<()> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|_| Error::MissingDirectiveFile {
        path: path_ref.to_path_buf(),
    })?;
    parse_directives(BufReader::new(file), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use test_case::test_case;

    #[test_case("XYZ_FILE"; "xyz_file")]
    #[test_case("test_forces"; "test_forces")]
    #[test_case("Constant_Temperature"; "constant_temperature")]
    #[test_case("tau"; "tau")]
    #[test_case("NtSteps"; "ntsteps")]
    #[test_case("dt"; "dt")]
    #[test_case("TEMP"; "temp")]
    #[test_case("init_TEMP"; "init_temp")]
    #[test_case("iPrint"; "iprint")]
    fn each_keyword_dispatches_once(keyword: &str) {
        let mut config = SimulationConfig::default();
        let line = format!("{keyword} 42");
        let got = parse_line(&line, &mut config);
        assert_eq!(
            got,
            vec![Dispatch {
                keyword: KEYWORDS
                    .iter()
                    .find(|k| k.keyword.eq_ignore_ascii_case(keyword))
                    .unwrap()
                    .keyword,
                value: Some("42"),
            }]
        );
    }

    #[test]
    fn no_keyword_is_a_prefix_of_another() {
        for a in &KEYWORDS {
            for b in &KEYWORDS {
                if a.keyword != b.keyword {
                    assert!(!b.keyword.starts_with(a.keyword), "{} / {}", a.keyword, b.keyword);
                }
            }
        }
    }

    #[test]
    fn comment_lines_are_skipped() {
        let mut config = SimulationConfig::default();
        assert!(parse_line("#XYZ_FILE water.xyz", &mut config).is_empty());
        assert!(parse_line("# TAU 0.5", &mut config).is_empty());
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn indented_lines_do_not_match() {
        let mut config = SimulationConfig::default();
        assert!(parse_line("   # TAU 0.5", &mut config).is_empty());
        assert!(parse_line("  TAU 0.5", &mut config).is_empty());
    }

    #[test]
    fn mid_line_comment_is_kept() {
        let mut config = SimulationConfig::default();
        let got = parse_line("TAU 0.5 # relaxation time", &mut config);
        assert_eq!(got, vec![Dispatch { keyword: "TAU", value: Some("0.5") }]);
    }

    #[test]
    fn prefix_match_is_loose() {
        let mut config = SimulationConfig::default();
        let got = parse_line("TAU_FOO 3", &mut config);
        assert_eq!(got, vec![Dispatch { keyword: "TAU", value: Some("3") }]);

        let got = parse_line("DTX", &mut config);
        assert_eq!(got, vec![Dispatch { keyword: "DT", value: None }]);
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let mut config = SimulationConfig::default();
        assert!(parse_line("PRESSURE 1.0", &mut config).is_empty());
        assert!(parse_line("", &mut config).is_empty());
    }

    #[test]
    fn later_xyz_file_wins() {
        let mut config = SimulationConfig::default();
        let input = "XYZ_FILE first.xyz\n# XYZ_FILE skipped.xyz\nxyz_file second.xyz\nTEMP 300\n";
        parse_directives(input.as_bytes(), &mut config).unwrap();
        assert_eq!(config.coordinate_file, PathBuf::from("second.xyz"));
    }

    #[test]
    fn crlf_line_endings() {
        let mut config = SimulationConfig::default();
        parse_directives("XYZ_FILE water.xyz\r\n".as_bytes(), &mut config).unwrap();
        assert_eq!(config.coordinate_file, PathBuf::from("water.xyz"));
    }

    #[test]
    fn long_line_is_an_error() {
        let mut config = SimulationConfig::default();
        let input = format!("TAU 1\nXYZ_FILE {}\n", "a".repeat(MAX_LINE_LENGTH));
        let err = parse_directives(input.as_bytes(), &mut config).unwrap_err();
        assert!(matches!(
            err,
            Error::LineTooLong {
                line: 2,
                limit: MAX_LINE_LENGTH,
                ..
            }
        ));
        assert_eq!(config.coordinate_file, PathBuf::new());
    }

    #[test]
    fn read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# water box").unwrap();
        writeln!(file, "XYZ_FILE water.xyz").unwrap();
        writeln!(file, "DT 0.001").unwrap();

        let mut config = SimulationConfig::default();
        read_directive_file(file.path(), &mut config).unwrap();
        assert_eq!(config.coordinate_file, PathBuf::from("water.xyz"));
    }

    #[test]
    fn missing_file_leaves_config_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SimulationConfig::default();
        let err = read_directive_file(dir.path().join("INPUT"), &mut config).unwrap_err();
        assert!(matches!(err, Error::MissingDirectiveFile { .. }));
        assert_eq!(config, SimulationConfig::default());
    }
}
