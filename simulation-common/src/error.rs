use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the directive and coordinate files.
#[derive(Debug, Error)]
pub enum Error {
    /// The directive file could not be opened. Recoverable: the run continues with defaults.
    #[error("INPUT file not found ({})", .path.display())]
    MissingDirectiveFile { path: PathBuf },

    /// The coordinate file could not be opened. Always fatal.
    #[error("File {} not found, please re-run the program", .path.display())]
    MissingCoordinateFile { path: PathBuf },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("line {line} of the directive file is {length} bytes long (limit is {limit})")]
    LineTooLong {
        line: usize,
        length: usize,
        limit: usize,
    },

    #[error("atom {}: symbol '{symbol}' is longer than {limit} characters", .record + 1)]
    SymbolTooLong {
        record: usize,
        symbol: String,
        limit: usize,
    },

    #[error("failed to parse {field} from '{token}'{}", record_suffix(.record))]
    MalformedField {
        field: &'static str,
        token: String,
        record: Option<usize>,
    },

    #[error("coordinate file ended early while reading {field}{}", record_suffix(.record))]
    UnexpectedEof {
        field: &'static str,
        record: Option<usize>,
    },
}

// Records are reported 1-based to match the per-atom echo lines.
fn record_suffix(record: &Option<usize>) -> String {
    match record {
        Some(i) => format!(" (atom {})", i + 1),
        None => String::new(),
    }
}

impl Error {
    pub fn malformed(field: &'static str, token: impl Into<String>, record: Option<usize>) -> Self {
        Self::MalformedField {
            field,
            token: token.into(),
            record,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
