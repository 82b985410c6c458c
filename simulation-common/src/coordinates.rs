//! Reader for the whitespace-delimited coordinate file.
//!
//! The layout is positional rather than line based:
//! ```text
//! <atom count> <cubic box length>
//! <symbol> <x> <y> <z>
//! ...
//! ```
//! Line breaks carry no meaning; any run of whitespace separates tokens.

use crate::error::{Error, Result};
use crate::vecmath::Vec3;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Longest chemical symbol accepted for a single atom.
pub const MAX_SYMBOL_LENGTH: usize = 2;

/// One atom's chemical symbol and position.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub symbol: String,
    pub position: Vec3,
}

/// The contents of a coordinate file, with atoms kept in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateFrame {
    pub box_length: f64,
    pub atoms: Vec<AtomRecord>,
}

/// Opens `path` and reads a [`CoordinateFrame`] from it.
///
/// Failing to open the file is reported as [`Error::MissingCoordinateFile`], which callers
/// treat as fatal.
pub fn load<P: AsRef<Path>>(path: P) -> Result<CoordinateFrame> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|_| Error::MissingCoordinateFile {
        path: path_ref.to_path_buf(),
    })?;
    read_coordinates(file)
}

/// Reads the atom count, the box length, then exactly that many atom records.
///
/// Anything after the last expected record is ignored.
pub fn read_coordinates<R: Read>(mut reader: R) -> Result<CoordinateFrame> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let mut tokens = content.split_whitespace();

    let atom_count: usize = next_field(&mut tokens, "atom count", None)?;
    let box_length: f64 = next_field(&mut tokens, "box length", None)?;
    info!(
        "Number of atoms = {} and Cubic Box Length = {:.6}",
        atom_count, box_length
    );

    // Every record needs at least four tokens, so the header cannot force a huge allocation.
    let mut atoms = Vec::with_capacity(atom_count.min(content.len() / 8 + 1));
    for i in 0..atom_count {
        let atom = read_atom(&mut tokens, i)?;
        info!(
            "Atom {} {} with coordinates = {}",
            i + 1,
            atom.symbol,
            atom.position
        );
        atoms.push(atom);
    }

    Ok(CoordinateFrame { box_length, atoms })
}

fn read_atom(tokens: &mut SplitWhitespace<'_>, record: usize) -> Result<AtomRecord> {
    let symbol = tokens.next().ok_or(Error::UnexpectedEof {
        field: "symbol",
        record: Some(record),
    })?;
    if symbol.chars().count() > MAX_SYMBOL_LENGTH {
        return Err(Error::SymbolTooLong {
            record,
            symbol: symbol.to_string(),
            limit: MAX_SYMBOL_LENGTH,
        });
    }

    let x = next_field(tokens, "x coordinate", Some(record))?;
    let y = next_field(tokens, "y coordinate", Some(record))?;
    let z = next_field(tokens, "z coordinate", Some(record))?;

    Ok(AtomRecord {
        symbol: symbol.to_string(),
        position: Vec3::new(x, y, z),
    })
}

fn next_field<T: FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    field: &'static str,
    record: Option<usize>,
) -> Result<T> {
    let token = tokens.next().ok_or(Error::UnexpectedEof { field, record })?;
    token
        .parse()
        .map_err(|_| Error::malformed(field, token, record))
}
