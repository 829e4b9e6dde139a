//! Matrix Market reader.
//!
//! Parses the coordinate text exchange format: a `%%MatrixMarket` banner,
//! optional `%` comment lines, a `rows cols nnz` size line, and one
//! 1-indexed `row col value` line per non-zero. Unsupported encodings
//! (dense `array` format, `complex`/`pattern` fields, non-`general`
//! symmetry) are rejected at the banner, before any data is read. Indices
//! are converted to 0-indexed on ingestion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use spmv_arena::Arena;
use spmv_core::{ElemKind, Scalar};

use crate::coo::CooMatrix;
use crate::error::LoadError;

/// Parsed banner and size line of a Matrix Market file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Number of non-zero entries that follow.
    pub nnz: usize,
    /// Element kind declared by the banner's field token.
    pub kind: ElemKind,
}

/// Load a COO matrix from a Matrix Market file on disk.
pub fn load_coo(arena: &mut Arena, path: &Path) -> Result<CooMatrix, LoadError> {
    let file = File::open(path).map_err(|err| LoadError::io(path, &err))?;
    let origin = path.display().to_string();
    tracing::debug!(path = %origin, "loading matrix");
    read_coo(arena, BufReader::new(file), &origin)
}

/// Load a COO matrix from any buffered reader.
///
/// `origin` labels the stream in I/O error messages.
pub fn read_coo<R: BufRead>(
    arena: &mut Arena,
    input: R,
    origin: &str,
) -> Result<CooMatrix, LoadError> {
    let mut lines = LineSource::new(input, origin);
    let header = read_header(&mut lines)?;
    match header.kind {
        ElemKind::Real => {
            let entries = read_entries::<f64, _>(&mut lines, &header)?;
            Ok(CooMatrix::from_entries(
                arena,
                header.rows,
                header.cols,
                &entries,
            )?)
        }
        ElemKind::Integer => {
            let entries = read_entries::<i64, _>(&mut lines, &header)?;
            Ok(CooMatrix::from_entries(
                arena,
                header.rows,
                header.cols,
                &entries,
            )?)
        }
    }
}

/// Line-by-line reader that tracks 1-based line numbers for error reports.
struct LineSource<R> {
    input: R,
    origin: String,
    lineno: usize,
    buf: String,
}

impl<R: BufRead> LineSource<R> {
    fn new(input: R, origin: &str) -> Self {
        Self {
            input,
            origin: origin.to_string(),
            lineno: 0,
            buf: String::new(),
        }
    }

    /// Next line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&str>, LoadError> {
        self.buf.clear();
        let read = self.input.read_line(&mut self.buf).map_err(|err| LoadError::Io {
            path: self.origin.clone(),
            reason: err.to_string(),
        })?;
        if read == 0 {
            return Ok(None);
        }
        self.lineno += 1;
        Ok(Some(self.buf.trim_end_matches(['\n', '\r'])))
    }

    /// Next line that is neither blank nor a `%` comment.
    ///
    /// Returns an owned copy so the caller can keep parsing while pulling
    /// further lines.
    fn next_content_line(&mut self) -> Result<Option<String>, LoadError> {
        loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('%') {
                        continue;
                    }
                    return Ok(Some(trimmed.to_string()));
                }
            }
        }
    }
}

fn read_header<R: BufRead>(lines: &mut LineSource<R>) -> Result<Header, LoadError> {
    let banner = match lines.next_line()? {
        Some(line) => line.to_string(),
        None => return Err(LoadError::format(0, "empty file, expected %%MatrixMarket banner")),
    };
    let banner_line = lines.lineno;

    let tokens: Vec<String> = banner.split_whitespace().map(str::to_lowercase).collect();
    if tokens.len() != 5 || tokens[0] != "%%matrixmarket" {
        return Err(LoadError::format(
            banner_line,
            "expected banner '%%MatrixMarket matrix coordinate <field> <symmetry>'",
        ));
    }
    if tokens[1] != "matrix" {
        return Err(LoadError::format(
            banner_line,
            format!("unsupported object '{}', only 'matrix' is supported", tokens[1]),
        ));
    }
    if tokens[2] != "coordinate" {
        return Err(LoadError::format(
            banner_line,
            format!("unsupported format '{}', only sparse 'coordinate' is supported", tokens[2]),
        ));
    }
    let kind = match tokens[3].as_str() {
        "real" | "double" => ElemKind::Real,
        "integer" => ElemKind::Integer,
        other => {
            return Err(LoadError::format(
                banner_line,
                format!("unsupported field '{other}', only 'real' and 'integer' are supported"),
            ));
        }
    };
    if tokens[4] != "general" {
        return Err(LoadError::format(
            banner_line,
            format!("unsupported symmetry '{}', only 'general' is supported", tokens[4]),
        ));
    }

    let size_line = match lines.next_content_line()? {
        Some(line) => line,
        None => return Err(LoadError::format(lines.lineno, "missing size line")),
    };
    let size_lineno = lines.lineno;
    let fields: Vec<&str> = size_line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(LoadError::format(
            size_lineno,
            "size line must be 'rows cols nnz'",
        ));
    }
    let parse_dim = |s: &str| -> Result<usize, LoadError> {
        s.parse::<usize>().map_err(|_| {
            LoadError::format(size_lineno, format!("'{s}' is not a non-negative integer"))
        })
    };
    let header = Header {
        rows: parse_dim(fields[0])?,
        cols: parse_dim(fields[1])?,
        nnz: parse_dim(fields[2])?,
        kind,
    };
    tracing::debug!(
        rows = header.rows,
        cols = header.cols,
        nnz = header.nnz,
        kind = %header.kind,
        "parsed matrix header"
    );
    Ok(header)
}

fn read_entries<S, R>(
    lines: &mut LineSource<R>,
    header: &Header,
) -> Result<Vec<(usize, usize, S)>, LoadError>
where
    S: Scalar + FromStr,
    R: BufRead,
{
    let mut entries = Vec::with_capacity(header.nnz);
    while entries.len() < header.nnz {
        let line = match lines.next_content_line()? {
            Some(line) => line,
            None => {
                return Err(LoadError::format(
                    lines.lineno,
                    format!(
                        "unexpected end of file: expected {} entries, found {}",
                        header.nnz,
                        entries.len()
                    ),
                ));
            }
        };
        let lineno = lines.lineno;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(LoadError::format(
                lineno,
                "entry line must be 'row col value'",
            ));
        }
        let row = parse_index(fields[0], header.rows, "row", lineno)?;
        let col = parse_index(fields[1], header.cols, "column", lineno)?;
        let value: S = fields[2].parse().map_err(|_| {
            LoadError::format(lineno, format!("'{}' is not a valid value", fields[2]))
        })?;
        entries.push((row, col, value));
    }
    Ok(entries)
}

/// Parse a 1-indexed coordinate and convert it to 0-indexed.
fn parse_index(s: &str, bound: usize, axis: &str, lineno: usize) -> Result<usize, LoadError> {
    let idx: usize = s
        .parse()
        .map_err(|_| LoadError::format(lineno, format!("'{s}' is not a valid {axis} index")))?;
    if idx == 0 || idx > bound {
        return Err(LoadError::format(
            lineno,
            format!("{axis} index {idx} outside 1..={bound}"),
        ));
    }
    Ok(idx - 1)
}
