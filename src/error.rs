//! Error types for the `polycover` crate, one enum per axis described in §7
//! of the design spec: arithmetic, instance well-formedness, JSON adapter
//! shape, and archive scanning.

use thiserror::Error;

/// Errors raised while constructing or operating on an [`crate::number::ExactNumber`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
  /// A numeric literal could not be parsed (empty, malformed, multiple `/`, …).
  #[error("cannot parse number literal '{0}'")]
  Parse(String),

  /// Division by the additive identity.
  #[error("division by zero")]
  DivisionByZero,

  /// A JSON floating-point value was not integer-valued and therefore cannot
  /// be lifted into an exact rational without loss.
  #[error("floating point value {0} is not an integer; exact conversion refused")]
  NonIntegerFloat(f64),
}

/// Errors raised while constructing a [`crate::polygon::PolygonWithHoles`]
/// instance or while `verify_instance` walks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
  /// The outer boundary or a hole has fewer than 3 vertices.
  #[error("{0} has fewer than three vertices")]
  InsufficientVertices(&'static str),

  /// The outer boundary or a hole is not a simple polygon.
  #[error("{0} is not simple")]
  NotSimple(&'static str),

  /// The outer boundary is not counter-clockwise, or a hole is not clockwise.
  #[error("{0} has the wrong orientation")]
  WrongOrientation(&'static str),

  /// A hole does not lie strictly inside the outer boundary.
  #[error("hole {0} does not lie inside the outer boundary")]
  HoleOutsideBoundary(usize),

  /// Two holes have overlapping closed interiors.
  #[error("holes {0} and {1} are not interior-disjoint")]
  OverlappingHoles(usize, usize),
}

/// Errors raised while parsing instance/solution JSON (§6).
#[derive(Debug, Error)]
pub enum AdapterError {
  /// The JSON document could not be deserialized at all.
  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  /// A required field was missing or held a value of the wrong shape.
  #[error("malformed document: {0}")]
  Malformed(String),

  /// The `type` tag did not match what this reader expects.
  #[error("wrong document type: expected '{expected}', found '{found}'")]
  WrongType { expected: &'static str, found: String },

  /// A numeric field could not be converted to an exact rational.
  #[error("bad number literal: {0}")]
  Number(#[from] NumberError),

  /// The solution's `polygons` array held no non-empty polygon after filtering.
  #[error("at least one polygon must be provided")]
  NoPolygons,

  /// An I/O error while reading the underlying file.
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// Errors raised while scanning a ZIP archive of solutions (§6/§7).
#[derive(Debug, Error)]
pub enum ArchiveError {
  /// A ZIP entry's name is absolute, escapes its directory, or is hidden.
  #[error("the archive contains the invalid file name '{0}'")]
  InvalidFileName(String),

  /// A single entry's declared decompressed size exceeds the per-file limit.
  #[error("the archive contains '{name}' with a decompressed size of {size} bytes (limit {limit})")]
  FileTooLarge { name: String, size: u64, limit: u64 },

  /// The archive's total declared decompressed size exceeds the aggregate limit.
  #[error("the archive has a total decompressed size of {size} bytes (limit {limit})")]
  ZipTooLarge { size: u64, limit: u64 },

  /// The ZIP container itself is corrupted or not a ZIP file.
  #[error("the archive is corrupted or not a valid ZIP: {0}")]
  InvalidZip(String),

  /// A solution file within the archive could not be decoded as text.
  #[error("'{0}' uses an unrecognized character encoding; please use UTF-8")]
  InvalidEncoding(String),

  /// A solution file within the archive was not valid JSON.
  #[error("'{0}' is not valid JSON: {1}")]
  InvalidJson(String, String),

  /// The archive contained no entries that looked like solution files.
  #[error("the archive does not contain any solution files")]
  NoSolutions,

  /// A structurally malformed solution file aborted the scan.
  #[error("aborted scanning the archive due to a bad file '{0}': {1}")]
  BadSolutionFile(String, String),
}

impl From<AdapterError> for ArchiveError {
  fn from(err: AdapterError) -> ArchiveError {
    match err {
      AdapterError::Json(e) => ArchiveError::InvalidJson(String::new(), e.to_string()),
      other => ArchiveError::BadSolutionFile(String::new(), other.to_string()),
    }
  }
}
