//! ZIP archive scanner for batches of solution files, with decompression-
//! bomb guards and path sanitisation modelled on a reference Python
//! implementation's archive-handling rules: reject absolute paths, `..`
//! components, and hidden/`__`-prefixed entries; cap both per-file and
//! aggregate decompressed size; fall back from UTF-8 to a best-effort
//! encoding detector when an entry isn't valid UTF-8.

use std::io::Read;

use encoding_rs::Encoding;
use zip::ZipArchive;

use crate::adapters::json::{self, SolutionDocument};
use crate::error::ArchiveError;

/// Per-file decompressed size limit: 250 MB.
pub const MAX_FILE_SIZE: u64 = 250 * 1_000_000;
/// Aggregate decompressed size limit across the whole archive: 2 GB.
pub const MAX_TOTAL_SIZE: u64 = 2_000 * 1_000_000;

/// One entry's outcome while scanning a solution archive.
#[derive(Debug)]
pub enum ScanOutcome {
  Solution(SolutionDocument),
  Skipped { name: String, reason: String },
}

/// Scan every entry of a ZIP archive, parsing `.json` members as solution
/// documents. Malformed individual members are skipped with a logged
/// reason rather than aborting the whole scan; only archive-level problems
/// (corruption, a hostile path, a size-limit breach) abort early.
pub fn scan_archive<R: Read + std::io::Seek>(reader: R) -> Result<Vec<ScanOutcome>, ArchiveError> {
  let mut zip = ZipArchive::new(reader).map_err(|e| ArchiveError::InvalidZip(e.to_string()))?;

  let mut total_size: u64 = 0;
  let mut outcomes = Vec::new();

  for i in 0..zip.len() {
    let (name, size, contents) = {
      let mut entry = zip.by_index(i).map_err(|e| ArchiveError::InvalidZip(e.to_string()))?;
      let name = entry.name().to_string();

      if entry.is_dir() {
        continue;
      }
      if !is_safe_entry_name(&name) {
        return Err(ArchiveError::InvalidFileName(name));
      }

      let size = entry.size();
      if size > MAX_FILE_SIZE {
        return Err(ArchiveError::FileTooLarge { name, size, limit: MAX_FILE_SIZE });
      }

      let mut buf = Vec::with_capacity(size as usize);
      entry.read_to_end(&mut buf).map_err(|e| ArchiveError::InvalidZip(e.to_string()))?;
      (name, size, buf)
    };

    total_size += size;
    if total_size > MAX_TOTAL_SIZE {
      return Err(ArchiveError::ZipTooLarge { size: total_size, limit: MAX_TOTAL_SIZE });
    }

    if !name.ends_with(".json") {
      outcomes.push(ScanOutcome::Skipped { name, reason: "not a .json file".to_string() });
      continue;
    }

    let text = match decode_text(&contents) {
      Some(text) => text,
      None => {
        tracing::warn!(entry = %name, "skipping entry with unrecognized encoding");
        outcomes.push(ScanOutcome::Skipped { name, reason: "unrecognized character encoding".to_string() });
        continue;
      }
    };

    match json::parse_solution(&text) {
      Ok(doc) => outcomes.push(ScanOutcome::Solution(doc)),
      Err(err) => {
        tracing::warn!(entry = %name, error = %err, "skipping malformed solution entry");
        outcomes.push(ScanOutcome::Skipped { name, reason: err.to_string() });
      }
    }
  }

  if outcomes.iter().all(|o| matches!(o, ScanOutcome::Skipped { .. })) && !outcomes.is_empty() {
    tracing::warn!("archive contained no valid solution files");
  }
  if outcomes.is_empty() {
    return Err(ArchiveError::NoSolutions);
  }

  Ok(outcomes)
}

fn is_safe_entry_name(name: &str) -> bool {
  if name.is_empty() || name.starts_with('/') || name.contains("..") {
    return false;
  }
  !name.split('/').any(|component| component.starts_with('.') || component.starts_with("__"))
}

/// Decode `bytes` as UTF-8, falling back to a best-effort detected
/// encoding (favouring Windows-1252, the common case for legacy solution
/// dumps) if strict UTF-8 decoding fails.
fn decode_text(bytes: &[u8]) -> Option<String> {
  if let Ok(text) = std::str::from_utf8(bytes) {
    return Some(text.to_string());
  }
  let (text, _encoding, had_errors) = Encoding::for_label(b"windows-1252").unwrap().decode(bytes);
  if had_errors {
    None
  } else {
    Some(text.into_owned())
  }
}
