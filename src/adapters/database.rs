//! Instance lookup by name over either a plain directory or a ZIP archive
//! of `NAME.instance.json` files, mirroring the folder-or-ZIP duality of a
//! reference Python implementation's instance database.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::adapters::json::{self, normalize_instance_name, InstanceDocument};
use crate::error::AdapterError;

/// A source of instance documents, looked up by normalised name.
pub enum InstanceDatabase {
  Folder { root: PathBuf },
  Zip { entries: HashMap<String, String> },
}

impl InstanceDatabase {
  /// Open a directory of `*.instance.json` files.
  pub fn open_folder(root: impl Into<PathBuf>) -> InstanceDatabase {
    InstanceDatabase::Folder { root: root.into() }
  }

  /// Open a ZIP archive of `*.instance.json` files, reading every entry
  /// up front into an in-memory name → contents index.
  pub fn open_zip(path: impl AsRef<Path>) -> Result<InstanceDatabase, AdapterError> {
    let file = fs::File::open(path)?;
    let mut zip = ZipArchive::new(file).map_err(|e| AdapterError::Malformed(e.to_string()))?;
    let mut entries = HashMap::new();
    for i in 0..zip.len() {
      let mut entry = zip.by_index(i).map_err(|e| AdapterError::Malformed(e.to_string()))?;
      if entry.is_dir() || !entry.name().ends_with(".json") {
        continue;
      }
      let name = normalize_instance_name(entry.name());
      let mut contents = String::new();
      entry.read_to_string(&mut contents)?;
      entries.insert(name, contents);
    }
    Ok(InstanceDatabase::Zip { entries })
  }

  /// Fetch and parse the instance named `name` (already normalised, or
  /// not — lookup normalises it the same way the documents themselves
  /// are).
  pub fn get(&self, name: &str) -> Result<InstanceDocument, AdapterError> {
    let key = normalize_instance_name(name);
    let raw = match self {
      InstanceDatabase::Folder { root } => {
        let path = root.join(format!("{key}.instance.json"));
        fs::read_to_string(path)?
      }
      InstanceDatabase::Zip { entries } => entries
        .get(&key)
        .cloned()
        .ok_or_else(|| AdapterError::Malformed(format!("no such instance: '{key}'")))?,
    };
    json::parse_instance(&raw)
  }

  /// List every instance name this database knows about.
  pub fn names(&self) -> Result<Vec<String>, AdapterError> {
    match self {
      InstanceDatabase::Folder { root } => {
        let mut names = Vec::new();
        for entry in fs::read_dir(root)? {
          let entry = entry?;
          let file_name = entry.file_name();
          let file_name = file_name.to_string_lossy();
          if file_name.ends_with(".instance.json") {
            names.push(normalize_instance_name(&file_name));
          }
        }
        names.sort();
        Ok(names)
      }
      InstanceDatabase::Zip { entries } => {
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        Ok(names)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn folder_database_reads_and_normalizes() {
    let dir = std::env::temp_dir().join(format!("polycover-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let instance_path = dir.join("example.instance.json");
    let mut file = fs::File::create(&instance_path).unwrap();
    write!(
      file,
      r#"{{"type": "cgshop2023_instance", "id": "example", "outer_boundary": [{{"x":0,"y":0}},{{"x":1,"y":0}},{{"x":1,"y":1}},{{"x":0,"y":1}}], "holes": []}}"#
    )
    .unwrap();
    drop(file);

    let db = InstanceDatabase::open_folder(&dir);
    let doc = db.get("example.instance").unwrap();
    assert_eq!(doc.name, "example");

    fs::remove_dir_all(&dir).ok();
  }
}
