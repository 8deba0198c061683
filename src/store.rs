//! Persistent key/value store behind `--set` and `--get`.
//!
//! The store is a single JSON object on disk. Writes go through a temporary
//! file in the same directory that is then renamed over the old file.

use anyhow::{bail, Context, Result};
use expand_object::{get_path, merge, Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const STORE_DIR: &str = "expand-object";
const STORE_FILE: &str = "store.json";

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/expand-object/store.json`, else under `$HOME/.config`.
    pub fn default_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;
        Some(config_home.join(STORE_DIR).join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored mapping. A missing file is an empty store.
    pub fn load(&self) -> Result<Map> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let value: Value = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        match value {
            Value::Object(map) => Ok(map),
            other => bail!(
                "{} does not hold a JSON object (found {})",
                self.path.display(),
                other
            ),
        }
    }

    pub fn get(&self, path: &str) -> Result<Option<Value>> {
        let stored = Value::Object(self.load()?);
        Ok(get_path(&stored, path).cloned())
    }

    /// Deep-merges `incoming` into the stored mapping and returns the result.
    pub fn set(&self, incoming: Map) -> Result<Map> {
        let mut stored = self.load()?;
        merge(&mut stored, incoming);
        self.save(&stored)?;
        tracing::debug!(path = %self.path().display(), keys = stored.len(), "store updated");
        Ok(stored)
    }

    fn save(&self, map: &Map) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

        let mut file = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
        serde_json::to_writer_pretty(&mut file, &Value::Object(map.clone()))
            .context("failed to serialize store")?;
        writeln!(file).context("failed to write store")?;
        file.persist(&self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
