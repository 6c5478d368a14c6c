use super::RecordStore;
use crate::error::{JotzError, Result};
use crate::model::Area;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem-backed store. Records are flat files named after the record,
/// under one root directory per area.
pub struct FsStore {
    persistent_root: PathBuf,
    cache_root: PathBuf,
}

impl FsStore {
    pub fn new(persistent_root: PathBuf, cache_root: PathBuf) -> Self {
        Self {
            persistent_root,
            cache_root,
        }
    }

    fn area_root(&self, area: Area) -> &Path {
        match area {
            Area::Persistent => &self.persistent_root,
            Area::Cache => &self.cache_root,
        }
    }

    fn record_path(&self, area: Area, name: &str) -> PathBuf {
        self.area_root(area).join(name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(JotzError::Io)?;
        }
        Ok(())
    }
}

impl RecordStore for FsStore {
    fn create(&mut self, area: Area, name: &str) -> Result<()> {
        self.ensure_dir(self.area_root(area))?;
        let path = self.record_path(area, name);
        // create_new makes the existence check and the creation one atomic
        // filesystem operation.
        match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(JotzError::AlreadyExists {
                area,
                name: name.to_string(),
            }),
            Err(e) => Err(JotzError::CreateFailed {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    fn write(&mut self, area: Area, name: &str, content: &str) -> Result<()> {
        self.ensure_dir(self.area_root(area))?;
        let path = self.record_path(area, name);
        fs::write(&path, content).map_err(|e| JotzError::WriteFailed {
            name: name.to_string(),
            source: e,
        })
    }

    fn read(&self, area: Area, name: &str) -> Result<String> {
        let path = self.record_path(area, name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(JotzError::NotFound {
                area,
                name: name.to_string(),
            }),
            Err(e) => Err(JotzError::ReadFailed {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    fn delete(&mut self, area: Area, name: &str) -> Result<()> {
        let path = self.record_path(area, name);
        if !path.exists() {
            return Err(JotzError::NotFound {
                area,
                name: name.to_string(),
            });
        }
        fs::remove_file(&path).map_err(JotzError::Io)?;
        Ok(())
    }

    fn path(&self, area: Area, name: &str) -> Result<PathBuf> {
        Ok(self.record_path(area, name))
    }
}
