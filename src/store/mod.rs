use crate::domain::listing::{Listing, Mode};
use crate::errors::ServerError;
use std::fs;
use std::path::Path;

/// The in-memory listing store: two ordered, read-only sequences loaded
/// once at startup from JSON seed files. Immutable afterwards, so the
/// server's worker threads can share it freely.
#[derive(Clone)]
pub struct ListingStore {
    stays: Vec<Listing>,
    properties: Vec<Listing>,
}

impl ListingStore {
    pub fn new(stays: Vec<Listing>, properties: Vec<Listing>) -> Self {
        Self { stays, properties }
    }

    /// Loads `stays.json` and `properties.json` from the given directory.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, ServerError> {
        let dir = data_dir.as_ref();
        Ok(Self {
            stays: load_file(&dir.join("stays.json"))?,
            properties: load_file(&dir.join("properties.json"))?,
        })
    }

    pub fn get(&self, mode: Mode) -> &[Listing] {
        match mode {
            Mode::Stay => &self.stays,
            Mode::Property => &self.properties,
        }
    }

    pub fn find(&self, mode: Mode, id: u32) -> Option<&Listing> {
        self.get(mode).iter().find(|listing| listing.id == id)
    }
}

fn load_file(path: &Path) -> Result<Vec<Listing>, ServerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ServerError::DataError(format!("Failed to read {}: {e}", path.display())))?;

    serde_json::from_str(&raw)
        .map_err(|e| ServerError::DataError(format!("Failed to parse {}: {e}", path.display())))
}
