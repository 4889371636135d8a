//! Seed fixtures. The desk starts from a fixed data set; there is no
//! persistence boundary, so whatever the session does is gone on exit.

use crate::core::{Client, Portal, Registration, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_FIXTURE: &str = include_str!("../fixtures/seed.json");

/// The three collections as loaded from a fixture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub portals: Vec<Portal>,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

impl SeedData {
    /// The fixture compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Ok(serde_json::from_str(BUILTIN_FIXTURE)?)
    }

    /// Load an alternate fixture from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
