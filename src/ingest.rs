//! CubeCobra CSV export loader.
//!
//! Reads the `Name`, `CMC`, `Type` and `Color` columns; any other columns
//! are ignored. Rows whose fields cannot be parsed are skipped with a
//! warning. A missing required column fails the whole load.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cards::Card;

/// Columns every cube export must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Name", "CMC", "Type", "Color"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),
}

/// One CubeCobra row. Header names are CubeCobra's.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawCubeRow {
    Name: String,
    CMC: f64,
    #[serde(default)]
    Type: String,
    #[serde(default)]
    Color: String,
}

impl RawCubeRow {
    fn into_card(self) -> Option<Card> {
        let name = self.Name.trim();
        if name.is_empty() {
            warn!("skipping cube row with empty name");
            return None;
        }
        if !self.CMC.is_finite() || self.CMC < 0.0 {
            warn!("skipping '{}': invalid CMC {}", name, self.CMC);
            return None;
        }

        Some(Card::new(
            name,
            self.CMC.round() as u32,
            self.Type.trim(),
            &self.Color,
        ))
    }
}

/// Parse a cube export from any reader.
pub fn read_cube_csv<R: Read>(rdr: R) -> Result<Vec<Card>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn(column.to_string()));
        }
    }

    let mut cards = Vec::new();
    for result in reader.deserialize::<RawCubeRow>() {
        match result {
            Ok(raw) => cards.extend(raw.into_card()),
            Err(e) => warn!("skipping malformed cube row: {}", e),
        }
    }

    debug!(cards = cards.len(), "cube parsed");
    Ok(cards)
}

/// Load a cube export from disk.
pub fn load_cube_csv(path: &Path) -> Result<Vec<Card>, IngestError> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_cube_csv(file)
}
