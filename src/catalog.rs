//! Paint color catalog loading.
//!
//! A catalog is an ordered list of [`ColorEntry`] values, augmented once at
//! load time and read-only afterwards. Catalogs are normally read from a JSON
//! file; when that file is missing, unreadable, malformed or empty the
//! built-in ten-color catalog is used instead. Falling back is not an error;
//! a fallback from an explicit path is logged as a warning.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::{CatalogRecord, ColorEntry};

/// Embedded fallback catalog.
const BUILTIN_CATALOG_JSON: &str = include_str!("data/default_catalog.json");

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Read from a catalog file
    File(PathBuf),
    /// The embedded default catalog
    BuiltIn,
    /// Built from records with [`Catalog::new`] rather than loaded, as
    /// library callers and unit tests do
    Inline,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::BuiltIn => f.write_str("built-in"),
            Self::Inline => f.write_str("inline"),
        }
    }
}

/// An immutable, ordered set of augmented color entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<ColorEntry>,
    source: CatalogSource,
}

impl Catalog {
    /// Builds a catalog from raw records, deriving HSL, luma and LRV.
    ///
    /// Order is preserved; it is the tie-breaker for equal scores.
    #[must_use]
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let entries: Vec<ColorEntry> = records.into_iter().map(ColorEntry::from_record).collect();

        for (index, entry) in entries.iter().enumerate() {
            if entries[..index].iter().any(|e| e.id == entry.id) {
                warn!("Duplicate catalog id '{}'", entry.id);
            }
        }

        Self {
            entries,
            source: CatalogSource::Inline,
        }
    }

    /// Parses a catalog from a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a JSON array of records.
    /// An empty array parses successfully into an empty catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(json).context("Catalog must be a JSON array of color records")?;
        Ok(Self::new(records))
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;
        let mut catalog = Self::from_json(&content)
            .context(format!("Failed to parse catalog file: {}", path.display()))?;
        catalog.source = CatalogSource::File(path.to_path_buf());
        Ok(catalog)
    }

    /// The embedded ten-color catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodbot::catalog::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.len(), 10);
    /// assert_eq!(catalog.entries()[0].id, "POW-01");
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::from_json(BUILTIN_CATALOG_JSON).unwrap_or_else(|e| {
            warn!("Embedded catalog failed to parse: {e:#}");
            Self::new(Vec::new())
        });
        catalog.source = CatalogSource::BuiltIn;
        catalog
    }

    /// Loads the catalog at `path`, falling back to the built-in catalog.
    ///
    /// The fallback covers a missing path, read errors, malformed JSON and
    /// an empty array. It never fails.
    #[must_use]
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("No catalog path configured, using built-in catalog");
            return Self::builtin();
        };

        match Self::from_file(path) {
            Ok(catalog) if catalog.is_empty() => {
                warn!(
                    "Catalog {} is empty, using built-in catalog",
                    path.display()
                );
                Self::builtin()
            }
            Ok(catalog) => {
                debug!(
                    "Loaded {} colors from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                warn!("{e:#}; using built-in catalog");
                Self::builtin()
            }
        }
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ColorEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where this catalog was loaded from.
    #[must_use]
    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
