use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

use crate::models::country::Country;
use crate::models::section::Section;
use crate::utils::text::{fold, name_cmp};

/// The catalog shipped inside the binary, the default when no external
/// file is configured.
const BUNDLED_CATALOG: &str = include_str!("../../assets/countries.json");

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("country catalog not found: {0}")]
    ResourceNotFound(String),
    #[error("failed to decode country catalog: {0}")]
    Decode(String),
}

enum CatalogSource {
    Bundled,
    File(PathBuf),
}

/// Single source of truth for the country catalog and all read queries
/// against it.
///
/// The catalog is loaded lazily on the first query and cached for the
/// lifetime of the repository. Concurrent first callers all await one
/// in-flight load; a load failure is cached too, so every later query
/// reports the same error instead of retrying. Construct one repository
/// and share it (`Arc`) rather than reaching for a global.
pub struct CountryRepository {
    source: CatalogSource,
    catalog: OnceCell<Result<Vec<Country>, CatalogError>>,
}

impl CountryRepository {
    /// Repository over the catalog compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            source: CatalogSource::Bundled,
            catalog: OnceCell::new(),
        }
    }

    /// Repository over an external catalog file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::File(path.into()),
            catalog: OnceCell::new(),
        }
    }

    /// Full catalog, sorted ascending by name (case- and
    /// diacritic-insensitive).
    pub async fn all_countries(&self) -> Result<Vec<Country>, CatalogError> {
        Ok(self.load().await?.to_vec())
    }

    /// Substring filter over name (case- and diacritic-insensitive),
    /// dial code (verbatim), and ISO code (case-insensitive). A blank
    /// query returns the full catalog. No ranking: results keep the
    /// catalog's name-sorted order.
    pub async fn search(&self, query: &str) -> Result<Vec<Country>, CatalogError> {
        let countries = self.load().await?;
        let q = query.trim();
        if q.is_empty() {
            return Ok(countries.to_vec());
        }

        let folded = fold(q);
        let lowered = q.to_lowercase();
        Ok(countries
            .iter()
            .filter(|c| {
                fold(&c.name).contains(&folded)
                    || c.dial_code.contains(q)
                    || c.iso_code.to_lowercase().contains(&lowered)
            })
            .cloned()
            .collect())
    }

    /// Longest-prefix dial-code lookup. The input is normalized by
    /// prefixing `+` if absent, so "1" and "+1" resolve identically.
    /// Among equal-length dial codes sharing a prefix (US and Canada
    /// are both "+1") the first match in catalog order wins, and that
    /// order is arbitrary.
    pub async fn country_for_dial_code(
        &self,
        input: &str,
    ) -> Result<Option<Country>, CatalogError> {
        let countries = self.load().await?;
        let normalized = if input.starts_with('+') {
            input.to_string()
        } else {
            format!("+{input}")
        };

        let mut best: Option<&Country> = None;
        for country in countries {
            if !normalized.starts_with(&country.dial_code) {
                continue;
            }
            let longer = best.is_none_or(|b| country.dial_code.len() > b.dial_code.len());
            if longer {
                best = Some(country);
            }
        }
        Ok(best.cloned())
    }

    /// Case-insensitive exact match on ISO code.
    pub async fn country_for_iso_code(&self, iso: &str) -> Result<Option<Country>, CatalogError> {
        let countries = self.load().await?;
        Ok(countries
            .iter()
            .find(|c| c.iso_code.eq_ignore_ascii_case(iso))
            .cloned())
    }

    /// Groups the given list by section key, keys ascending, items
    /// name-sorted within each group. Pure function of its input; does
    /// not touch the cache.
    pub fn sectioned(&self, countries: &[Country]) -> Vec<Section> {
        let mut groups: BTreeMap<String, Vec<Country>> = BTreeMap::new();
        for country in countries {
            groups
                .entry(country.section_key())
                .or_default()
                .push(country.clone());
        }
        groups
            .into_iter()
            .map(|(key, mut items)| {
                items.sort_by(|a, b| name_cmp(&a.name, &b.name));
                Section { key, items }
            })
            .collect()
    }

    /// Sorted distinct section keys of the full catalog, for rendering
    /// a jump index.
    pub async fn index_letters(&self) -> Result<Vec<String>, CatalogError> {
        let countries = self.load().await?;
        let letters: BTreeSet<String> = countries.iter().map(|c| c.section_key()).collect();
        Ok(letters.into_iter().collect())
    }

    async fn load(&self) -> Result<&[Country], CatalogError> {
        let loaded = self
            .catalog
            .get_or_init(|| async { self.read_catalog().await })
            .await;
        match loaded {
            Ok(countries) => Ok(countries.as_slice()),
            Err(e) => Err(e.clone()),
        }
    }

    async fn read_catalog(&self) -> Result<Vec<Country>, CatalogError> {
        let raw = match &self.source {
            CatalogSource::Bundled => BUNDLED_CATALOG.to_string(),
            CatalogSource::File(path) => read_catalog_file(path).await?,
        };

        let mut countries: Vec<Country> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Decode(e.to_string()))?;
        countries.sort_by(|a, b| name_cmp(&a.name, &b.name));

        info!("Loaded country catalog with {} entries", countries.len());
        Ok(countries)
    }
}

async fn read_catalog_file(path: &Path) -> Result<String, CatalogError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::ResourceNotFound(format!("{}: {}", path.display(), e)))
}
