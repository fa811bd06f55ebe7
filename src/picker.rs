use std::sync::Arc;

use tracing::warn;

use crate::models::country::{Country, CountrySelection};
use crate::models::section::Section;
use crate::services::repository::CountryRepository;

/// How a front end should render each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Only country name
    Country,
    /// Country + flag
    CountryWithFlag,
    /// Country + flag + dial code
    CountryFlagAndCode,
}

#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub display_mode: DisplayMode,
    pub show_search: bool,
    pub show_index_bar: bool,
    pub title: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::CountryFlagAndCode,
            show_search: true,
            show_index_bar: true,
            title: "Select Country".to_string(),
        }
    }
}

/// The boundary contract toward embedding applications: a selection or
/// a cancellation, nothing flows back.
pub trait CountryPickerDelegate: Send + Sync {
    fn did_select(&self, selection: CountrySelection);
    fn did_cancel(&self);
}

/// Toolkit-independent picker state. A GUI front end owns one session,
/// feeds it query text, and renders `sections()` and `index_letters()`
/// after each `refresh()`.
///
/// A catalog failure degrades silently to an empty list rather than an
/// error surface; the failure is logged, not shown.
pub struct PickerSession {
    config: PickerConfig,
    repository: Arc<CountryRepository>,
    delegate: Arc<dyn CountryPickerDelegate>,
    query: String,
    items: Vec<Country>,
    sections: Vec<Section>,
    index_letters: Vec<String>,
}

impl PickerSession {
    pub fn new(
        config: PickerConfig,
        repository: Arc<CountryRepository>,
        delegate: Arc<dyn CountryPickerDelegate>,
    ) -> Self {
        Self {
            config,
            repository,
            delegate,
            query: String::new(),
            items: Vec::new(),
            sections: Vec::new(),
            index_letters: Vec::new(),
        }
    }

    /// Recomputes items, sections and index letters for the current
    /// query. Called on appearance and after every query change.
    pub async fn refresh(&mut self) {
        let result = if self.config.show_search {
            self.repository.search(&self.query).await
        } else {
            self.repository.all_countries().await
        };

        match result {
            Ok(items) => {
                self.sections = self.repository.sectioned(&items);
                self.items = items;
                self.index_letters = if self.config.show_index_bar {
                    self.repository.index_letters().await.unwrap_or_default()
                } else {
                    Vec::new()
                };
            }
            Err(e) => {
                warn!("Country catalog unavailable, showing empty picker: {}", e);
                self.items.clear();
                self.sections.clear();
                self.index_letters.clear();
            }
        }
    }

    pub async fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh().await;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn items(&self) -> &[Country] {
        &self.items
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn index_letters(&self) -> &[String] {
        &self.index_letters
    }

    /// Forwards the tapped country to the delegate.
    pub fn select(&self, country: Country) {
        self.delegate.did_select(CountrySelection::new(country));
    }

    /// Forwards a cancellation to the delegate.
    pub fn cancel(&self) {
        self.delegate.did_cancel();
    }
}
