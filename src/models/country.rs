use serde::{Deserialize, Serialize};

use crate::utils::flags::{flag_emoji, Flag, FlagSource};
use crate::utils::text::fold;

/// A single catalog entry. The ISO code doubles as the flag asset key;
/// the display name is the sort key. Many countries share a dial code
/// (the NANP countries all use "+1"); no two share an ISO code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "id")]
    pub iso_code: String,
    pub name: String,
    #[serde(rename = "dialCode")]
    pub dial_code: String,
}

impl Country {
    pub fn new(
        iso_code: impl Into<String>,
        name: impl Into<String>,
        dial_code: impl Into<String>,
    ) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            dial_code: dial_code.into(),
        }
    }

    /// Uppercased, diacritic-folded first letter of the display name,
    /// used for grouping and the jump index ("Åland Islands" files
    /// under "A").
    pub fn section_key(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| fold(&c.to_string()).to_uppercase())
            .unwrap_or_default()
    }
}

/// What the picker hands back through the delegate when the user taps a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySelection {
    pub country: Country,
}

impl CountrySelection {
    pub fn new(country: Country) -> Self {
        Self { country }
    }

    pub fn name(&self) -> &str {
        &self.country.name
    }

    pub fn iso_code(&self) -> &str {
        &self.country.iso_code
    }

    pub fn dial_code(&self) -> &str {
        &self.country.dial_code
    }

    /// Resolves the flag through the given source, falling back to the
    /// synthesized emoji when no asset is available.
    pub fn flag(&self, source: &dyn FlagSource) -> Flag {
        source
            .flag(&self.country.iso_code)
            .unwrap_or_else(|| Flag::Emoji(flag_emoji(&self.country.iso_code)))
    }
}
