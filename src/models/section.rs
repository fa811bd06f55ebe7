use serde::{Deserialize, Serialize};

use crate::models::country::Country;

/// One alphabetical group of the picker list. Derived on every query,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub items: Vec<Country>,
}
