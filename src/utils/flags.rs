/// An opaque flag handle. Toolkit adapters resolve `Asset` payloads into
/// whatever image type their framework wants; `Emoji` works everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    Asset(Vec<u8>),
    Emoji(String),
}

/// Supplies flag images by ISO code. Embedding applications provide an
/// asset-backed implementation at the presentation boundary; `None`
/// means "no asset for this code" and callers fall back to
/// [`flag_emoji`].
pub trait FlagSource: Send + Sync {
    fn flag(&self, iso_code: &str) -> Option<Flag>;
}

/// The always-available source: synthesizes the emoji for every code.
pub struct EmojiFlags;

impl FlagSource for EmojiFlags {
    fn flag(&self, iso_code: &str) -> Option<Flag> {
        let emoji = flag_emoji(iso_code);
        if emoji.is_empty() {
            None
        } else {
            Some(Flag::Emoji(emoji))
        }
    }
}

// Offset from 'A' (65) to REGIONAL INDICATOR SYMBOL LETTER A (U+1F1E6).
const REGIONAL_INDICATOR_BASE: u32 = 127397;

/// Maps each ASCII letter of the ISO code to its regional-indicator
/// symbol, so "US" becomes the US flag emoji. Non-letter characters are
/// skipped.
pub fn flag_emoji(iso_code: &str) -> String {
    iso_code
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_BASE + c.to_ascii_uppercase() as u32))
        .collect()
}
