use unicode_normalization::UnicodeNormalization;

/// Turn raw user-entered text into an optional non-negative number.
///
/// NFKC-folds first so full-width digits and punctuation from CJK input
/// methods parse like their ASCII forms, then trims. Anything that is empty,
/// unparseable, or negative folds to `None` — "unspecified", never an error.
/// A valid value is returned as typed, with no clamping or rounding.
pub fn normalize_number(raw: &str) -> Option<f64> {
    let folded: String = raw.nfkc().collect();
    let trimmed = folded.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value >= 0.0 => Some(value),
        Ok(_) => None,
        Err(_) => None,
    }
}
