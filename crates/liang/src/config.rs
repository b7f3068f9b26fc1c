//! Hyphenation parameters.

/// Parameters of a hyphenation table.
///
/// The defaults are the values of plain TeX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HyphenationConfig {
    /// Minimum number of letters before a break (`\lefthyphenmin`).
    pub left_hyphen_min: usize,
    /// Minimum number of letters after a break (`\righthyphenmin`).
    pub right_hyphen_min: usize,
    /// Character inserted at a break (`\hyphenchar`).
    pub hyphen_char: char,
    /// Whether the table hyphenates at all.
    pub hyphen_active: bool,
    /// Whether freezing the table also shares identical codes.
    pub compress_on_freeze: bool,
}

impl Default for HyphenationConfig {
    fn default() -> Self {
        HyphenationConfig {
            left_hyphen_min: 2,
            right_hyphen_min: 3,
            hyphen_char: '-',
            hyphen_active: true,
            compress_on_freeze: true,
        }
    }
}
