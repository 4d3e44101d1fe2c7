//! Tooth numbering schemes.
//!
//! The chart works internally in the Universal scheme (1–32, upper right
//! third molar through lower right third molar). Wire labels from chart and
//! diagnosis sources are parsed through a [`NumberingScheme`], so a practice
//! using FDI two-digit notation substitutes the scheme without touching any
//! rendering logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from tooth-number construction and label parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToothNumberError {
    /// Number outside the fixed 1–32 layout.
    #[error("tooth number {0} outside the 1-32 layout")]
    OutOfRange(u8),
    /// Label is not a number in the active scheme.
    #[error("unrecognized tooth label: {0:?}")]
    UnknownLabel(String),
}

/// A validated tooth identifier in the Universal 1–32 numbering.
///
/// Construction is checked: a `ToothNumber` always refers to one of the 32
/// positions in the anatomical layout table. Serializes as its string label
/// (`"1"`..`"32"`), matching the wire format of the chart sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToothNumber(u8);

impl ToothNumber {
    /// Number of teeth in the fixed layout.
    pub const COUNT: usize = 32;

    /// Create from a Universal number, checking the 1–32 range.
    pub fn new(n: u8) -> Result<Self, ToothNumberError> {
        if (1..=32).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ToothNumberError::OutOfRange(n))
        }
    }

    /// The raw Universal number (1–32).
    pub fn get(self) -> u8 {
        self.0
    }

    /// True for teeth on the upper arch (1–16).
    pub fn is_upper(self) -> bool {
        self.0 <= 16
    }

    /// All 32 tooth numbers in Universal order.
    pub fn all() -> impl Iterator<Item = ToothNumber> {
        (1..=32).map(ToothNumber)
    }
}

impl std::fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ToothNumber {
    type Error = ToothNumberError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        NumberingScheme::Universal.parse_label(&label)
    }
}

impl From<ToothNumber> for String {
    fn from(n: ToothNumber) -> String {
        n.to_string()
    }
}

/// A tooth-numbering convention for wire labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingScheme {
    /// Universal numbering, `"1"`..`"32"`.
    #[default]
    Universal,
    /// FDI two-digit notation, `"11"`..`"48"` by quadrant.
    Fdi,
}

impl NumberingScheme {
    /// Parse a wire label into a canonical [`ToothNumber`].
    pub fn parse_label(self, label: &str) -> Result<ToothNumber, ToothNumberError> {
        let raw: u8 = label
            .trim()
            .parse()
            .map_err(|_| ToothNumberError::UnknownLabel(label.to_string()))?;
        match self {
            NumberingScheme::Universal => ToothNumber::new(raw),
            NumberingScheme::Fdi => {
                let universal = fdi_to_universal(raw)
                    .ok_or_else(|| ToothNumberError::UnknownLabel(label.to_string()))?;
                ToothNumber::new(universal)
            }
        }
    }

    /// Render a tooth number as a label in this scheme.
    pub fn label(self, n: ToothNumber) -> String {
        match self {
            NumberingScheme::Universal => n.to_string(),
            NumberingScheme::Fdi => universal_to_fdi(n.get()).to_string(),
        }
    }
}

/// Map an FDI two-digit code to the Universal number, if valid.
fn fdi_to_universal(fdi: u8) -> Option<u8> {
    let quadrant = fdi / 10;
    let pos = fdi % 10;
    if !(1..=8).contains(&pos) {
        return None;
    }
    match quadrant {
        1 => Some(9 - pos),       // upper right: 18->1 .. 11->8
        2 => Some(8 + pos),       // upper left:  21->9 .. 28->16
        3 => Some(25 - pos),      // lower left:  38->17 .. 31->24
        4 => Some(24 + pos),      // lower right: 41->25 .. 48->32
        _ => None,
    }
}

/// Map a Universal number (1–32) to its FDI two-digit code.
fn universal_to_fdi(n: u8) -> u8 {
    match n {
        1..=8 => 10 + (9 - n),
        9..=16 => 20 + (n - 8),
        17..=24 => 30 + (25 - n),
        _ => 40 + (n - 24),
    }
}
