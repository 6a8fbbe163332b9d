// Separator placement shared by the two-text and multi-text merge nodes

use crate::error::TextToolsError;
use std::fmt;
use std::str::FromStr;

/// Where the separator goes relative to the concatenated fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorPlacement {
    #[default]
    None,
    Before,
    After,
    Between,
    BeforeAfter,
    BeforeBetween,
    AfterBetween,
    BeforeBetweenAfter,
}

impl SeparatorPlacement {
    /// All placements in the order the host lists them
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Before,
        Self::After,
        Self::Between,
        Self::BeforeAfter,
        Self::BeforeBetween,
        Self::AfterBetween,
        Self::BeforeBetweenAfter,
    ];

    /// Host-facing label, e.g. "Before, Between, After"
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Before => "Before",
            Self::After => "After",
            Self::Between => "Between",
            Self::BeforeAfter => "Before and After",
            Self::BeforeBetween => "Before and Between",
            Self::AfterBetween => "After and Between",
            Self::BeforeBetweenAfter => "Before, Between, After",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Unknown labels behave as `None`
    pub fn from_label_lossy(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| {
            tracing::debug!(label, "unknown separator placement, using None");
            Self::None
        })
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.label()).collect()
    }

    fn before(self) -> bool {
        matches!(
            self,
            Self::Before | Self::BeforeAfter | Self::BeforeBetween | Self::BeforeBetweenAfter
        )
    }

    fn between(self) -> bool {
        matches!(
            self,
            Self::Between | Self::BeforeBetween | Self::AfterBetween | Self::BeforeBetweenAfter
        )
    }

    fn after(self) -> bool {
        matches!(
            self,
            Self::After | Self::BeforeAfter | Self::AfterBetween | Self::BeforeBetweenAfter
        )
    }
}

impl fmt::Display for SeparatorPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeparatorPlacement {
    type Err = TextToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            TextToolsError::unknown_label("separator placement", s, &Self::labels())
        })
    }
}

/// Concatenate `parts` and insert `separator` according to `placement`.
///
/// An empty sequence still receives its outer separators, so `Before` over
/// no parts yields just the separator.
pub fn place_separators<S: AsRef<str>>(
    parts: &[S],
    separator: &str,
    placement: SeparatorPlacement,
) -> String {
    let inner_len: usize = parts.iter().map(|p| p.as_ref().len()).sum();
    let mut merged = String::with_capacity(inner_len + separator.len() * (parts.len() + 1));

    if placement.before() {
        merged.push_str(separator);
    }

    for (i, part) in parts.iter().enumerate() {
        if i > 0 && placement.between() {
            merged.push_str(separator);
        }
        merged.push_str(part.as_ref());
    }

    if placement.after() {
        merged.push_str(separator);
    }

    merged
}
