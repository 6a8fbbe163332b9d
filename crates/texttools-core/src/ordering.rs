// Fragment selection and ordering for the multi-text merge

use crate::error::TextToolsError;
use std::str::FromStr;

/// Number of text slots on the multi-text merge node
pub const MAX_FRAGMENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextOrder {
    /// Enabled fragments in declaration order
    #[default]
    Sequential,
    /// Fragments in the order given by a comma-separated index list
    Custom,
}

impl TextOrder {
    pub const ALL: [Self; 2] = [Self::Sequential, Self::Custom];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::Custom => "Custom",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

impl FromStr for TextOrder {
    type Err = TextToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            TextToolsError::unknown_label("text order", s, &["Sequential", "Custom"])
        })
    }
}

/// An enabled, non-empty fragment tagged with its 1-based slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFragment<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Parse a custom order such as "3, 1,2" into 1-based indices.
///
/// Returns `None` when any token is not an integer in `1..=MAX_FRAGMENTS`.
pub fn parse_custom_order(custom_order: &str) -> Option<Vec<usize>> {
    custom_order
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|idx| (1..=MAX_FRAGMENTS).contains(idx))
        })
        .collect()
}

/// Arrange active fragments for merging.
///
/// In custom order every listed index re-scans the active list, so a
/// repeated index repeats that fragment and an index with no active
/// fragment is skipped. A malformed order falls back to sequential.
pub fn order_fragments<'a>(
    active: &[ActiveFragment<'a>],
    order: TextOrder,
    custom_order: &str,
) -> Vec<&'a str> {
    let sequential = || active.iter().map(|f| f.text).collect::<Vec<_>>();

    match order {
        TextOrder::Sequential => sequential(),
        TextOrder::Custom => match parse_custom_order(custom_order) {
            Some(indices) => indices
                .into_iter()
                .filter_map(|idx| active.iter().find(|f| f.index == idx).map(|f| f.text))
                .collect(),
            None => {
                tracing::debug!(custom_order, "malformed custom order, falling back to sequential");
                sequential()
            }
        },
    }
}
