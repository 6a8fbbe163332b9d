// Text merge engine: two-text and multi-text variants over one placement algorithm

use crate::error::TextToolsError;
use crate::ordering::{order_fragments, ActiveFragment, TextOrder, MAX_FRAGMENTS};
use crate::placement::{place_separators, SeparatorPlacement};
use std::str::FromStr;

pub const DEFAULT_SEPARATOR: &str = ", ";
pub const DEFAULT_CUSTOM_ORDER: &str = "1,2,3";

/// Which input comes first in the two-text merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwoTextOrder {
    #[default]
    Text1ThenText2,
    Text2ThenText1,
}

impl TwoTextOrder {
    pub const ALL: [Self; 2] = [Self::Text1ThenText2, Self::Text2ThenText1];

    pub fn label(self) -> &'static str {
        match self {
            Self::Text1ThenText2 => "Text1 + Text2",
            Self::Text2ThenText1 => "Text2 + Text1",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

impl FromStr for TwoTextOrder {
    type Err = TextToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            TextToolsError::unknown_label("order", s, &["Text1 + Text2", "Text2 + Text1"])
        })
    }
}

/// Merge two texts. Missing inputs count as empty and still participate.
pub fn merge_two(
    text1: Option<&str>,
    text2: Option<&str>,
    order: TwoTextOrder,
    separator: &str,
    placement: SeparatorPlacement,
) -> String {
    let text1 = text1.unwrap_or_default();
    let text2 = text2.unwrap_or_default();

    let parts = match order {
        TwoTextOrder::Text1ThenText2 => [text1, text2],
        TwoTextOrder::Text2ThenText1 => [text2, text1],
    };

    place_separators(&parts, separator, placement)
}

/// One text slot of the multi-text merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub enabled: bool,
}

impl Default for Fragment {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
        }
    }
}

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
        }
    }

    pub fn disabled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: false,
        }
    }

    fn is_active(&self) -> bool {
        self.enabled && !self.text.is_empty()
    }
}

/// Inputs of the multi-text merge node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiMerge {
    pub fragments: [Fragment; MAX_FRAGMENTS],
    pub order: TextOrder,
    pub custom_order: String,
    pub separator: String,
    pub placement: SeparatorPlacement,
}

impl Default for MultiMerge {
    fn default() -> Self {
        Self {
            fragments: Default::default(),
            order: TextOrder::Sequential,
            custom_order: DEFAULT_CUSTOM_ORDER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            placement: SeparatorPlacement::BeforeBetweenAfter,
        }
    }
}

impl MultiMerge {
    /// Mutable access to a slot by its 1-based index
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Fragment> {
        index
            .checked_sub(1)
            .and_then(|i| self.fragments.get_mut(i))
    }

    /// Enabled, non-empty fragments in declaration order
    pub fn active(&self) -> Vec<ActiveFragment<'_>> {
        self.fragments
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_active())
            .map(|(i, f)| ActiveFragment {
                index: i + 1,
                text: &f.text,
            })
            .collect()
    }

    pub fn merge(&self) -> String {
        let active = self.active();
        let ordered = order_fragments(&active, self.order, &self.custom_order);
        tracing::debug!(
            active = active.len(),
            ordered = ordered.len(),
            placement = %self.placement,
            "merging fragments"
        );
        place_separators(&ordered, &self.separator, self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(texts: [(&str, bool); 5]) -> MultiMerge {
        let mut request = MultiMerge::default();
        for (slot, (text, enabled)) in request.fragments.iter_mut().zip(texts) {
            *slot = Fragment {
                text: text.to_string(),
                enabled,
            };
        }
        request
    }

    #[test]
    fn test_merge_two_reversed_between() {
        let merged = merge_two(
            Some("A"),
            Some("B"),
            TwoTextOrder::Text2ThenText1,
            ",",
            SeparatorPlacement::Between,
        );
        assert_eq!(merged, "B,A");
    }

    #[test]
    fn test_merge_two_missing_inputs_are_empty() {
        let merged = merge_two(
            None,
            Some("B"),
            TwoTextOrder::Text1ThenText2,
            ", ",
            SeparatorPlacement::Between,
        );
        assert_eq!(merged, ", B");

        let merged = merge_two(
            None,
            None,
            TwoTextOrder::Text1ThenText2,
            "|",
            SeparatorPlacement::BeforeBetweenAfter,
        );
        assert_eq!(merged, "|||");
    }

    #[test]
    fn test_active_skips_empty_and_disabled() {
        let request = multi([
            ("x", true),
            ("", true),
            ("z", true),
            ("w", false),
            ("", true),
        ]);
        let active = request.active();
        assert_eq!(
            active,
            vec![
                ActiveFragment { index: 1, text: "x" },
                ActiveFragment { index: 3, text: "z" },
            ]
        );
    }

    #[test]
    fn test_multi_sequential_between() {
        let mut request = multi([
            ("x", true),
            ("", true),
            ("z", true),
            ("w", false),
            ("", true),
        ]);
        request.separator = "+".to_string();
        request.placement = SeparatorPlacement::Between;
        assert_eq!(request.merge(), "x+z");
    }

    #[test]
    fn test_multi_custom_repeated_index() {
        let mut request = multi([("x", true), ("", true), ("", true), ("", true), ("", true)]);
        request.order = TextOrder::Custom;
        request.custom_order = "1,1".to_string();
        request.separator = "-".to_string();
        request.placement = SeparatorPlacement::Between;
        assert_eq!(request.merge(), "x-x");
    }

    #[test]
    fn test_multi_malformed_custom_order_is_sequential() {
        let mut request = multi([("a", true), ("b", true), ("c", true), ("", true), ("", true)]);
        request.order = TextOrder::Custom;
        request.custom_order = "1,a,3".to_string();
        request.placement = SeparatorPlacement::Between;
        assert_eq!(request.merge(), "a, b, c");
    }

    #[test]
    fn test_multi_defaults_wrap_with_separators() {
        let mut request = MultiMerge::default();
        request.slot_mut(2).unwrap().text = "only".to_string();
        assert_eq!(request.merge(), ", only, ");
    }

    #[test]
    fn test_multi_nothing_active_still_places_outer_separators() {
        let request = MultiMerge::default();
        assert_eq!(request.merge(), ", , ");
    }

    #[test]
    fn test_slot_mut_bounds() {
        let mut request = MultiMerge::default();
        assert!(request.slot_mut(0).is_none());
        assert!(request.slot_mut(6).is_none());
        assert!(request.slot_mut(5).is_some());
    }

    #[test]
    fn test_merge_is_repeatable() {
        let mut request = multi([("q", true), ("r", true), ("", false), ("s", true), ("", true)]);
        request.order = TextOrder::Custom;
        request.custom_order = "4,1,2".to_string();
        assert_eq!(request.merge(), request.merge());
        assert_eq!(request.merge(), ", s, q, r, ");
    }
}
