// Merge Text and Merge Text Multi nodes

use super::NodeOutput;
use crate::error::TextToolsError;
use crate::merge::{merge_two, Fragment, MultiMerge, TwoTextOrder, DEFAULT_CUSTOM_ORDER, DEFAULT_SEPARATOR};
use crate::ordering::TextOrder;
use crate::placement::SeparatorPlacement;
use serde::{Deserialize, Deserializer};

fn default_two_order() -> String {
    TwoTextOrder::Text1ThenText2.label().to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_two_placement() -> String {
    SeparatorPlacement::None.label().to_string()
}

fn default_text_order() -> String {
    TextOrder::Sequential.label().to_string()
}

fn default_custom_order() -> String {
    DEFAULT_CUSTOM_ORDER.to_string()
}

fn default_multi_placement() -> String {
    SeparatorPlacement::BeforeBetweenAfter.label().to_string()
}

fn enabled() -> bool {
    true
}

/// An unconnected slot arrives as `null`; treat it like an empty text
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeTextInputs {
    #[serde(default)]
    pub text1: Option<String>,
    #[serde(default)]
    pub text2: Option<String>,
    #[serde(default = "default_two_order")]
    pub order: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_two_placement")]
    pub insert_separator: String,
}

impl MergeTextInputs {
    pub fn run(&self) -> Result<NodeOutput, TextToolsError> {
        let order: TwoTextOrder = self.order.parse()?;
        let placement = SeparatorPlacement::from_label_lossy(&self.insert_separator);
        Ok(NodeOutput::value(merge_two(
            self.text1.as_deref(),
            self.text2.as_deref(),
            order,
            &self.separator,
            placement,
        )))
    }
}

/// Enable flags arrive as `enable_N`, or under the host's decorated
/// widget names
#[derive(Debug, Clone, Deserialize)]
pub struct MergeTextMultiInputs {
    #[serde(default = "default_text_order")]
    pub text_order: String,
    #[serde(default = "default_custom_order")]
    pub custom_order: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_multi_placement")]
    pub insert_separator: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text_1: String,
    #[serde(default = "enabled", alias = "⬆️_enable_1")]
    pub enable_1: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text_2: String,
    #[serde(default = "enabled", alias = "⬆️_enable_2")]
    pub enable_2: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text_3: String,
    #[serde(default = "enabled", alias = "⬆️_enable_3")]
    pub enable_3: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text_4: String,
    #[serde(default = "enabled", alias = "⬆️_enable_4")]
    pub enable_4: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text_5: String,
    #[serde(default = "enabled", alias = "⬆️_enable_5")]
    pub enable_5: bool,
}

impl MergeTextMultiInputs {
    pub fn to_request(&self) -> Result<MultiMerge, TextToolsError> {
        let slot = |text: &str, enabled: bool| Fragment {
            text: text.to_string(),
            enabled,
        };

        Ok(MultiMerge {
            fragments: [
                slot(&self.text_1, self.enable_1),
                slot(&self.text_2, self.enable_2),
                slot(&self.text_3, self.enable_3),
                slot(&self.text_4, self.enable_4),
                slot(&self.text_5, self.enable_5),
            ],
            order: self.text_order.parse()?,
            custom_order: self.custom_order.clone(),
            separator: self.separator.clone(),
            placement: SeparatorPlacement::from_label_lossy(&self.insert_separator),
        })
    }

    pub fn run(&self) -> Result<NodeOutput, TextToolsError> {
        Ok(NodeOutput::value(self.to_request()?.merge()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_text_from_host_inputs() {
        let inputs: MergeTextInputs = serde_json::from_value(json!({
            "text1": "A",
            "text2": "B",
            "order": "Text2 + Text1",
            "separator": ",",
            "insert_separator": "Between"
        }))
        .unwrap();
        assert_eq!(inputs.run().unwrap().text(), Some("B,A"));
    }

    #[test]
    fn test_merge_text_null_input_is_empty() {
        let inputs: MergeTextInputs = serde_json::from_value(json!({
            "text1": null,
            "text2": "B",
            "insert_separator": "Before and Between"
        }))
        .unwrap();
        assert_eq!(inputs.run().unwrap().text(), Some(", , B"));
    }

    #[test]
    fn test_merge_text_unknown_placement_is_none() {
        let inputs: MergeTextInputs = serde_json::from_value(json!({
            "text1": "A",
            "text2": "B",
            "insert_separator": "Around"
        }))
        .unwrap();
        assert_eq!(inputs.run().unwrap().text(), Some("AB"));
    }

    #[test]
    fn test_merge_text_unknown_order_is_error() {
        let inputs: MergeTextInputs =
            serde_json::from_value(json!({"order": "Text3 + Text1"})).unwrap();
        assert!(inputs.run().is_err());
    }

    #[test]
    fn test_multi_null_slots_are_empty() {
        let inputs: MergeTextMultiInputs = serde_json::from_value(json!({
            "text_1": "a",
            "text_2": "b",
            "text_3": null,
            "text_4": null,
            "text_5": null,
            "separator": "-",
            "insert_separator": "Between"
        }))
        .unwrap();
        assert_eq!(inputs.text_3, "");
        assert_eq!(inputs.run().unwrap().text(), Some("a-b"));
    }

    #[test]
    fn test_multi_defaults() {
        let inputs: MergeTextMultiInputs = serde_json::from_value(json!({
            "text_1": "red",
            "text_2": "green"
        }))
        .unwrap();
        assert_eq!(inputs.run().unwrap().text(), Some(", red, green, "));
    }

    #[test]
    fn test_multi_accepts_decorated_enable_names() {
        let inputs: MergeTextMultiInputs = serde_json::from_value(json!({
            "text_1": "x",
            "text_2": "y",
            "⬆️_enable_2": false,
            "insert_separator": "Between"
        }))
        .unwrap();
        assert!(!inputs.enable_2);
        assert_eq!(inputs.run().unwrap().text(), Some("x"));
    }

    #[test]
    fn test_multi_custom_order() {
        let inputs: MergeTextMultiInputs = serde_json::from_value(json!({
            "text_order": "Custom",
            "custom_order": "3,1",
            "separator": " | ",
            "insert_separator": "Between",
            "text_1": "one",
            "text_2": "two",
            "text_3": "three"
        }))
        .unwrap();
        assert_eq!(inputs.run().unwrap().text(), Some("three | one"));
    }
}
