//! Records produced by the page extractor.
//!
//! Field order here is the key order of the written JSON. Optional attributes
//! that are absent on the element are left out of the JSON object, so an
//! absent attribute never reads the same as an empty one.

use serde::{Deserialize, Serialize};

/// Everything pulled out of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub headings: Vec<Heading>,
    pub buttons: Vec<Button>,
    pub inputs: Vec<Input>,
    pub carousels: Vec<Carousel>,
    pub selects: Vec<Select>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Lower-case tag name, `h1` through `h6`
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    /// Inner markup
    pub html: String,
}

/// A non-hidden `input` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    /// Inner markup
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_result_has_every_key() {
        let value = serde_json::to_value(ExtractionResult::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "",
                "headings": [],
                "buttons": [],
                "inputs": [],
                "carousels": [],
                "selects": []
            })
        );
    }

    #[test]
    fn absent_attributes_are_omitted_not_empty() {
        let input = Input {
            kind: None,
            name: Some("q".into()),
            value: Some(String::new()),
            placeholder: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({ "name": "q", "value": "" }));

        let back: Input = serde_json::from_value(value).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn input_kind_serializes_as_type() {
        let input = Input {
            kind: Some("email".into()),
            ..Input::default()
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"type":"email"}"#
        );
    }

    #[test]
    fn keys_follow_declaration_order() {
        let result = ExtractionResult {
            title: "t".into(),
            ..ExtractionResult::default()
        };
        let text = serde_json::to_string(&result).unwrap();
        assert_eq!(
            text,
            r#"{"title":"t","headings":[],"buttons":[],"inputs":[],"carousels":[],"selects":[]}"#
        );
    }
}
