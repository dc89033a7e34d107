use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::control::Control;

/// Top-level form definition as exported by the form designer.
///
/// `name`, `version`, `rules`, and `pages` are required; a document missing
/// any of them fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub name: String,
    pub version: String,
    pub rules: Vec<Rule>,
    pub pages: Vec<Page>,
}

/// A named visibility rule defined inside the document.
///
/// Pages, sections, and controls reference rules by `definition_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub name: String,
    pub definition_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_rule_id: Option<String>,
    pub sections: Vec<Section>,
}

/// A section holds direct rows plus repeatable groups of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_rule_id: Option<String>,
    pub rows: Vec<Row>,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub controls: Vec<Control>,
}

/// A repeatable collection of rows, same shape as a section's direct rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub rows: Vec<Row>,
}
