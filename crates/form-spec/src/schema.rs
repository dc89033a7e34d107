use schemars::schema_for;
use serde_json::Value;

use crate::spec::form::Form;

/// JSON Schema for the form document accepted by the outliner.
pub fn generate() -> Value {
    serde_json::to_value(schema_for!(Form)).unwrap_or(Value::Null)
}
