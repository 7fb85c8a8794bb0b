//! JSON Schema for the Tessera configuration file.

use crate::config::TesseraConfig;

/// Identifier embedded in the generated schema.
pub const SCHEMA_ID: &str =
    "https://raw.githubusercontent.com/tessera-wm/tessera/main/tessera.schema.json";

/// Generates a JSON Schema for the Tessera configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(TesseraConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(SCHEMA_ID));
    }

    schema
}

/// Generates a pretty-printed JSON Schema string for the Tessera configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
