use serde::Serialize;

/// Where the rendering surface should place a field's error message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDisplay {
    /// Message on its own line under the field (default).
    #[default]
    Below,
    /// Message next to the field.
    Inline,
    /// No message; the field is only highlighted.
    None,
}
