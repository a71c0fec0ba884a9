use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single to-do or done item.
///
/// The identifier is minted by the server on creation and serialized as
/// `_id`, matching the document-store field name clients already use.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
}

impl Task {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
