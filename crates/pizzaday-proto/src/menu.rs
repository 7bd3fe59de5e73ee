use serde::{Deserialize, Serialize};

/// POST `/manager/menu` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// POST `/manager/menu` response: either a success `message` or an
/// `error`, never meaningfully both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MenuFeedback {
    /// Feedback line to show the operator: the success message when
    /// non-empty, otherwise the error.
    pub fn text(&self) -> &str {
        match (&self.message, &self.error) {
            (Some(msg), _) if !msg.is_empty() => msg,
            (_, Some(err)) => err,
            _ => "",
        }
    }
}
