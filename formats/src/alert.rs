//! Broadcast alert messages, written by town officials and consumed by the
//! scrolling ticker.
//!

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One alert, as stored in the `alert` collection.  Only the most recent one
/// is normally displayed.
///
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMessage {
    /// Generated document id
    #[serde(default)]
    pub id: String,
    /// Broadcast text
    pub text: String,
    /// When the official sent it
    pub created_at: DateTime<Utc>,
}

impl AlertMessage {
    /// Fresh alert stamped now.
    ///
    pub fn new(text: &str) -> Self {
        AlertMessage {
            id: String::new(),
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_from_wire() {
        let data = r##"{"id":"a1","text":"土砂崩れに警戒してください","createdAt":"2024-06-30T12:00:00Z"}"##;
        let a: AlertMessage = serde_json::from_str(data).unwrap();
        assert_eq!("土砂崩れに警戒してください", a.text);
    }
}
