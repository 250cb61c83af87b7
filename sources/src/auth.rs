use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Describe the possible ways to authenticate against the store endpoint.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Auth {
    /// Nothing special, no auth
    #[default]
    Anon,
    /// Using an API key supplied through a header
    Key { api_key: String },
}

impl Display for Auth {
    /// Obfuscate the key
    ///
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let auth = match self {
            Auth::Key { .. } => Auth::Key {
                api_key: "HIDDEN".to_string(),
            },
            Auth::Anon => Auth::Anon,
        };
        write!(f, "{:?}", auth)
    }
}
