use std::fmt;
use serde::{Serialize, Deserialize, Deserializer};

/// Opaque identifier assigned by the server.
///
/// The collection service may hand out ids as JSON strings or integers;
/// both decode to the same textual form and are always written back as
/// strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(v) => ContactId(v),
            RawId::Number(v) => ContactId(v.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id")]
    id      : ContactId,
    #[serde(rename = "name")]
    name    : String,
    #[serde(rename = "number")]
    number  : String,
}

impl Contact {
    pub fn new(id: ContactId, name: &str, number: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// A copy of this contact carrying a different number.
    pub fn with_number(&self, number: &str) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            number: number.to_string(),
        }
    }

    pub(crate) fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub(crate) fn name_contains(&self, lowercase_pattern: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_pattern)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.number)
    }
}

/// Body of a create request; the server assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewContact {
    #[serde(rename = "name")]
    name    : String,
    #[serde(rename = "number")]
    number  : String,
}

impl NewContact {
    pub fn new(name: &str, number: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}
