use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

/// Identifier of a user taking part in a transaction.
///
/// Backend payloads mix numeric and string-encoded identifiers for the same party, so both
/// encodings are kept as they arrived. Use [`PartyId::matches`] to compare two identifiers
/// the way the resolver does; the derived `PartialEq` is structural.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartyId {
    Number(i64),
    Text(String),
}

impl PartyId {
    /// Integer value of the identifier, if it has one
    pub fn as_number(&self) -> Option<i64> {
        return match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        };
    }

    /// Numeric equality first, falling back to equality of the displayed forms
    pub fn matches(&self, other: &PartyId) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            if a == b {
                return true;
            }
        }

        return self.to_string() == other.to_string();
    }

    pub fn is_positive(&self) -> bool {
        return self.as_number().map_or(false, |n| n > 0);
    }
}

impl From<&str> for PartyId {
    fn from(s: &str) -> Self {
        return Self::Text(s.to_string());
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        };
    }
}

impl Serialize for PartyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return match self {
            Self::Number(n) => serializer.serialize_i64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        };
    }
}

struct PartyIdVisitor;

impl<'de> Visitor<'de> for PartyIdVisitor {
    type Value = PartyId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return f.write_str("an integer or a string identifier");
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PartyId, E> {
        return Ok(PartyId::Number(v));
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PartyId, E> {
        let n = i64::try_from(v)
            .map_err(|_| E::custom(format!("party id out of range: {v}")))?;

        return Ok(PartyId::Number(n));
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PartyId, E> {
        return Ok(PartyId::Text(v.to_string()));
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<PartyId, E> {
        return Ok(PartyId::Text(v));
    }
}

impl<'de> Deserialize<'de> for PartyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        return deserializer.deserialize_any(PartyIdVisitor);
    }
}
