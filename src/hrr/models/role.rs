use std::{fmt, str::FromStr};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleParseError {
    #[error("Unknown role: {0:?}")]
    Role(String),

    #[error("Unknown post type: {0:?}")]
    PostType(String),
}

/// Part a user plays in a single transaction
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Freelancer,
}

impl Role {
    pub fn counterpart(self) -> Self {
        return match self {
            Self::Client => Self::Freelancer,
            Self::Freelancer => Self::Client,
        };
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Client => write!(f, "client"),
            Self::Freelancer => write!(f, "freelancer"),
        };
    }
}

/// Case-insensitive, surrounding whitespace ignored
impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("client") {
            return Ok(Self::Client);
        }
        if trimmed.eq_ignore_ascii_case("freelancer") {
            return Ok(Self::Freelancer);
        }

        return Err(RoleParseError::Role(s.to_string()));
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        return s.parse().map_err(de::Error::custom);
    }
}

/// Who authored the listing a transaction came from.
///
/// A client post is a job request a freelancer applied to; a freelancer post is a service a
/// client purchased. Only used for display, never for deciding who is who.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Client,
    Freelancer,
}

impl PostType {
    pub fn label(&self) -> &'static str {
        return match self {
            Self::Client => "Client Request",
            Self::Freelancer => "Freelancer Service",
        };
    }
}

impl FromStr for PostType {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return match s.parse::<Role>() {
            Ok(Role::Client) => Ok(Self::Client),
            Ok(Role::Freelancer) => Ok(Self::Freelancer),
            Err(_) => Err(RoleParseError::PostType(s.to_string())),
        };
    }
}

impl<'de> Deserialize<'de> for PostType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        return s.parse().map_err(de::Error::custom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart() {
        assert_eq!(Role::Client.counterpart(), Role::Freelancer);
        assert_eq!(Role::Freelancer.counterpart(), Role::Client);
        assert_eq!(Role::Client.counterpart().counterpart(), Role::Client);
    }

    #[test]
    fn deserialize_any_case() {
        let roles: Vec<Role> = serde_json::from_str(r#"["client", "Freelancer", "CLIENT", "cLient"]"#).unwrap();

        assert_eq!(roles, vec![Role::Client, Role::Freelancer, Role::Client, Role::Client]);
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("cLient".parse::<Role>(), Ok(Role::Client));
        assert_eq!(" FreeLancer ".parse::<Role>(), Ok(Role::Freelancer));
        assert_eq!("cLient".parse::<PostType>(), Ok(PostType::Client));
        assert_eq!("fREELANCER".parse::<PostType>(), Ok(PostType::Freelancer));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "admin".parse::<Role>(),
            Err(RoleParseError::Role("admin".to_string()))
        );
        assert_eq!(
            "admin".parse::<PostType>(),
            Err(RoleParseError::PostType("admin".to_string()))
        );

        let err = serde_json::from_str::<PostType>(r#""clients""#).unwrap_err();
        assert!(err.to_string().contains("Unknown post type"));
    }

    #[test]
    fn serialize_lowercase() {
        let json = serde_json::to_string(&(Role::Freelancer, PostType::Client)).unwrap();

        assert_eq!(json, r#"["freelancer","client"]"#);
    }

    #[test]
    fn post_type_label() {
        assert_eq!(PostType::Client.label(), "Client Request");
        assert_eq!(PostType::Freelancer.label(), "Freelancer Service");
    }
}
