use crate::ids::{PartyId, TransactionId};
use crate::models::{PostType, Role, TransactionRecord};
use crate::Result;

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use thiserror::Error;

/// A transaction or application as the backend sends it. Different endpoints spell the same
/// field differently, so every known spelling is accepted here and nowhere else.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawTransactionRecord {
    #[serde(
        default,
        alias = "transactionId",
        alias = "TransactionId",
        alias = "applicationId",
        alias = "ApplicationId"
    )]
    pub id: Option<u64>,

    #[serde(default, rename = "postType", alias = "PostType", alias = "post_type")]
    pub post_type: Option<PostType>,

    #[serde(
        default,
        rename = "clientId",
        alias = "ClientId",
        alias = "ClientID",
        alias = "client_id"
    )]
    pub client_id: Option<PartyId>,

    #[serde(
        default,
        rename = "clientName",
        alias = "ClientName",
        alias = "client_name"
    )]
    pub client_name: Option<String>,

    #[serde(
        default,
        rename = "freelancerId",
        alias = "FreelancerId",
        alias = "FreelancerID",
        alias = "freelancer_id"
    )]
    pub freelancer_id: Option<PartyId>,

    #[serde(
        default,
        rename = "freelancerName",
        alias = "FreelancerName",
        alias = "freelancer_name"
    )]
    pub freelancer_name: Option<String>,

    /// Service endpoints name the freelancer after the service owner. Joined payloads can
    /// carry both spellings, so these stay separate and only fill in what is missing.
    #[serde(default, rename = "ServiceOwnerId", alias = "serviceOwnerId")]
    pub service_owner_id: Option<PartyId>,

    #[serde(default, rename = "ServiceOwnerName", alias = "serviceOwnerName")]
    pub service_owner_name: Option<String>,

    #[serde(default, rename = "userRole", alias = "UserRole", alias = "user_role")]
    pub user_role: Option<Role>,
}

/// JSON payloads arrive either as a bare array or wrapped in an envelope. Elements are kept
/// as untyped values so one malformed record can't reject its neighbours.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawPayload {
    Array(Vec<Value>),
    Envelope {
        #[serde(alias = "data", alias = "transactions")]
        records: Vec<Value>,
    },
}

impl RawPayload {
    pub fn into_values(self) -> Vec<Value> {
        return match self {
            Self::Array(records) => records,
            Self::Envelope { records } => records,
        };
    }
}

/// Parses a JSON payload into raw records. Only a malformed payload fails as a whole; each
/// record that doesn't fit [`RawTransactionRecord`] fails on its own.
pub fn parse_json_records<R: Read>(reader: R) -> Result<Vec<Result<RawTransactionRecord>>> {
    let payload: RawPayload = serde_json::from_reader(reader)?;

    let records = payload
        .into_values()
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(anyhow::Error::from))
        .collect();

    return Ok(records);
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error normalizing record: missing {0}: {1:?}")]
    MissingField(&'static str, RawTransactionRecord),
}

impl RawTransactionRecord {
    pub fn normalize(self) -> Result<TransactionRecord> {
        let id = self
            .id
            .ok_or_else(|| InputParseError::MissingField("id", self.clone()))?;
        let post_type = self
            .post_type
            .ok_or_else(|| InputParseError::MissingField("postType", self.clone()))?;
        let client_id = self
            .client_id
            .clone()
            .ok_or_else(|| InputParseError::MissingField("clientId", self.clone()))?;
        let freelancer_id = self
            .freelancer_id
            .clone()
            .or_else(|| self.service_owner_id.clone())
            .ok_or_else(|| InputParseError::MissingField("freelancerId", self.clone()))?;

        let client_name = display_name(self.client_name, &client_id);
        let freelancer_name = display_name(
            self.freelancer_name
                .filter(|name| !name.trim().is_empty())
                .or(self.service_owner_name),
            &freelancer_id,
        );

        return Ok(TransactionRecord {
            id: TransactionId(id),
            post_type,
            client_id,
            client_name,
            freelancer_id,
            freelancer_name,
            user_role: self.user_role,
        });
    }
}

fn display_name(name: Option<String>, id: &PartyId) -> String {
    return match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => format!("User {id}"),
    };
}
