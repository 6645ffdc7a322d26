use hrr::{PartyId, Result};

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Current user id must be a positive integer, got: {0}")]
    InvalidUserId(String),
}

pub struct InputArgs {
    pub input_path: PathBuf,
    pub current_user_id: PartyId,
}

/// Parses the input arguments: a valid filepath followed by the current user's id
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let filename = args
        .next()
        .ok_or_else(|| InputArgsError::Parse("First argument must be the input file.".to_string()))?;

    let user = args
        .next()
        .ok_or_else(|| InputArgsError::Parse("Second argument must be the current user id.".to_string()))?;

    let input_path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    let current_user_id = parse_user_id(&user)?;

    return Ok(InputArgs {
        input_path,
        current_user_id,
    });
}

fn parse_user_id(user: &str) -> Result<PartyId> {
    let id: i64 = user
        .trim()
        .parse()
        .with_context(|| InputArgsError::InvalidUserId(user.to_string()))?;

    if id <= 0 {
        Err(InputArgsError::InvalidUserId(user.to_string()))?
    }

    return Ok(PartyId::Number(id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_id_accepts_positive() {
        assert_eq!(parse_user_id(" 42 ").unwrap(), PartyId::Number(42));
    }

    #[test]
    fn parse_user_id_rejects_others() {
        assert!(parse_user_id("0").is_err());
        assert!(parse_user_id("-4").is_err());
        assert!(parse_user_id("bob").is_err());
    }
}
