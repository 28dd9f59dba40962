use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const MIN_AGE: u32 = 13;
pub const MAX_AGE: u32 = 100;
const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// Registration details collected before the questionnaire starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    /// Adolescents and adults only (13–100).
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserInfo {
    /// Trim names and check field constraints, returning the cleaned record.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.first_name = validate_name("first_name", &self.first_name)?;
        self.last_name = validate_name("last_name", &self.last_name)?;

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(CoreError::InvalidField {
                field: "age",
                reason: format!("{} is outside [{MIN_AGE}, {MAX_AGE}]", self.age),
            });
        }

        if let Some(email) = &self.email
            && !looks_like_email(email)
        {
            return Err(CoreError::InvalidField {
                field: "email",
                reason: format!("'{email}' is not a valid address"),
            });
        }

        Ok(self)
    }

    /// The slice of user details the evaluation engine reads.
    pub fn context(&self) -> UserContext {
        UserContext { age: self.age }
    }
}

/// User details passed alongside the answers to an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserContext {
    pub age: u32,
}

impl Default for UserContext {
    fn default() -> Self {
        Self { age: 18 }
    }
}

fn validate_name(field: &'static str, raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidField {
            field,
            reason: "cannot be empty".to_string(),
        });
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::InvalidField {
            field,
            reason: format!("longer than {MAX_NAME_LEN} characters"),
        });
    }
    Ok(trimmed.to_string())
}

/// `local@domain.tld` where each part is word characters, dots, or dashes.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is a valid regex")
});

fn looks_like_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
