//! Request and response data types and their parsing implementations.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use validator::ValidateEmail;

/// The `source` recorded for subscription requests that don't carry one.
pub const DEFAULT_SOURCE: &str = "website";

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable Subscriber
/// A Subscriber that can be Deserialized but can have invalid fields.
#[derive(Deserialize, Debug)]
pub struct DeserSubscriber {
    pub email: String,
    pub favorite_team: Option<String>,
    pub source: Option<String>,
}

/// Validated Subscriber
/// A Subscriber with the email validated and the source defaulted.
/// Immutable once parsed.
#[derive(Debug, Clone)]
pub struct ValidSubscriber {
    pub email: ValidEmail,
    pub favorite_team: Option<String>,
    pub source: String,
}

/// Validated Email
#[derive(Debug, Clone)]
pub struct ValidEmail(String);

/// One scoreboard entry as served by `/api/matches`.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub id: &'static str,
    pub competition: &'static str,
    pub stage: &'static str,
    pub home_team: &'static str,
    pub away_team: &'static str,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
    pub minute: Option<u32>,
    pub start_time: &'static str,
}

/// Match lifecycle states as shown on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    Live,
    Ft,
    Ht,
    Ns,
}

// ###################################
// ->   IMPLS
// ###################################
impl TryFrom<DeserSubscriber> for ValidSubscriber {
    type Error = DataParsingError;

    fn try_from(deser_sub: DeserSubscriber) -> Result<Self, Self::Error> {
        Ok(ValidSubscriber {
            email: ValidEmail::parse(deser_sub.email)?,
            favorite_team: deser_sub.favorite_team,
            source: deser_sub
                .source
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        })
    }
}

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.graphemes(true).count() > 256 {
            return Err(DataParsingError::EmailTooLong);
        }

        if value.validate_email() {
            Ok(ValidEmail(value.to_owned()))
        } else {
            Err(DataParsingError::EmailInvalid)
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, Serialize)]
pub enum DataParsingError {
    EmailInvalid,
    EmailTooLong,
}
// Error Boilerplate
impl core::fmt::Display for DataParsingError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for DataParsingError {}
