//! Rules for a record's mutable fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{FieldViolation, ValidationFailure};
use crate::clock::Clock;

pub const MSG_ARTIST_REQUIRED: &str = "artist is required.";
pub const MSG_TITLE_REQUIRED: &str = "title is required.";
pub const MSG_GENRE_REQUIRED: &str = "genre is required.";
pub const MSG_STYLE_REQUIRED: &str = "style is required.";
pub const MSG_YEAR_REQUIRED: &str = "release year is required.";
pub const MSG_YEAR_NOT_INTEGER: &str = "release year must be an integer";
pub const MSG_YEAR_NOT_FOUR_DIGITS: &str = "release year must be a 4-digit number";
pub const MSG_YEAR_IN_FUTURE: &str = "release year must not be in the future";

const MIN_YEAR: i64 = 1000;
const MAX_YEAR: i64 = 9999;

/// Record fields as they arrive on the wire.
///
/// Missing or `null` strings decode as empty and are then reported by the
/// rules. `release_year` is kept as raw JSON so a non-integer value is
/// reported instead of being rejected by the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub style: String,
    #[serde(default)]
    pub release_year: Option<Value>,
}

impl RecordInput {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        style: impl Into<String>,
        release_year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            style: style.into(),
            release_year: Some(Value::from(release_year)),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Record fields that passed every rule, in storage shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecord {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub style: String,
    pub release_year: i32,
}

/// Check every field of `input`, reporting all violations together.
///
/// Fields are checked in the order artist, title, genre, style, release year.
/// Within a field only the first failing rule is reported.
pub fn validate_record(
    input: &RecordInput,
    clock: &dyn Clock,
) -> Result<ValidRecord, ValidationFailure> {
    let mut violations = Vec::new();

    for (field, value, message) in [
        ("artist", &input.artist, MSG_ARTIST_REQUIRED),
        ("title", &input.title, MSG_TITLE_REQUIRED),
        ("genre", &input.genre, MSG_GENRE_REQUIRED),
        ("style", &input.style, MSG_STYLE_REQUIRED),
    ] {
        if value.is_empty() {
            violations.push(FieldViolation {
                field,
                message: message.to_string(),
            });
        }
    }

    let year = match check_release_year(input.release_year.as_ref(), clock.current_year()) {
        Ok(year) => Some(year),
        Err(message) => {
            violations.push(FieldViolation {
                field: "release_year",
                message: message.to_string(),
            });
            None
        }
    };

    match year {
        Some(release_year) if violations.is_empty() => Ok(ValidRecord {
            title: input.title.clone(),
            artist: input.artist.clone(),
            genre: input.genre.clone(),
            style: input.style.clone(),
            release_year,
        }),
        _ => Err(ValidationFailure { violations }),
    }
}

fn check_release_year(value: Option<&Value>, current_year: i32) -> Result<i32, &'static str> {
    let value = match value {
        None | Some(Value::Null) => return Err(MSG_YEAR_REQUIRED),
        Some(v) => v,
    };

    let year = match value {
        Value::Number(n) if n.is_i64() => n.as_i64().unwrap_or_default(),
        // Integers beyond i64 are still integers, just not years.
        Value::Number(n) if n.is_u64() => return Err(MSG_YEAR_NOT_FOUR_DIGITS),
        _ => return Err(MSG_YEAR_NOT_INTEGER),
    };

    if year == 0 {
        return Err(MSG_YEAR_REQUIRED);
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(MSG_YEAR_NOT_FOUR_DIGITS);
    }
    if year > i64::from(current_year) {
        return Err(MSG_YEAR_IN_FUTURE);
    }

    // In range 1000..=9999, so the narrowing cannot fail.
    i32::try_from(year).map_err(|_| MSG_YEAR_NOT_FOUR_DIGITS)
}
