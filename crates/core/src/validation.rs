//! Field validation for the "park an idea" form.
//!
//! Checks run in form order (title, email, description) and stop at the first
//! failure, so the visitor sees one message at a time.

use crate::error::CoreError;
use crate::identity::NormalizedEmail;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum idea title length in characters.
pub const MAX_TITLE_LENGTH: usize = 120;

/// Maximum idea description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

pub const TITLE_REQUIRED_MESSAGE: &str = "Give your idea a name at least, dude.";

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// A validated idea submission, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: Option<String>,
    pub email: NormalizedEmail,
}

/// Validate and normalize the raw form fields.
pub fn validate_idea_form(
    title: &str,
    description: Option<&str>,
    email: &str,
) -> Result<IdeaDraft, CoreError> {
    let title = validate_title(title)?;
    let email = NormalizedEmail::parse(email)?;
    let description = match description {
        Some(raw) => validate_description(raw)?,
        None => None,
    };

    Ok(IdeaDraft {
        title,
        description,
        email,
    })
}

/// Trim a title and check it is non-empty and within the length limit.
pub fn validate_title(raw: &str) -> Result<String, CoreError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CoreError::Validation(TITLE_REQUIRED_MESSAGE.to_string()));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters (got {len})"
        )));
    }
    Ok(title.to_string())
}

/// Trim a description; blank descriptions become `None`.
pub fn validate_description(raw: &str) -> Result<Option<String>, CoreError> {
    let description = raw.trim();
    if description.is_empty() {
        return Ok(None);
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters (got {len})"
        )));
    }
    Ok(Some(description.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
