use crate::error::ApiError;

/// Longest accepted learner id.
const MAX_LEARNER_ID_LEN: usize = 64;

/// Validate a learner id from the request path.
///
/// Ids are short handles, not account names: non-empty, at most 64
/// characters, ASCII letters, digits, `_` and `-` only.
///
/// # Examples
/// ```
/// use tekrar_api::validation::validate_learner_id;
///
/// assert!(validate_learner_id("tuna-2013").is_ok());
/// assert!(validate_learner_id("no spaces allowed").is_err());
/// ```
pub fn validate_learner_id(id: &str) -> Result<(), ApiError> {
    if id.is_empty() {
        return Err(ApiError::Validation(
            "Learner id cannot be empty".to_string(),
        ));
    }

    if id.len() > MAX_LEARNER_ID_LEN {
        return Err(ApiError::Validation(format!(
            "Learner id is longer than {MAX_LEARNER_ID_LEN} characters"
        )));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ApiError::Validation(format!(
            "Invalid learner id: '{id}'. Use ASCII letters, digits, '_' or '-'"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_learner_id() {
        // Valid ids
        assert!(validate_learner_id("demo").is_ok());
        assert!(validate_learner_id("tuna-2013").is_ok());
        assert!(validate_learner_id("Ali_Veli").is_ok());
        assert!(validate_learner_id(&"a".repeat(64)).is_ok());

        // Invalid ids
        assert!(validate_learner_id("").is_err());
        assert!(validate_learner_id(&"a".repeat(65)).is_err());
        assert!(validate_learner_id("has space").is_err());
        assert!(validate_learner_id("türkçe-karakter").is_err());
        assert!(validate_learner_id("semi;colon").is_err());
    }
}
