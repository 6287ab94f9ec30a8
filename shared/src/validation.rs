use validator::ValidationError;

pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if nickname.trim().is_empty() {
        return Err(ValidationError::new("nickname_required"));
    }
    Ok(())
}

pub fn validate_config_id(config_id: &str) -> Result<(), ValidationError> {
    if config_id.trim().is_empty() {
        return Err(ValidationError::new("config_missing"));
    }
    Ok(())
}

pub fn validate_activity_name(activity_name: &str) -> Result<(), ValidationError> {
    if activity_name.trim().is_empty() {
        return Err(ValidationError::new("activity_name_required"));
    }
    Ok(())
}

/// Empty input is accepted: blank prize rows are dropped when the form is saved.
pub fn validate_probability(probability: &str) -> Result<(), ValidationError> {
    let probability = probability.trim();
    if probability.is_empty() {
        return Ok(());
    }
    match probability.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("invalid_probability")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_nickname_rejected() {
        assert!(validate_nickname("   ").is_err());
        assert!(validate_nickname(" 小明 ").is_ok());
    }

    #[test]
    fn test_probability_rules() {
        assert!(validate_probability("").is_ok());
        assert!(validate_probability("12.5").is_ok());
        assert!(validate_probability("0").is_ok());
        assert!(validate_probability("-1").is_err());
        assert!(validate_probability("abc").is_err());
        assert!(validate_probability("NaN").is_err());
    }
}
