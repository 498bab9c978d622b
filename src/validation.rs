//! Form checks run before any request is sent.

use crate::constants::DATABASE_FILE_EXTENSION;
use crate::error::GatewayError;

fn invalid(msg: &str) -> GatewayError {
    GatewayError::Validation(msg.to_string())
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), GatewayError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(invalid("Please enter both username and password"));
    }
    Ok(())
}

pub fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<(), GatewayError> {
    validate_credentials(username, password)?;
    if password != confirm {
        return Err(invalid("Passwords do not match"));
    }
    Ok(())
}

pub fn validate_database_name(name: &str) -> Result<(), GatewayError> {
    if name.trim().is_empty() {
        return Err(invalid("Please enter a database name"));
    }
    Ok(())
}

/// `file_name` is `None` when no file was picked.
pub fn validate_upload(file_name: Option<&str>) -> Result<(), GatewayError> {
    match file_name {
        None => Err(invalid("Please select a file")),
        Some(name) if !name.ends_with(DATABASE_FILE_EXTENSION) => {
            Err(invalid("Only .db files are allowed"))
        }
        Some(_) => Ok(()),
    }
}

pub fn validate_question(question: &str) -> Result<(), GatewayError> {
    if question.trim().is_empty() {
        return Err(invalid("Please enter a question"));
    }
    Ok(())
}
