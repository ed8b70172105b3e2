//! Access gate: one-shot sign-in submission and the persisted flag.
//!
//! The gate posts `{name, email}` to the configured webhook. Any 2xx
//! response passes; everything else collapses to one generic retryable
//! error. On success the caller persists the sign-in flag, which is set
//! once and never cleared by the application.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::config::GateConfig;
use crate::error::{Error, Result};
use crate::storage::Storage;

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Serialize)]
struct SignInRequest {
    name: String,
    email: String,
}

/// Whether the gate has been passed
pub fn is_signed_in(storage: &Storage) -> bool {
    storage.read_flag(&storage.signin_file())
}

/// Persist the sign-in flag
pub fn complete(storage: &Storage) -> Result<()> {
    storage.write_flag(&storage.signin_file())
}

/// Error unless the gate has been passed
pub fn ensure_signed_in(storage: &Storage) -> Result<()> {
    if is_signed_in(storage) {
        Ok(())
    } else {
        Err(Error::SignInRequired)
    }
}

/// Submit the sign-in form.
///
/// Both fields must be non-empty after trimming; no format checking
/// beyond that. Network errors and non-2xx statuses all surface as the
/// same retryable [`Error::GateRejected`].
pub fn submit(config: &GateConfig, name: &str, email: &str) -> Result<()> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(Error::InvalidArgument(
            "name and email are required".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(SUBMIT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new());

    let request = SignInRequest {
        name: name.to_string(),
        email: email.to_string(),
    };

    let response = client
        .post(&config.webhook_url)
        .json(&request)
        .send()
        .map_err(|err| {
            tracing::debug!(error = %err, "sign-in submission failed");
            Error::GateRejected
        })?;

    if !response.status().is_success() {
        tracing::debug!(status = %response.status(), "sign-in submission rejected");
        return Err(Error::GateRejected);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn submit_requires_both_fields() {
        let config = GateConfig::default();
        assert!(matches!(
            submit(&config, "  ", "a@b.c"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            submit(&config, "Alice", ""),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn flag_lifecycle() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        assert!(!is_signed_in(&storage));
        assert!(matches!(
            ensure_signed_in(&storage),
            Err(Error::SignInRequired)
        ));

        complete(&storage).unwrap();
        assert!(is_signed_in(&storage));
        assert!(ensure_signed_in(&storage).is_ok());
    }
}
