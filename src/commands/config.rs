//! Show or persist client settings.

use crate::error::{AppError, Result};
use crate::storage;

/// Apply the requested changes, if any, and print the effective settings.
pub fn run(server: Option<String>, timeout_secs: Option<u64>) -> Result<()> {
    let mut settings = storage::settings::get_settings();
    let mut dirty = false;

    if let Some(url) = server {
        settings.server_url = validate_server_url(&url)?;
        dirty = true;
    }
    if let Some(secs) = timeout_secs {
        if secs == 0 {
            return Err(AppError::Validation(
                "El tiempo de espera debe ser mayor que cero.".into(),
            ));
        }
        settings.timeout_secs = secs;
        dirty = true;
    }

    if dirty {
        storage::settings::save_settings(&settings)?;
    }

    println!("Servidor: {}", settings.server_url);
    println!("Tiempo de espera: {} s", settings.timeout_secs);
    Ok(())
}

fn validate_server_url(url: &str) -> Result<String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(AppError::Validation(format!(
            "URL de servidor no válida: {}",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert_eq!(
            validate_server_url("http://host:5000").unwrap(),
            "http://host:5000"
        );
        assert_eq!(
            validate_server_url("https://host/").unwrap(),
            "https://host"
        );
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        assert!(matches!(
            validate_server_url("ftp://host"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_server_url("host:5000"),
            Err(AppError::Validation(_))
        ));
    }
}
