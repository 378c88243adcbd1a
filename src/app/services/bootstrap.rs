//! One-shot fetch of the initial content document.

use std::fs;

use crate::app::domain::content::ContentDocument;
use crate::app::domain::settings::BootstrapSource;
use crate::app::infrastructure::error::{AppError, Result};

/// Fetch and parse the bootstrap content.
///
/// Errors are logged and returned; the caller decides on a fallback.
pub fn fetch_content(source: &BootstrapSource, timeout_secs: u64) -> Result<ContentDocument> {
    let result = match source {
        BootstrapSource::Url(url) => fetch_url(url, timeout_secs),
        BootstrapSource::File(path) => {
            fs::read_to_string(path)
                .map_err(AppError::from)
                .and_then(|json| parse_content(&json))
        }
    };
    if let Err(e) = &result {
        tracing::error!("Error loading bootstrap content: {}", e);
    }
    result
}

fn fetch_url(url: &str, timeout_secs: u64) -> Result<ContentDocument> {
    let response = minreq::get(url)
        .with_header("User-Agent", "Vitrina")
        .with_timeout(timeout_secs)
        .send()?;

    if !(200..300).contains(&response.status_code) {
        return Err(AppError::Bootstrap(format!(
            "Error al cargar contenido: {}",
            response.status_code
        )));
    }

    parse_content(response.as_str()?)
}

pub fn parse_content(json: &str) -> Result<ContentDocument> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_fetch_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"empresa": {"nombre": "Imprenta"}, "servicios": [{"titulo": "A", "descripcion": "d"}]}"#,
        )
        .unwrap();

        let content = fetch_content(&BootstrapSource::File(path), 5).unwrap();
        assert_eq!(content.empresa.unwrap().nombre, "Imprenta");
        assert_eq!(content.servicios.unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let source = BootstrapSource::File(PathBuf::from("/definitely/not/here/config.json"));
        let err = fetch_content(&source, 5).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{").unwrap();
        let err = fetch_content(&BootstrapSource::File(path), 5).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_unreachable_url_is_an_error() {
        let source = BootstrapSource::Url("http://127.0.0.1:1/config.json".to_string());
        assert!(fetch_content(&source, 1).is_err());
    }
}
