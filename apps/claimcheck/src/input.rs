//! Loading claim batches from disk or stdin

use std::io::Read;
use std::path::{Path, PathBuf};

use shared_types::Claim;
use tracing::debug;

use crate::error::CliError;

/// Read a JSON array of `{ "id", "text" }` objects. A path of `-` reads stdin.
pub fn load_claims(path: &Path) -> Result<Vec<Claim>, CliError> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    let claims = parse_claims(&raw)?;
    debug!("Loaded {} claims from {}", claims.len(), path.display());
    Ok(claims)
}

pub fn parse_claims(raw: &str) -> Result<Vec<Claim>, CliError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_claims() {
        let claims =
            parse_claims(r#"[{"id": "1", "text": "Always works"}, {"id": "2", "text": ""}]"#)
                .unwrap();
        assert_eq!(
            claims,
            vec![Claim::new("1", "Always works"), Claim::new("2", "")]
        );
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_claims(r#"{"id": "1", "text": "x"}"#).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "a", "text": "Helps you sleep"}}]"#).unwrap();

        let claims = load_claims(file.path()).unwrap();
        assert_eq!(claims, vec![Claim::new("a", "Helps you sleep")]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_claims(Path::new("/nonexistent/claims.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/claims.json"));
    }
}
