//! Catalog loaded from a JSON or TOML file on disk.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};

use scaffbom_core::{
    application::{ApplicationError, ports::CatalogSource},
    domain::Catalog,
    error::BomResult,
};

use super::CatalogFormat;

/// File-backed catalog source.
///
/// A missing file is not fatal: it loads as an empty catalog and every
/// designation resolves to `""`. A file that exists but cannot be read or
/// parsed is an error.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    format: Option<CatalogFormat>,
}

impl FileCatalogSource {
    /// Source whose format is picked from the file extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    /// Force a format regardless of extension.
    pub fn with_format(mut self, format: CatalogFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<CatalogFormat, ApplicationError> {
        match self.format {
            Some(format) => Ok(format),
            None => CatalogFormat::from_path(&self.path),
        }
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> BomResult<Catalog> {
        let format = self.format()?;

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Catalog file not found, designations will be empty");
                return Ok(Catalog::empty());
            }
            Err(e) => {
                return Err(ApplicationError::CatalogUnavailable {
                    source_name: self.describe(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        let catalog = format.parse(&text, &self.describe())?;
        debug!(%format, entries = catalog.len(), "Catalog file parsed");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use scaffbom_core::{domain::RefCode, error::BomError};
    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_file() {
        let file = write_temp(".json", r#"{"ALTASV5": "Socle à vérin"}"#);
        let catalog = FileCatalogSource::new(file.path()).load().unwrap();

        assert_eq!(catalog.lookup(RefCode::Altasv5), "Socle à vérin");
    }

    #[test]
    fn loads_toml_file() {
        let file = write_temp(".toml", "ALTKDV5 = \"Diagonale\"\n");
        let catalog = FileCatalogSource::new(file.path()).load().unwrap();

        assert_eq!(catalog.lookup(RefCode::Altkdv5), "Diagonale");
    }

    #[test]
    fn forced_format_ignores_extension() {
        let file = write_temp(".txt", r#"{"ALTKDV5": "Diagonale"}"#);
        let catalog = FileCatalogSource::new(file.path())
            .with_format(CatalogFormat::Json)
            .load()
            .unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_file_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let catalog = FileCatalogSource::new(dir.path().join("absent.json"))
            .load()
            .unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_temp(".json", "{ not json");
        let err = FileCatalogSource::new(file.path()).load().unwrap_err();

        assert!(matches!(
            err,
            BomError::Application(ApplicationError::CatalogMalformed { .. })
        ));
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let err = FileCatalogSource::new("refs.yaml").load().unwrap_err();
        assert!(matches!(
            err,
            BomError::Application(ApplicationError::UnsupportedCatalogFormat { .. })
        ));
    }
}
