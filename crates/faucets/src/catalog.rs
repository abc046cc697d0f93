use crate::prelude::{eprintln, *};
use faucets_core::catalog::Catalog;
use std::path::Path;

/// Load the catalog selected by the global options.
pub fn load(global: &crate::Global) -> Result<Catalog> {
    let catalog = load_from(global.catalog.as_deref())?;

    if global.verbose {
        match &global.catalog {
            Some(path) => eprintln!("Loaded {} faucets from {}", catalog.len(), path.display()),
            None => eprintln!("Loaded {} built-in faucets", catalog.len()),
        }
    }

    Ok(catalog)
}

/// Read a catalog file, or fall back to the built-in catalog when `path` is `None`.
pub fn load_from(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Catalog::builtin().context("Built-in catalog is invalid");
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let catalog = Catalog::from_json(&json).map_err(|source| Error::InvalidCatalog {
        path: path.display().to_string(),
        source,
    })?;

    if catalog.is_empty() {
        log::warn!("Catalog {} contains no faucets", path.display());
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_builtin() {
        let catalog = load_from(None).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_catalog(
            r#"[{"id": 7, "name": "Local", "chain": "Ethereum", "testnet": "Sepolia",
                 "asset": "ETH", "type": "community", "url": "https://local.example"}]"#,
        );

        let catalog = load_from(Some(file.path())).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().name, "Local");
    }

    #[test]
    fn test_load_duplicate_ids_fails() {
        let file = write_catalog(
            r#"[{"id": 1, "type": "official", "url": "https://a.example"},
                {"id": 1, "type": "official", "url": "https://b.example"}]"#,
        );

        let err = load_from(Some(file.path())).unwrap_err();

        assert!(err.to_string().contains("Duplicate faucet id 1"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_from(Some(&path)).unwrap_err();

        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
