//! Parser for creator feed files.
//!
//! A feed is a JSON array of creator records. Larger listings may be split
//! into several `*.json` shards in one directory; the shards are parsed in
//! parallel and concatenated in file name order so the resulting list order
//! does not depend on thread scheduling.

use crate::error::{CatalogError, Result};
use crate::types::Creator;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a JSON document holding an array of creators.
///
/// `source` names the document in error messages.
pub fn parse_creators_str(json: &str, source: &str) -> Result<Vec<Creator>> {
    serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
        file: source.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a single feed file.
pub fn parse_creators(path: &Path) -> Result<Vec<Creator>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let json = fs::read_to_string(path)?;
    parse_creators_str(&json, &path.display().to_string())
}

/// List the `*.json` shards of a feed directory, sorted by file name.
fn shard_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Parse every shard in `dir` and concatenate them in file name order.
pub fn parse_creators_dir(dir: &Path) -> Result<Vec<Creator>> {
    let paths = shard_paths(dir)?;

    // Parse shards in parallel; collect keeps the input order
    let shards: Vec<Result<Vec<Creator>>> = paths
        .par_iter()
        .map(|path| parse_creators(path))
        .collect();

    let mut creators = Vec::new();
    for shard in shards {
        creators.extend(shard?);
    }
    Ok(creators)
}

/// Load a feed from either a single file or a directory of shards.
pub fn load_creators(path: &Path) -> Result<Vec<Creator>> {
    let creators = if path.is_dir() {
        parse_creators_dir(path)?
    } else {
        parse_creators(path)?
    };
    tracing::info!("Loaded {} creators from {}", creators.len(), path.display());
    Ok(creators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_creators_str() {
        let json = r#"[
            { "name": "One", "handle": "@one", "startingPrice": 100 },
            { "name": "Two", "handle": "@two", "startingPrice": 900, "attributes": ["AI"] }
        ]"#;

        let creators = parse_creators_str(json, "inline").unwrap();
        assert_eq!(creators.len(), 2);
        assert_eq!(creators[0].name, "One");
        assert_eq!(creators[1].attributes, vec!["AI"]);
    }

    #[test]
    fn test_parse_error_names_the_source() {
        let err = parse_creators_str(r#"[{ "name": 5 }]"#, "feed.json").unwrap_err();
        match err {
            CatalogError::ParseError { file, .. } => assert_eq!(file, "feed.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = parse_creators(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_shards_load_in_name_order() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"[{ "name": "Third", "startingPrice": 3 }]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("a.json"),
            r#"[{ "name": "First", "startingPrice": 1 }, { "name": "Second", "startingPrice": 2 }]"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let creators = load_creators(dir.path()).unwrap();
        let names: Vec<&str> = creators.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_bad_shard_fails_the_load() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("b.json"), "{").unwrap();

        assert!(load_creators(dir.path()).is_err());
    }
}
