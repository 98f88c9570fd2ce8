//! Index persistence: a flat JSON artifact mapping term → sorted id list.
//!
//! Writes go through a temp file in the destination directory followed by a
//! rename, so an interrupted dump never leaves a half-written artifact at
//! the destination path.

use crate::index::InvertedIndex;
use crate::Error;
use std::path::Path;
use tracing::debug;

/// Serialize `index` to `path`, replacing any existing file there.
pub fn dump(index: &InvertedIndex, path: &Path) -> Result<(), Error> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer(&mut tmp, index).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.persist(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(terms = index.len(), path = %path.display(), "wrote index artifact");
    Ok(())
}

/// Deserialize the artifact at `path`.
///
/// Fails if the file is absent, unreadable, or not valid index data; there
/// is no partial-load fallback.
pub fn load(path: &Path) -> Result<InvertedIndex, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index: InvertedIndex =
        serde_json::from_str(&text).map_err(|source| Error::CorruptArtifact {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(terms = index.len(), path = %path.display(), "loaded index artifact");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::Analyzer;
    use std::collections::BTreeMap;

    fn sample_index() -> InvertedIndex {
        let docs: BTreeMap<u32, String> = [
            (0, "a cat sat".to_string()),
            (1, "a dog sat".to_string()),
            (2, "a cat ran".to_string()),
        ]
        .into_iter()
        .collect();
        InvertedIndex::build(&Analyzer::default(), &docs)
    }

    #[test]
    fn dump_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("inverted.index");

        let ix = sample_index();
        dump(&ix, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, ix);
    }

    #[test]
    fn artifact_is_a_flat_json_object() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("inverted.index");
        dump(&sample_index(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["cat"], serde_json::json!([0, 2]));
        assert_eq!(value["sat"], serde_json::json!([0, 1]));
    }

    #[test]
    fn dump_overwrites_existing_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("inverted.index");
        std::fs::write(&path, "stale bytes").unwrap();

        dump(&sample_index(), &path).unwrap();
        assert_eq!(load(&path).unwrap(), sample_index());
    }

    #[test]
    fn load_of_handwritten_artifact_works() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("inverted.index");
        std::fs::write(&path, r#"{"cat": [2, 0], "dog": [1]}"#).unwrap();

        let ix = load(&path).unwrap();
        let expected: std::collections::BTreeSet<u32> = [0, 2].into_iter().collect();
        assert_eq!(ix.postings("cat"), Some(&expected));
    }

    #[test]
    fn load_missing_artifact_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load(&dir.path().join("absent.index")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn load_foreign_bytes_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("inverted.index");
        std::fs::write(&path, "definitely not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, Error::CorruptArtifact { .. }));
    }

    #[test]
    fn dump_to_unwritable_path_fails() {
        let err = dump(&sample_index(), Path::new("/nonexistent/dir/inverted.index")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
