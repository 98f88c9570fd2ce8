//! Tagged-document corpus loading.
//!
//! Input format: one document per line, `<id>\t<text>`, UTF-8. Lines that do
//! not fit the format are skipped, not reported; the format is best-effort
//! line-oriented and a stray header or comment must not abort a build.

use crate::Error;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Load a document file into an id → text map.
///
/// Per line:
/// - surrounding whitespace is trimmed; empty lines are skipped
/// - the whole line is lowercased before parsing, so document text is
///   lowercase by the time it reaches the analyzer
/// - the line splits on the first tab into id and text; a missing tab or a
///   non-numeric id means the line is skipped (skip-and-continue policy)
/// - a duplicate id overwrites the earlier text (last write wins)
///
/// A missing or unreadable file is a fatal error.
pub fn load_documents(path: &Path) -> Result<BTreeMap<u32, String>, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut docs = BTreeMap::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line = line.to_lowercase();
        match parse_line(&line) {
            Some((doc_id, content)) => {
                docs.insert(doc_id, content.to_string());
            }
            None => skipped += 1,
        }
    }

    debug!(docs = docs.len(), skipped, path = %path.display(), "loaded corpus");
    Ok(docs)
}

fn parse_line(line: &str) -> Option<(u32, &str)> {
    let (id_part, content) = line.split_once('\t')?;
    let doc_id: u32 = id_part.parse().ok()?;
    Some((doc_id, content))
}
