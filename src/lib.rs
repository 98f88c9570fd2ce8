//! `docdex`: inverted indexes over tagged document corpora.
//!
//! The pipeline is deliberately small and linear:
//! - `corpus` loads a line-oriented `<id>\t<text>` file into an id → text map.
//! - `analyze` turns document text into index terms (word-splitting + stop words).
//! - `index` builds the term → posting-set mapping and answers AND queries.
//! - `store` persists the mapping as a flat JSON artifact and loads it back.
//!
//! Scope:
//! - In-memory indexes, built once per invocation
//! - Existence-only postings (no positions, no frequencies)
//! - Deterministic artifacts (sorted terms, sorted id lists)
//!
//! Non-goals:
//! - Ranking or scoring of results (queries are pure set intersection)
//! - Incremental index updates
//! - Any persistence format beyond the single flat term → ids mapping

pub mod analyze;
pub mod corpus;
pub mod index;
pub mod store;

pub use error::Error;

mod error {
    use std::path::PathBuf;

    /// Errors surfaced by corpus loading and index persistence.
    ///
    /// Per-line corpus problems are not errors: malformed lines are skipped
    /// by policy. Only structural failures (unreadable files, corrupt
    /// artifacts) reach this enum.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// A document file or index artifact could not be read or written.
        #[error("{}: {}", path.display(), source)]
        Io {
            /// Path of the file involved.
            path: PathBuf,
            /// Underlying I/O error.
            #[source]
            source: std::io::Error,
        },
        /// An index could not be encoded for persistence.
        #[error("{}: failed to encode index artifact: {}", path.display(), source)]
        Encode {
            /// Destination path of the artifact.
            path: PathBuf,
            /// Underlying encode error.
            #[source]
            source: serde_json::Error,
        },
        /// An index artifact exists but is not valid serialized index data.
        #[error("{}: invalid index artifact: {}", path.display(), source)]
        CorruptArtifact {
            /// Path of the artifact.
            path: PathBuf,
            /// Underlying decode error.
            #[source]
            source: serde_json::Error,
        },
    }
}
