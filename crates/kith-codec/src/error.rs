//! Error type for encode and decode.

use kith_graph::PersonId;

/// Errors produced by the graph codec.
///
/// All failures are reported to the caller before any result is handed out;
/// a failed [`decode`](crate::decode) never yields a partially wired graph.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// Encode was pointed at an id its graph never issued.
    #[error("root person {0} is not in the graph")]
    MissingRoot(PersonId),

    /// The input is not valid JSON, or lacks `objects`/`root_id`.
    #[error("malformed blob: {0}")]
    MalformedBlob(#[from] serde_json::Error),

    /// An entry lists a friend id with no entry of its own.
    #[error("entry {holder:?} references {reference:?}, which is not in the objects table")]
    DanglingFriend {
        /// Key of the entry holding the broken reference.
        holder: String,
        /// The friend id that has no entry.
        reference: String,
    },

    /// The designated root id has no entry in the table.
    #[error("root id {0:?} is not in the objects table")]
    DanglingRoot(String),
}
