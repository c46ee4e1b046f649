//! Error handling for SketchDeck
//!
//! Provides the error types shared across the workspace:
//! - Designer errors (interaction core commands that were rejected)
//! - A unified `Error` that wraps every layer
//!
//! Interaction-core operations are total over well-formed input. A command that
//! cannot apply returns one of these errors and leaves the scene, selection and
//! history exactly as they were.

use thiserror::Error;

/// Designer error type
///
/// Returned by interaction-core commands that were refused. None of these are
/// fatal; the caller may ignore them.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// An element id does not exist in the scene or refers to a deleted element
    #[error("Element {id} does not exist or is deleted")]
    InvalidReference {
        /// The offending element id.
        id: u64,
    },

    /// A group id carried by some, but not all, of its expected members
    #[error("Group {group_id} has an inconsistent membership chain")]
    InconsistentGroupChain {
        /// The group id that was treated as dissolved.
        group_id: String,
    },

    /// The command needs more selected elements than are selected
    #[error("Command needs at least {required} selected elements, found {found}")]
    SelectionTooSmall {
        /// Minimum number of elements the command requires.
        required: usize,
        /// Number of elements currently selected.
        found: usize,
    },

    /// Nothing is selected
    #[error("Nothing is selected")]
    EmptySelection,

    /// The selected elements share no group that could be dissolved
    #[error("Selection is not grouped")]
    NotGrouped,

    /// A style patch could not be applied to an element's style
    #[error("Invalid style patch: {reason}")]
    InvalidStylePatch {
        /// Why the patched style was rejected.
        reason: String,
    },

    /// The clipboard did not contain a style payload
    #[error("Clipboard does not contain copied styles")]
    EmptyClipboard,

    /// Style (de)serialization failed
    #[error("Style serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Main error type for SketchDeck
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Interaction core error
    #[error(transparent)]
    Designer(#[from] DesignerError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an interaction core error
    pub fn is_designer_error(&self) -> bool {
        matches!(self, Error::Designer(_))
    }

    /// Check if this error reports a stale or deleted element id
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Error::Designer(DesignerError::InvalidReference { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
