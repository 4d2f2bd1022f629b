//! Validation errors raised during markup construction.

use thiserror::Error;

/// A tag invocation that would produce invalid markup.
///
/// Raised synchronously by the dispatcher while auto validation is
/// enabled. Fatal to the invocation that triggered it; output already
/// emitted for sibling calls is untouched. Disabling auto validation on
/// the builder suppresses these checks entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMarkupError {
    /// A self-closing element was handed a block of child content.
    #[error("the `{tag}` element is self-closing, please remove the block")]
    SelfClosingBlock {
        /// The offending tag name.
        tag: String,
    },
    /// An attribute outside the active schema's whitelist for this tag.
    #[error("no attribute `{attribute}` on `{tag}` elements")]
    UnknownAttribute {
        /// The element being built.
        tag: String,
        /// The rejected attribute name.
        attribute: String,
    },
}

/// Result alias for builder operations.
pub type Result<T> = std::result::Result<T, InvalidMarkupError>;
