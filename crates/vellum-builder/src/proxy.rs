//! Selector-style attribute proxy.
//!
//! A zero-argument, no-block tag invocation emits nothing; it hands back
//! a [`CssProxy`] bound to the session and the tag name. The proxy
//! collects `class`/`id`/arbitrary attributes through chained calls and
//! defers all writing to its terminal call, which re-enters the guarded
//! emission path.

use crate::attrs::AttrList;
use crate::builder::{Builder, ChildFn, TagArgs};
use crate::error::Result;

/// A pending element: tag name plus attributes accumulated so far.
///
/// Nothing is written until one of [`empty`](Self::empty),
/// [`text`](Self::text), or [`build`](Self::build) consumes the proxy.
#[derive(Debug)]
pub struct CssProxy<'a> {
    builder: &'a mut Builder,
    tag: String,
    attrs: AttrList,
}

impl<'a> CssProxy<'a> {
    pub(crate) fn new(builder: &'a mut Builder, tag: &str) -> Self {
        Self {
            builder,
            tag: tag.to_string(),
            attrs: AttrList::new(),
        }
    }

    /// Add a class; repeated calls accumulate space-separated.
    #[must_use]
    pub fn class(mut self, name: &str) -> Self {
        self.attrs.append_word("class", name);
        self
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, value: &str) -> Self {
        self.attrs.set("id", value);
        self
    }

    /// Set an arbitrary attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Emit the element with no content (`<div class="c"/>`).
    ///
    /// # Errors
    ///
    /// Validation failures per [`crate::InvalidMarkupError`].
    pub fn empty(self) -> Result<()> {
        let Self {
            builder,
            tag,
            attrs,
        } = self;
        builder.emit_tag(&tag, TagArgs::attrs(attrs), None::<ChildFn>)
    }

    /// Emit the element with escaped text content.
    ///
    /// # Errors
    ///
    /// Validation failures per [`crate::InvalidMarkupError`].
    pub fn text(self, content: &str) -> Result<()> {
        let Self {
            builder,
            tag,
            attrs,
        } = self;
        builder.emit_tag(&tag, TagArgs::text_and_attrs(content, attrs), None::<ChildFn>)
    }

    /// Emit the element with a child block. Subject to the same
    /// self-closing guard as direct dispatch.
    ///
    /// # Errors
    ///
    /// Validation failures per [`crate::InvalidMarkupError`]; errors
    /// from the block propagate unchanged.
    pub fn build<F>(self, block: F) -> Result<()>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        let Self {
            builder,
            tag,
            attrs,
        } = self;
        builder.emit_tag(&tag, TagArgs::attrs(attrs), Some(block))
    }
}
