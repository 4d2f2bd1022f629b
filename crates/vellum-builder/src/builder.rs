//! The builder session and its tag dispatcher.
//!
//! A [`Builder`] is one document-construction session: it owns the
//! output string, the active variant's schema, and the session-level
//! defaults that variant metadata can fall back to. Every tag call is a
//! plain synchronous function invocation; nested blocks are evaluated
//! immediately in the same call stack with the same session, so children
//! recursively re-enter the dispatcher.

use vellum_schema::{Doctype, TagSet, Variant, resolve};

use crate::attrs::AttrList;
use crate::error::{InvalidMarkupError, Result};
use crate::proxy::CssProxy;
use crate::writer;

/// Plain-function child block, used to spell `None` at no-block call
/// sites (`None::<ChildFn>`).
pub type ChildFn = fn(&mut Builder) -> Result<()>;

/// Arguments to a tag invocation: optional text content plus attributes.
#[derive(Debug, Clone, Default)]
pub struct TagArgs {
    text: Option<String>,
    attrs: AttrList,
}

impl TagArgs {
    /// No text, no attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: None,
            attrs: AttrList::new(),
        }
    }

    /// Text content only.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            attrs: AttrList::new(),
        }
    }

    /// Attributes only.
    #[must_use]
    pub const fn attrs(attrs: AttrList) -> Self {
        Self { text: None, attrs }
    }

    /// Text content plus attributes.
    #[must_use]
    pub fn text_and_attrs(content: impl Into<String>, attrs: AttrList) -> Self {
        Self {
            text: Some(content.into()),
            attrs,
        }
    }

    /// Whether the invocation carried no arguments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.attrs.is_empty()
    }
}

/// What a tag invocation produced.
#[must_use]
pub enum TagResult<'a> {
    /// The element was written to the output.
    Emitted,
    /// Nothing was written; the returned proxy collects selector-style
    /// attributes and emits on its terminal call.
    Selector(CssProxy<'a>),
}

/// A document-construction session.
///
/// Defaults: XHTML 1.0 Transitional schema, auto validation on, meta tag
/// emission on, XML instruction on, no session DOCTYPE, and root
/// attributes `xmlns="http://www.w3.org/1999/xhtml" lang="en"`.
#[derive(Debug)]
pub struct Builder {
    out: String,
    variant: Variant,
    tagset: &'static TagSet,
    auto_validation: bool,
    output_meta_tag: bool,
    output_xml_instruction: bool,
    doctype: Doctype,
    root_attributes: AttrList,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Create a session with the defaults above.
    #[must_use]
    pub fn new() -> Self {
        let mut root_attributes = AttrList::new();
        root_attributes.set("xmlns", "http://www.w3.org/1999/xhtml");
        root_attributes.set("lang", "en");
        Self {
            out: String::new(),
            variant: Variant::XhtmlTransitional,
            tagset: resolve(Variant::XhtmlTransitional),
            auto_validation: true,
            output_meta_tag: true,
            output_xml_instruction: true,
            doctype: Doctype::None,
            root_attributes,
        }
    }

    /// Toggle validation (self-closing/block conflicts and attribute
    /// whitelists). With validation off the conflicts are silently
    /// permitted.
    #[must_use]
    pub const fn with_auto_validation(mut self, enabled: bool) -> Self {
        self.auto_validation = enabled;
        self
    }

    /// Toggle the automatic `meta` tag inside [`Builder::head`].
    #[must_use]
    pub const fn with_output_meta_tag(mut self, enabled: bool) -> Self {
        self.output_meta_tag = enabled;
        self
    }

    /// Session-level default for the leading XML instruction, used when
    /// the active variant leaves the choice open.
    #[must_use]
    pub const fn with_output_xml_instruction(mut self, enabled: bool) -> Self {
        self.output_xml_instruction = enabled;
        self
    }

    /// Session-level default DOCTYPE, used when the active variant
    /// leaves it open. [`Doctype::None`] emits no DOCTYPE line.
    #[must_use]
    pub const fn with_doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    /// Session-level default root `<html>` attributes, used when the
    /// active variant leaves them open.
    #[must_use]
    pub fn with_root_attributes(mut self, attrs: AttrList) -> Self {
        self.root_attributes = attrs;
        self
    }

    /// The active document variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The active schema.
    #[must_use]
    pub const fn tagset(&self) -> &'static TagSet {
        self.tagset
    }

    /// The output accumulated so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the session and return the output.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Switch the session to `variant`, selecting its schema for all
    /// subsequent dispatch decisions.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.tagset = resolve(variant);
    }

    /// The dispatcher: every tag call resolves through here.
    ///
    /// Three-way branch:
    /// 1. self-closing tag + block while validating →
    ///    [`InvalidMarkupError::SelfClosingBlock`];
    /// 2. no arguments and no block → [`TagResult::Selector`], nothing
    ///    emitted yet;
    /// 3. otherwise the element is emitted, the block (if any) evaluated
    ///    with the same session as its children.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`]; errors from the
    /// block propagate unchanged.
    pub fn invoke_tag<F>(
        &mut self,
        name: &str,
        args: TagArgs,
        block: Option<F>,
    ) -> Result<TagResult<'_>>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if args.is_empty() && block.is_none() {
            return Ok(TagResult::Selector(CssProxy::new(self, name)));
        }
        self.emit_tag(name, args, block)?;
        Ok(TagResult::Emitted)
    }

    /// Emit one element. Shared by the dispatcher and the proxy's
    /// terminal calls, so the self-closing guard holds on both paths.
    pub(crate) fn emit_tag<F>(&mut self, name: &str, args: TagArgs, block: Option<F>) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.auto_validation && self.tagset.is_self_closing(name) && block.is_some() {
            return Err(InvalidMarkupError::SelfClosingBlock {
                tag: name.to_string(),
            });
        }
        self.check_attributes(name, &args.attrs)?;

        let TagArgs { text, attrs } = args;
        match (text, block) {
            (None, None) => writer::self_closed_tag(&mut self.out, name, &attrs),
            (Some(content), None) => {
                writer::open_tag(&mut self.out, name, &attrs);
                writer::text(&mut self.out, &content);
                writer::close_tag(&mut self.out, name);
            }
            (text, Some(block)) => {
                writer::open_tag(&mut self.out, name, &attrs);
                if let Some(content) = text {
                    writer::text(&mut self.out, &content);
                }
                block(self)?;
                writer::close_tag(&mut self.out, name);
            }
        }
        Ok(())
    }

    /// Emit an element with attributes and a child block.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`].
    pub fn element<F>(&mut self, name: &str, attrs: AttrList, block: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let _ = self.invoke_tag(name, TagArgs::attrs(attrs), Some(block))?;
        Ok(())
    }

    /// Emit an element with escaped text content.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`].
    pub fn text_element(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
        let _ = self.invoke_tag(name, TagArgs::text(content), None::<ChildFn>)?;
        Ok(())
    }

    /// Emit a contentless element (`<br/>`), attributes allowed.
    ///
    /// Unlike a bare zero-argument invocation this never returns a
    /// proxy; it writes the element immediately.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`].
    pub fn leaf(&mut self, name: &str, attrs: AttrList) -> Result<()> {
        self.emit_tag(name, TagArgs::attrs(attrs), None::<ChildFn>)
    }

    /// A selector proxy for `name`; equivalent to a zero-argument,
    /// no-block [`Builder::invoke_tag`].
    #[must_use]
    pub fn selector(&mut self, name: &str) -> CssProxy<'_> {
        CssProxy::new(self, name)
    }

    /// Append escaped character data.
    pub fn text(&mut self, content: &str) {
        writer::text(&mut self.out, content);
    }

    /// Build a `head` element.
    ///
    /// When meta tag emission is on, exactly one `meta` precedes the
    /// block's content: `charset="utf-8"` under HTML5, the
    /// `Content-Type` http-equiv form under the XHTML variants. The
    /// ordering is fixed.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`]; errors from the
    /// block propagate unchanged.
    pub fn head<F>(&mut self, block: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let emit_meta = self.output_meta_tag;
        let html5 = self.variant == Variant::Html5;
        self.emit_tag(
            "head",
            TagArgs::new(),
            Some(|b: &mut Self| {
                if emit_meta {
                    if html5 {
                        let mut meta = AttrList::new();
                        meta.set("charset", "utf-8");
                        b.leaf("meta", meta)?;
                    } else {
                        let mut meta = AttrList::new();
                        meta.set("http-equiv", "Content-Type");
                        meta.set("content", "text/html; charset=utf-8");
                        b.leaf("meta", meta)?;
                    }
                }
                block(b)
            }),
        )
    }

    /// Build an XHTML 1.0 Strict document.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`]; errors from the
    /// block propagate unchanged.
    pub fn xhtml_strict<F>(&mut self, attrs: AttrList, comments: &[&str], block: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.set_variant(Variant::XhtmlStrict);
        self.document(attrs, comments, block)
    }

    /// Build an XHTML 1.0 Transitional document.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`]; errors from the
    /// block propagate unchanged.
    pub fn xhtml_transitional<F>(
        &mut self,
        attrs: AttrList,
        comments: &[&str],
        block: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.set_variant(Variant::XhtmlTransitional);
        self.document(attrs, comments, block)
    }

    /// Build an XHTML 1.0 Frameset document.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`]; errors from the
    /// block propagate unchanged.
    pub fn xhtml_frameset<F>(&mut self, attrs: AttrList, comments: &[&str], block: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.set_variant(Variant::XhtmlFrameset);
        self.document(attrs, comments, block)
    }

    /// Build an HTML5 document.
    ///
    /// # Errors
    ///
    /// Validation failures per [`InvalidMarkupError`]; errors from the
    /// block propagate unchanged.
    pub fn html_five<F>(&mut self, attrs: AttrList, comments: &[&str], block: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.set_variant(Variant::Html5);
        self.document(attrs, comments, block)
    }

    /// Shared document-root composition behind the four entry points.
    ///
    /// Ordering: XML instruction, DOCTYPE, one comment per entry of
    /// `comments`, then the root `<html>` element with the resolved root
    /// attributes merged under the caller's (caller wins collisions).
    fn document<F>(&mut self, attrs: AttrList, comments: &[&str], block: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if resolve_default(
            self.tagset.output_xml_instruction(),
            self.output_xml_instruction,
        ) {
            writer::xml_instruction(&mut self.out);
        }
        match resolve_default(self.tagset.doctype(), self.doctype) {
            Doctype::None => {}
            Doctype::Public {
                public_id,
                system_id,
            } => writer::doctype_public(&mut self.out, public_id, system_id),
        }
        let mut root = self
            .tagset
            .root_attributes()
            .map_or_else(|| self.root_attributes.clone(), AttrList::from_pairs);
        root.merge(attrs);
        for content in comments {
            writer::comment(&mut self.out, content);
        }
        self.emit_tag("html", TagArgs::attrs(root), Some(block))
    }

    /// Whitelist check for a known tag; unknown tags pass through
    /// unchecked, as with the raw emission primitive.
    fn check_attributes(&self, tag: &str, attrs: &AttrList) -> Result<()> {
        if !self.auto_validation || !self.tagset.contains(tag) {
            return Ok(());
        }
        for (name, _) in attrs.iter() {
            if !self.tagset.allows_attribute(tag, name) {
                return Err(InvalidMarkupError::UnknownAttribute {
                    tag: tag.to_string(),
                    attribute: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Uniform variant-over-session resolution for document metadata.
fn resolve_default<T>(variant_value: Option<T>, session_default: T) -> T {
    variant_value.unwrap_or(session_default)
}
