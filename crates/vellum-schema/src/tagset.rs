//! The immutable per-variant schema type.
//!
//! A [`TagSet`] is the complete schema for one document variant: the
//! tag → attribute-whitelist table, three sets derived from it, and the
//! variant's document-level metadata. Instances are constructed once by
//! [`crate::registry`] and never mutated afterwards.

use std::collections::{HashMap, HashSet};

use crate::attr_groups::{FORM_TAGS, SELF_CLOSING_TAGS};

/// Attribute table: tag name → allowed attribute names.
///
/// Attribute lists may contain duplicates (composition appends, it never
/// deduplicates). Only membership is meaningful; never rely on order or
/// arity.
pub type TagTable = HashMap<&'static str, Vec<&'static str>>;

/// DOCTYPE policy for a document variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Doctype {
    /// Emit no DOCTYPE declaration.
    None,
    /// Emit `<!DOCTYPE html PUBLIC "public-id" "system-id">`.
    Public {
        /// Formal public identifier, e.g. `-//W3C//DTD XHTML 1.0 Strict//EN`.
        public_id: &'static str,
        /// System identifier: the DTD URL.
        system_id: &'static str,
    },
}

/// The schema for one document variant.
///
/// `tags`, `forms`, and `self_closing` are always derived from the
/// table's keys at construction; they are never set independently.
#[derive(Debug, Clone)]
pub struct TagSet {
    tagset: TagTable,
    tags: HashSet<&'static str>,
    forms: HashSet<&'static str>,
    self_closing: HashSet<&'static str>,
    doctype: Option<Doctype>,
    output_xml_instruction: Option<bool>,
    root_attributes: Option<&'static [(&'static str, &'static str)]>,
}

impl TagSet {
    /// Build a schema from a finished attribute table plus the variant's
    /// document metadata, deriving the tag classification sets.
    ///
    /// A `None` metadata field means "inherit the builder session's
    /// default" rather than "absent".
    #[must_use]
    pub fn new(
        tagset: TagTable,
        doctype: Option<Doctype>,
        output_xml_instruction: Option<bool>,
        root_attributes: Option<&'static [(&'static str, &'static str)]>,
    ) -> Self {
        let tags: HashSet<&'static str> = tagset.keys().copied().collect();
        let forms = tags
            .iter()
            .copied()
            .filter(|t| FORM_TAGS.contains(t))
            .collect();
        let self_closing = tags
            .iter()
            .copied()
            .filter(|t| SELF_CLOSING_TAGS.contains(t))
            .collect();
        Self {
            tagset,
            tags,
            forms,
            self_closing,
            doctype,
            output_xml_instruction,
            root_attributes,
        }
    }

    /// Whether `tag` is part of this variant at all.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether `tag` is serialized self-closing in this variant.
    #[must_use]
    pub fn is_self_closing(&self, tag: &str) -> bool {
        self.self_closing.contains(tag)
    }

    /// Whether `tag` participates in form submission in this variant.
    #[must_use]
    pub fn is_form_tag(&self, tag: &str) -> bool {
        self.forms.contains(tag)
    }

    /// The attribute whitelist for `tag`, or `None` for an unknown tag.
    ///
    /// The returned slice may contain duplicates; treat it as a set.
    #[must_use]
    pub fn allowed_attributes(&self, tag: &str) -> Option<&[&'static str]> {
        self.tagset.get(tag).map(Vec::as_slice)
    }

    /// Whether `attribute` is allowed on `tag`. `false` for unknown tags.
    #[must_use]
    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.tagset
            .get(tag)
            .is_some_and(|attrs| attrs.contains(&attribute))
    }

    /// All tags of this variant.
    #[must_use]
    pub fn tags(&self) -> &HashSet<&'static str> {
        &self.tags
    }

    /// The variant's form tags.
    #[must_use]
    pub fn forms(&self) -> &HashSet<&'static str> {
        &self.forms
    }

    /// The variant's self-closing tags.
    #[must_use]
    pub fn self_closing(&self) -> &HashSet<&'static str> {
        &self.self_closing
    }

    /// The variant's DOCTYPE, or `None` to inherit the session default.
    #[must_use]
    pub fn doctype(&self) -> Option<Doctype> {
        self.doctype
    }

    /// Whether the variant wants a leading `<?xml ...?>` instruction, or
    /// `None` to inherit the session default.
    #[must_use]
    pub fn output_xml_instruction(&self) -> Option<bool> {
        self.output_xml_instruction
    }

    /// Attributes always merged onto the root `<html>` element, or
    /// `None` to inherit the session default.
    #[must_use]
    pub fn root_attributes(&self) -> Option<&'static [(&'static str, &'static str)]> {
        self.root_attributes
    }
}
