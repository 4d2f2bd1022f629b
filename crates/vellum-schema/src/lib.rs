//! Tag and attribute schemas for the Vellum markup builder.
//!
//! This crate holds the per-variant schema model: for each supported
//! document variant (XHTML 1.0 Strict, Transitional, Frameset, and HTML5)
//! an immutable [`TagSet`] maps every allowed tag to its attribute
//! whitelist and carries the variant's document-level metadata (DOCTYPE,
//! XML-instruction policy, root element attributes).
//!
//! # Design
//!
//! The four variants are not defined independently. Strict is a literal
//! table; the others are composed from it by merging tags in, appending
//! attributes to existing tags, and (for HTML5) deleting obsolete tags —
//! mirroring how the [XHTML 1.0 DTDs](https://www.w3.org/TR/xhtml1/#dtds)
//! and the [HTML5 differences note](https://www.w3.org/TR/html5-diff/)
//! relate to one another. All four instances are built once behind a
//! `LazyLock` and shared read-only thereafter; see [`resolve`].

/// Shared attribute groups and global tag classifications.
pub mod attr_groups;
/// Variant selection and the composed schema registry.
pub mod registry;
/// The immutable per-variant schema type.
pub mod tagset;

pub use registry::{Variant, resolve};
pub use tagset::{Doctype, TagSet, TagTable};
