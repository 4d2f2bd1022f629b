//! Dispatching markup builder for the Vellum document DSL.
//!
//! # Scope
//!
//! This crate implements:
//! - **Builder session** — per-document state: output stream, active
//!   variant schema, validation and meta-tag flags, session-level
//!   defaults for DOCTYPE, XML instruction, and root attributes
//! - **Tag dispatch** — the three-way branch behind every tag call:
//!   validation error, selector proxy, or element emission
//! - **Document composition** — the four variant entry points and the
//!   shared root/head stitching (doctype, XML instruction, comments,
//!   automatic `meta` tag)
//! - **Emission primitives** — append-only serialized writes with
//!   text/attribute escaping
//!
//! Schemas come from [`vellum_schema`]; see that crate for how the four
//! variants are composed.
//!
//! # Example
//!
//! ```
//! use vellum_builder::{Builder, attrs};
//!
//! let mut b = Builder::new();
//! b.xhtml_strict(attrs![], &[], |b| {
//!     b.head(|b| b.text_element("title", "hello"))?;
//!     b.element("body", attrs![], |b| b.text_element("p", "hi"))
//! })?;
//! assert!(b.as_str().contains("<p>hi</p>"));
//! # Ok::<(), vellum_builder::InvalidMarkupError>(())
//! ```

/// Insertion-ordered attribute lists and the [`attrs!`] macro.
pub mod attrs;
/// The builder session, dispatcher, and document composition.
pub mod builder;
/// Validation errors.
pub mod error;
/// The selector-style attribute proxy.
pub mod proxy;
/// Low-level emission primitives.
mod writer;

pub use vellum_schema::{Doctype, TagSet, Variant};

pub use attrs::AttrList;
pub use builder::{Builder, ChildFn, TagArgs, TagResult};
pub use error::{InvalidMarkupError, Result};
pub use proxy::CssProxy;
