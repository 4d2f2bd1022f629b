//! Shared attribute groups and global tag classifications.
//!
//! [XHTML 1.0 § A.1](https://www.w3.org/TR/xhtml1/#dtds) factors common
//! attribute collections into DTD parameter entities (`%coreattrs;`,
//! `%i18n;`, `%events;`, ...). These tables mirror that factoring so the
//! variant tables in [`crate::registry`] stay readable.

/// Tags that participate in form submission.
///
/// Each variant's `forms` set is its tag set intersected with this list.
pub const FORM_TAGS: &[&str] = &["form", "input", "select", "textarea"];

/// Tags serialized in self-closing form (`<br/>`).
///
/// Handing one of these a block of child content is a validation error.
/// Each variant's `self_closing` set is its tag set intersected with
/// this list.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "base", "meta", "link", "hr", "br", "param", "img", "area", "input", "col", "frame",
];

/// `%coreattrs;` — id, class, style, title.
pub const ATTR_CORE: &[&str] = &["id", "class", "style", "title"];

/// `%i18n;` — lang, xml:lang, dir.
pub const ATTR_I18N: &[&str] = &["lang", "xml:lang", "dir"];

/// `%events;` — the intrinsic event handler attributes.
pub const ATTR_EVENTS: &[&str] = &[
    "onclick",
    "ondblclick",
    "onmousedown",
    "onmouseup",
    "onmouseover",
    "onmousemove",
    "onmouseout",
    "onkeypress",
    "onkeydown",
    "onkeyup",
];

/// `%focus;` — accesskey, tabindex, onfocus, onblur.
pub const ATTR_FOCUS: &[&str] = &["accesskey", "tabindex", "onfocus", "onblur"];

/// `%cellhalign;` — horizontal alignment for table cells.
pub const ATTR_HALIGN: &[&str] = &["align", "char", "charoff"];

/// `%cellvalign;` — vertical alignment for table cells.
pub const ATTR_VALIGN: &[&str] = &["valign"];
