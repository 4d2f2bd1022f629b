//! Variant selection and the composed schema registry.
//!
//! Strict is the only variant defined as a literal table. Transitional
//! layers extra tags and attributes onto a copy of it, Frameset adds the
//! two frame tags onto Transitional, and HTML5 starts from Transitional,
//! adds the new semantic tags, deletes the obsolete ones listed in the
//! [HTML5 differences note](https://www.w3.org/TR/html5-diff/), and
//! appends the HTML5-only attributes last.
//!
//! The whole registry is built on first access and immutable afterwards,
//! so [`resolve`] is a pure lookup that can be shared across threads.

use std::sync::LazyLock;

use strum_macros::{Display, EnumIter, EnumString};

use crate::attr_groups::{
    ATTR_CORE, ATTR_EVENTS, ATTR_FOCUS, ATTR_HALIGN, ATTR_I18N, ATTR_VALIGN,
};
use crate::tagset::{Doctype, TagSet, TagTable};

/// Document variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Variant {
    /// XHTML 1.0 Strict.
    XhtmlStrict,
    /// XHTML 1.0 Transitional.
    XhtmlTransitional,
    /// XHTML 1.0 Frameset.
    XhtmlFrameset,
    /// HTML5.
    Html5,
}

/// The four schema instances, built once.
struct Registry {
    strict: TagSet,
    transitional: TagSet,
    frameset: TagSet,
    html5: TagSet,
}

static HTML5_ROOT_ATTRIBUTES: [(&str, &str); 1] = [("lang", "en")];

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let strict = strict_table();

    let mut transitional = strict.clone();
    extend_transitional(&mut transitional);

    let mut frameset = transitional.clone();
    extend_frameset(&mut frameset);

    let mut html5 = transitional.clone();
    extend_html5(&mut html5);

    Registry {
        strict: TagSet::new(
            strict,
            Some(Doctype::Public {
                public_id: "-//W3C//DTD XHTML 1.0 Strict//EN",
                system_id: "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd",
            }),
            None,
            None,
        ),
        transitional: TagSet::new(
            transitional,
            Some(Doctype::Public {
                public_id: "-//W3C//DTD XHTML 1.0 Transitional//EN",
                system_id: "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd",
            }),
            None,
            None,
        ),
        frameset: TagSet::new(
            frameset,
            Some(Doctype::Public {
                public_id: "-//W3C//DTD XHTML 1.0 Frameset//EN",
                system_id: "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd",
            }),
            None,
            None,
        ),
        // HTML5 inherits the session doctype and never wants the XML
        // instruction. The root lang attribute will move behind i18n
        // configuration eventually.
        html5: TagSet::new(html5, None, Some(false), Some(&HTML5_ROOT_ATTRIBUTES)),
    }
});

/// Resolve the schema for `variant`.
///
/// Pure lookup; never fails for the four defined variants. The registry
/// is built lazily on first call, guarded against concurrent
/// double-initialization by `LazyLock`.
#[must_use]
pub fn resolve(variant: Variant) -> &'static TagSet {
    match variant {
        Variant::XhtmlStrict => &REGISTRY.strict,
        Variant::XhtmlTransitional => &REGISTRY.transitional,
        Variant::XhtmlFrameset => &REGISTRY.frameset,
        Variant::Html5 => &REGISTRY.html5,
    }
}

/// Concatenate attribute groups plus tag-specific extras into one list.
fn grouped(groups: &[&[&'static str]], extra: &[&'static str]) -> Vec<&'static str> {
    let mut attrs = Vec::new();
    for group in groups {
        attrs.extend_from_slice(group);
    }
    attrs.extend_from_slice(extra);
    attrs
}

/// `%attrs;` — core + i18n + events, plus tag-specific extras.
fn common(extra: &[&'static str]) -> Vec<&'static str> {
    grouped(&[ATTR_CORE, ATTR_I18N, ATTR_EVENTS], extra)
}

/// Append attributes to a tag that must already be present.
///
/// The addition lists are static configuration; a missing target tag is
/// a schema defect, not a runtime condition.
fn append_attrs(table: &mut TagTable, tag: &'static str, extra: &[&'static str]) {
    let Some(attrs) = table.get_mut(tag) else {
        panic!("schema defect: attribute additions target unknown tag `{tag}`");
    };
    attrs.extend_from_slice(extra);
}

/// All tags and attributes from XHTML 1.0 Strict.
fn strict_table() -> TagTable {
    let mut t = TagTable::new();
    let _ = t.insert("html", grouped(&[ATTR_I18N], &["id", "xmlns"]));
    let _ = t.insert("head", grouped(&[ATTR_I18N], &["id", "profile"]));
    let _ = t.insert("title", grouped(&[ATTR_I18N], &["id"]));
    let _ = t.insert("base", vec!["href", "id"]);
    let _ = t.insert(
        "meta",
        grouped(
            &[ATTR_I18N],
            &["id", "http", "name", "content", "scheme", "http-equiv"],
        ),
    );
    let _ = t.insert(
        "link",
        common(&["charset", "href", "hreflang", "type", "rel", "rev", "media"]),
    );
    let _ = t.insert(
        "style",
        grouped(&[ATTR_I18N], &["id", "type", "media", "title", "xml:space"]),
    );
    let _ = t.insert(
        "script",
        vec!["id", "charset", "type", "src", "defer", "xml:space"],
    );
    let _ = t.insert("noscript", common(&[]));
    let _ = t.insert("body", common(&["onload", "onunload"]));
    let _ = t.insert("div", common(&[]));
    let _ = t.insert("p", common(&[]));
    let _ = t.insert("ul", common(&[]));
    let _ = t.insert("ol", common(&[]));
    let _ = t.insert("li", common(&[]));
    let _ = t.insert("dl", common(&[]));
    let _ = t.insert("dt", common(&[]));
    let _ = t.insert("dd", common(&[]));
    let _ = t.insert("address", common(&[]));
    let _ = t.insert("hr", common(&[]));
    let _ = t.insert("pre", common(&["xml:space"]));
    let _ = t.insert("blockquote", common(&["cite"]));
    let _ = t.insert("ins", common(&["cite", "datetime"]));
    let _ = t.insert("del", common(&["cite", "datetime"]));
    let _ = t.insert(
        "a",
        grouped(
            &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_FOCUS],
            &[
                "charset", "type", "name", "href", "hreflang", "rel", "rev", "shape", "coords",
            ],
        ),
    );
    let _ = t.insert("span", common(&[]));
    let _ = t.insert(
        "bdo",
        grouped(&[ATTR_CORE, ATTR_EVENTS], &["lang", "xml:lang", "dir"]),
    );
    let _ = t.insert("br", grouped(&[ATTR_CORE], &[]));
    let _ = t.insert("em", common(&[]));
    let _ = t.insert("strong", common(&[]));
    let _ = t.insert("dfn", common(&[]));
    let _ = t.insert("code", common(&[]));
    let _ = t.insert("samp", common(&[]));
    let _ = t.insert("kbd", common(&[]));
    let _ = t.insert("var", common(&[]));
    let _ = t.insert("cite", common(&[]));
    let _ = t.insert("abbr", common(&[]));
    let _ = t.insert("acronym", common(&[]));
    let _ = t.insert("q", common(&["cite"]));
    let _ = t.insert("sub", common(&[]));
    let _ = t.insert("sup", common(&[]));
    let _ = t.insert("tt", common(&[]));
    let _ = t.insert("i", common(&[]));
    let _ = t.insert("b", common(&[]));
    let _ = t.insert("big", common(&[]));
    let _ = t.insert("small", common(&[]));
    let _ = t.insert(
        "object",
        common(&[
            "declare", "classid", "codebase", "data", "type", "codetype", "archive", "standby",
            "height", "width", "usemap", "name", "tabindex",
        ]),
    );
    let _ = t.insert("param", vec!["id", "name", "value", "valuetype", "type"]);
    let _ = t.insert(
        "img",
        common(&["src", "alt", "longdesc", "height", "width", "usemap", "ismap"]),
    );
    let _ = t.insert(
        "map",
        grouped(
            &[ATTR_I18N, ATTR_EVENTS],
            &["id", "class", "style", "title", "name"],
        ),
    );
    let _ = t.insert(
        "area",
        grouped(
            &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_FOCUS],
            &["shape", "coords", "href", "nohref", "alt"],
        ),
    );
    // "accept" is listed twice in the DTD-derived table; lookups only
    // test membership, so the duplicate is preserved rather than fixed.
    let _ = t.insert(
        "form",
        common(&[
            "action", "method", "enctype", "onsubmit", "onreset", "accept", "accept",
        ]),
    );
    let _ = t.insert("label", common(&["for", "accesskey", "onfocus", "onblur"]));
    let _ = t.insert(
        "input",
        grouped(
            &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_FOCUS],
            &[
                "type", "name", "value", "checked", "disabled", "readonly", "size", "maxlength",
                "src", "alt", "usemap", "onselect", "onchange", "accept",
            ],
        ),
    );
    let _ = t.insert(
        "select",
        common(&[
            "name", "size", "multiple", "disabled", "tabindex", "onfocus", "onblur", "onchange",
        ]),
    );
    let _ = t.insert("optgroup", common(&["disabled", "label"]));
    let _ = t.insert("option", common(&["selected", "disabled", "label", "value"]));
    let _ = t.insert(
        "textarea",
        grouped(
            &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_FOCUS],
            &["name", "rows", "cols", "disabled", "readonly", "onselect", "onchange"],
        ),
    );
    let _ = t.insert("fieldset", common(&[]));
    let _ = t.insert("legend", common(&["accesskey"]));
    let _ = t.insert(
        "button",
        grouped(
            &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_FOCUS],
            &["name", "value", "type", "disabled"],
        ),
    );
    let _ = t.insert(
        "table",
        common(&[
            "summary", "width", "border", "frame", "rules", "cellspacing", "cellpadding",
        ]),
    );
    let _ = t.insert("caption", common(&[]));
    let _ = t.insert(
        "colgroup",
        grouped(
            &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_HALIGN, ATTR_VALIGN],
            &["span", "width"],
        ),
    );
    let _ = t.insert(
        "col",
        grouped(
            &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_HALIGN, ATTR_VALIGN],
            &["span", "width"],
        ),
    );
    for cell_container in ["thead", "tfoot", "tbody", "tr"] {
        let _ = t.insert(
            cell_container,
            grouped(
                &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_HALIGN, ATTR_VALIGN],
                &[],
            ),
        );
    }
    for cell in ["th", "td"] {
        let _ = t.insert(
            cell,
            grouped(
                &[ATTR_CORE, ATTR_I18N, ATTR_EVENTS, ATTR_HALIGN, ATTR_VALIGN],
                &["abbr", "axis", "headers", "scope", "rowspan", "colspan"],
            ),
        );
    }
    for heading in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        let _ = t.insert(heading, common(&[]));
    }
    t
}

/// Additional tags and attributes from XHTML 1.0 Transitional.
fn extend_transitional(t: &mut TagTable) {
    let _ = t.insert("strike", common(&[]));
    let _ = t.insert("center", common(&[]));
    let _ = t.insert("dir", common(&["compact"]));
    let _ = t.insert("noframes", common(&[]));
    let _ = t.insert("basefont", vec!["id", "size", "color", "face"]);
    let _ = t.insert("u", common(&[]));
    let _ = t.insert("menu", common(&["compact"]));
    let _ = t.insert(
        "iframe",
        grouped(
            &[ATTR_CORE],
            &[
                "longdesc",
                "name",
                "src",
                "frameborder",
                "marginwidth",
                "marginheight",
                "scrolling",
                "align",
                "height",
                "width",
            ],
        ),
    );
    let _ = t.insert(
        "font",
        grouped(&[ATTR_CORE, ATTR_I18N], &["size", "color", "face"]),
    );
    let _ = t.insert("s", common(&[]));
    let _ = t.insert(
        "applet",
        grouped(
            &[ATTR_CORE],
            &[
                "codebase", "archive", "code", "object", "alt", "name", "width", "height",
                "align", "hspace", "vspace",
            ],
        ),
    );
    let _ = t.insert("isindex", grouped(&[ATTR_CORE, ATTR_I18N], &["prompt"]));

    // Presentational attributes Transitional layers onto Strict tags.
    // Every target must already exist in the table copied from Strict.
    append_attrs(t, "script", &["language"]);
    append_attrs(t, "a", &["target"]);
    append_attrs(t, "td", &["bgcolor", "nowrap", "width", "height"]);
    append_attrs(t, "p", &["align"]);
    append_attrs(t, "h5", &["align"]);
    append_attrs(t, "h3", &["align"]);
    append_attrs(t, "li", &["type", "value"]);
    append_attrs(t, "div", &["align"]);
    append_attrs(t, "pre", &["width"]);
    append_attrs(
        t,
        "body",
        &["background", "bgcolor", "text", "link", "vlink", "alink"],
    );
    append_attrs(t, "ol", &["type", "compact", "start"]);
    append_attrs(t, "h4", &["align"]);
    append_attrs(t, "h2", &["align"]);
    append_attrs(t, "object", &["align", "border", "hspace", "vspace"]);
    append_attrs(t, "img", &["name", "align", "border", "hspace", "vspace"]);
    append_attrs(t, "link", &["target"]);
    append_attrs(t, "legend", &["align"]);
    append_attrs(t, "dl", &["compact"]);
    append_attrs(t, "input", &["align"]);
    append_attrs(t, "h6", &["align"]);
    append_attrs(t, "hr", &["align", "noshade", "size", "width"]);
    append_attrs(t, "base", &["target"]);
    append_attrs(t, "ul", &["type", "compact"]);
    append_attrs(t, "br", &["clear"]);
    append_attrs(t, "form", &["name", "target"]);
    append_attrs(t, "area", &["target"]);
    append_attrs(t, "h1", &["align"]);
}

/// Additional tags from XHTML 1.0 Frameset.
fn extend_frameset(t: &mut TagTable) {
    let _ = t.insert(
        "frameset",
        grouped(&[ATTR_CORE], &["rows", "cols", "onload", "onunload"]),
    );
    let _ = t.insert(
        "frame",
        grouped(
            &[ATTR_CORE],
            &[
                "longdesc",
                "name",
                "src",
                "frameborder",
                "marginwidth",
                "marginheight",
                "noresize",
                "scrolling",
            ],
        ),
    );
}

/// HTML5: new semantic tags in, obsolete tags out, HTML5-only
/// attributes appended last.
///
/// Removals follow <https://www.w3.org/TR/html5-diff/>: purely
/// presentational elements whose job moved to CSS, frame elements that
/// damage usability and accessibility, and elements dropped for having
/// caused confusion (authors use `abbr`, `object`, form controls, and
/// `ul` instead).
fn extend_html5(t: &mut TagTable) {
    for tag in [
        "abbr", "article", "aside", "audio", "canvas", "datalist", "details", "figure",
        "footer", "header", "hgroup", "mark", "menu", "meter", "nav", "output", "progress",
        "section", "time", "video",
    ] {
        let _ = t.insert(tag, common(&[]));
    }

    for presentational in ["basefont", "big", "center", "font", "strike", "tt"] {
        let _ = t.remove(presentational);
    }
    for harmful in ["frame", "frameset", "noframes"] {
        let _ = t.remove(harmful);
    }
    for obsolete in ["acronym", "applet", "isindex", "dir"] {
        let _ = t.remove(obsolete);
    }

    append_attrs(t, "div", &["role"]);
    append_attrs(t, "meta", &["charset"]);
}
