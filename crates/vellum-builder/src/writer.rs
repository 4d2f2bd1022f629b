//! Low-level emission primitives.
//!
//! Append-only, ordering-preserving writes onto the session's output
//! string. One call, one atomic markup unit; no pretty-printing. Text
//! and attribute values are escaped here, nothing else is.

use crate::attrs::AttrList;

/// The leading XML processing instruction.
const XML_INSTRUCTION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Write `<name a="v" ...>`.
pub(crate) fn open_tag(out: &mut String, name: &str, attrs: &AttrList) {
    out.push('<');
    out.push_str(name);
    write_attrs(out, attrs);
    out.push('>');
}

/// Write `</name>`.
pub(crate) fn close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Write `<name a="v" .../>` for an element with no content.
pub(crate) fn self_closed_tag(out: &mut String, name: &str, attrs: &AttrList) {
    out.push('<');
    out.push_str(name);
    write_attrs(out, attrs);
    out.push_str("/>");
}

/// Write escaped character data.
pub(crate) fn text(out: &mut String, content: &str) {
    out.push_str(&html_escape::encode_text(content));
}

/// Write `<!DOCTYPE html PUBLIC "public-id" "system-id">`.
pub(crate) fn doctype_public(out: &mut String, public_id: &str, system_id: &str) {
    out.push_str("<!DOCTYPE html PUBLIC \"");
    out.push_str(public_id);
    out.push_str("\" \"");
    out.push_str(system_id);
    out.push_str("\">");
}

/// Write the XML processing instruction.
pub(crate) fn xml_instruction(out: &mut String) {
    out.push_str(XML_INSTRUCTION);
}

/// Write `<!-- text -->`.
pub(crate) fn comment(out: &mut String, content: &str) {
    out.push_str("<!-- ");
    out.push_str(content);
    out.push_str(" -->");
}

fn write_attrs(out: &mut String, attrs: &AttrList) {
    for (name, value) in attrs.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
}
