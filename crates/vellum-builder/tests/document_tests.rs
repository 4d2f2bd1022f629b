//! Tests for document-root and head composition: doctype/XML-instruction
//! resolution, root attribute merging, comments, and the automatic meta
//! tag.

use vellum_builder::{Builder, Doctype, Variant, attrs};

// ========== head composition ==========

#[test]
fn test_head_meta_under_xhtml() {
    let mut b = Builder::new();
    b.head(|_| Ok(())).unwrap();
    assert_eq!(
        b.as_str(),
        "<head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/></head>"
    );
}

#[test]
fn test_head_meta_under_html5() {
    let mut b = Builder::new();
    b.set_variant(Variant::Html5);
    b.head(|_| Ok(())).unwrap();
    assert_eq!(b.as_str(), "<head><meta charset=\"utf-8\"/></head>");
}

#[test]
fn test_head_meta_precedes_block_content() {
    let mut b = Builder::new();
    b.set_variant(Variant::Html5);
    b.head(|b| b.text_element("title", "t")).unwrap();
    assert_eq!(
        b.as_str(),
        "<head><meta charset=\"utf-8\"/><title>t</title></head>"
    );
}

#[test]
fn test_head_without_meta_tag() {
    let mut b = Builder::new().with_output_meta_tag(false);
    b.head(|b| b.text_element("title", "t")).unwrap();
    assert_eq!(b.as_str(), "<head><title>t</title></head>");
}

// ========== full documents ==========

#[test]
fn test_xhtml_strict_document() {
    let mut b = Builder::new();
    b.xhtml_strict(attrs![], &[], |b| {
        b.element("body", attrs![], |b| b.text_element("p", "hi"))
    })
    .unwrap();
    assert_eq!(
        b.as_str(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\
         <html xmlns=\"http://www.w3.org/1999/xhtml\" lang=\"en\">\
         <body><p>hi</p></body></html>"
    );
}

#[test]
fn test_xhtml_transitional_doctype() {
    let mut b = Builder::new();
    b.xhtml_transitional(attrs![], &[], |_| Ok(())).unwrap();
    assert!(b.as_str().contains("-//W3C//DTD XHTML 1.0 Transitional//EN"));
    assert!(
        b.as_str()
            .contains("http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd")
    );
}

#[test]
fn test_xhtml_frameset_doctype() {
    let mut b = Builder::new();
    b.xhtml_frameset(attrs![], &[], |_| Ok(())).unwrap();
    assert!(b.as_str().contains("-//W3C//DTD XHTML 1.0 Frameset//EN"));
}

#[test]
fn test_html5_document_defaults() {
    // HTML5 suppresses the XML instruction itself and inherits the
    // session doctype, which defaults to none.
    let mut b = Builder::new();
    b.html_five(attrs![], &[], |_| Ok(())).unwrap();
    assert_eq!(b.as_str(), "<html lang=\"en\"></html>");
}

#[test]
fn test_html5_honors_session_doctype() {
    let mut b = Builder::new().with_doctype(Doctype::Public {
        public_id: "-//W3C//DTD XHTML 1.0 Strict//EN",
        system_id: "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd",
    });
    b.html_five(attrs![], &[], |_| Ok(())).unwrap();
    assert!(b.as_str().starts_with("<!DOCTYPE html PUBLIC"));
}

#[test]
fn test_session_can_suppress_xml_instruction() {
    let mut b = Builder::new().with_output_xml_instruction(false);
    b.xhtml_strict(attrs![], &[], |_| Ok(())).unwrap();
    assert!(b.as_str().starts_with("<!DOCTYPE html"));
}

#[test]
fn test_variant_xml_instruction_wins_over_session() {
    // The session default says yes, the HTML5 variant says no.
    let mut b = Builder::new().with_output_xml_instruction(true);
    b.html_five(attrs![], &[], |_| Ok(())).unwrap();
    assert!(!b.as_str().contains("<?xml"));
}

#[test]
fn test_entry_point_switches_the_session_variant() {
    let mut b = Builder::new();
    assert_eq!(b.variant(), Variant::XhtmlTransitional);
    b.html_five(attrs![], &[], |b| {
        assert_eq!(b.variant(), Variant::Html5);
        assert!(!b.tagset().contains("center"));
        Ok(())
    })
    .unwrap();
    assert_eq!(b.variant(), Variant::Html5);
}

// ========== root attributes ==========

#[test]
fn test_caller_attrs_override_root_defaults() {
    let mut b = Builder::new();
    b.html_five(attrs!["lang" => "nl"], &[], |_| Ok(())).unwrap();
    assert_eq!(b.as_str(), "<html lang=\"nl\"></html>");
}

#[test]
fn test_caller_attrs_merge_after_root_defaults() {
    let mut b = Builder::new();
    b.xhtml_strict(attrs!["id" => "root"], &[], |_| Ok(())).unwrap();
    assert!(b.as_str().contains(
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" lang=\"en\" id=\"root\">"
    ));
}

#[test]
fn test_session_root_attributes_used_by_xhtml_variants() {
    let mut b = Builder::new().with_root_attributes(attrs!["xmlns" => "urn:x", "lang" => "fr"]);
    b.xhtml_strict(attrs![], &[], |_| Ok(())).unwrap();
    assert!(b.as_str().contains("<html xmlns=\"urn:x\" lang=\"fr\">"));

    // HTML5 carries its own root attributes and ignores the session's.
    let mut b = Builder::new().with_root_attributes(attrs!["lang" => "fr"]);
    b.html_five(attrs![], &[], |_| Ok(())).unwrap();
    assert!(b.as_str().contains("<html lang=\"en\">"));
}

// ========== comments ==========

#[test]
fn test_comments_emitted_in_order_before_root() {
    let mut b = Builder::new();
    b.html_five(attrs![], &["a", "b"], |b| b.text_element("p", "x"))
        .unwrap();
    assert_eq!(
        b.as_str(),
        "<!-- a --><!-- b --><html lang=\"en\"><p>x</p></html>"
    );
    assert_eq!(b.as_str().matches("<!--").count(), 2);
}

#[test]
fn test_comments_on_xhtml_entry_points() {
    let mut b = Builder::new();
    b.xhtml_strict(attrs![], &["generated"], |_| Ok(())).unwrap();
    let out = b.as_str();
    let comment = out.find("<!-- generated -->").expect("comment missing");
    let root = out.find("<html").expect("root missing");
    let doctype = out.find("<!DOCTYPE").expect("doctype missing");
    assert!(doctype < comment && comment < root);
}

// ========== closing order ==========

#[test]
fn test_closing_tags_mirror_opening_order() {
    let mut b = Builder::new();
    b.xhtml_strict(attrs![], &[], |b| {
        b.head(|b| b.text_element("title", "t"))?;
        b.element("body", attrs![], |b| {
            b.element("div", attrs![], |b| b.text_element("p", "deep"))
        })
    })
    .unwrap();
    let out = b.as_str();
    assert!(out.ends_with("<p>deep</p></div></body></html>"));
    assert!(out.find("</head>").expect("head") < out.find("<body>").expect("body"));
}
