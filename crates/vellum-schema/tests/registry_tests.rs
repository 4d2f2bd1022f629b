//! Tests for the composed variant registry: derived-set invariants,
//! composition monotonicity, and the HTML5 add/remove lists.

use strum::IntoEnumIterator;
use vellum_schema::attr_groups::{FORM_TAGS, SELF_CLOSING_TAGS};
use vellum_schema::{Doctype, Variant, resolve};

// ========== derived sets ==========

#[test]
fn test_tags_match_table_keys() {
    for variant in Variant::iter() {
        let tagset = resolve(variant);
        for tag in tagset.tags() {
            assert!(
                tagset.allowed_attributes(tag).is_some(),
                "{variant}: `{tag}` in tags but not in table"
            );
        }
        assert!(tagset.contains("div"));
        assert!(!tagset.contains("blink"));
    }
}

#[test]
fn test_forms_are_tags_intersected_with_form_tags() {
    for variant in Variant::iter() {
        let tagset = resolve(variant);
        let expected: Vec<&str> = FORM_TAGS
            .iter()
            .copied()
            .filter(|t| tagset.contains(t))
            .collect();
        assert_eq!(tagset.forms().len(), expected.len(), "{variant}");
        for tag in expected {
            assert!(tagset.is_form_tag(tag), "{variant}: `{tag}` missing from forms");
        }
        for tag in tagset.forms() {
            assert!(FORM_TAGS.contains(tag), "{variant}: `{tag}` is not a form tag");
            assert!(tagset.contains(tag));
        }
    }
}

#[test]
fn test_self_closing_are_tags_intersected_with_global_set() {
    for variant in Variant::iter() {
        let tagset = resolve(variant);
        let expected: Vec<&str> = SELF_CLOSING_TAGS
            .iter()
            .copied()
            .filter(|t| tagset.contains(t))
            .collect();
        assert_eq!(tagset.self_closing().len(), expected.len(), "{variant}");
        for tag in expected {
            assert!(tagset.is_self_closing(tag), "{variant}: `{tag}` missing");
        }
    }
}

#[test]
fn test_frame_self_closing_only_where_present() {
    assert!(!resolve(Variant::XhtmlStrict).is_self_closing("frame"));
    assert!(resolve(Variant::XhtmlFrameset).is_self_closing("frame"));
    assert!(!resolve(Variant::Html5).is_self_closing("frame"));
}

// ========== composition ==========

#[test]
fn test_transitional_is_superset_of_strict() {
    let strict = resolve(Variant::XhtmlStrict);
    let transitional = resolve(Variant::XhtmlTransitional);
    for tag in strict.tags() {
        assert!(transitional.contains(tag), "`{tag}` lost in Transitional");
    }
    assert!(transitional.tags().len() > strict.tags().len());
}

#[test]
fn test_frameset_is_superset_of_transitional() {
    let transitional = resolve(Variant::XhtmlTransitional);
    let frameset = resolve(Variant::XhtmlFrameset);
    for tag in transitional.tags() {
        assert!(frameset.contains(tag), "`{tag}` lost in Frameset");
    }
    assert!(frameset.contains("frame"));
    assert!(frameset.contains("frameset"));
    assert!(!transitional.contains("frameset"));
}

#[test]
fn test_transitional_new_tags() {
    let strict = resolve(Variant::XhtmlStrict);
    let transitional = resolve(Variant::XhtmlTransitional);
    for tag in ["strike", "center", "u", "iframe", "font", "applet", "isindex"] {
        assert!(!strict.contains(tag), "`{tag}` should not be Strict");
        assert!(transitional.contains(tag), "`{tag}` should be Transitional");
    }
}

#[test]
fn test_transitional_layers_attributes_onto_strict_tags() {
    let strict = resolve(Variant::XhtmlStrict);
    let transitional = resolve(Variant::XhtmlTransitional);
    assert!(!strict.allows_attribute("a", "target"));
    assert!(transitional.allows_attribute("a", "target"));
    assert!(!strict.allows_attribute("body", "bgcolor"));
    assert!(transitional.allows_attribute("body", "bgcolor"));
    assert!(transitional.allows_attribute("hr", "noshade"));
    assert!(transitional.allows_attribute("script", "language"));
}

// ========== HTML5 ==========

#[test]
fn test_html5_excludes_obsolete_tags() {
    let html5 = resolve(Variant::Html5);
    for tag in [
        "basefont", "big", "center", "font", "strike", "tt", // presentational
        "frame", "frameset", "noframes", // accessibility-harmful
        "acronym", "applet", "isindex", "dir", // confusing or obsolete
    ] {
        assert!(!html5.contains(tag), "`{tag}` must not be in HTML5");
    }
}

#[test]
fn test_html5_includes_semantic_tags() {
    let html5 = resolve(Variant::Html5);
    for tag in [
        "article", "aside", "audio", "canvas", "datalist", "details", "figure", "footer",
        "header", "hgroup", "mark", "meter", "nav", "output", "progress", "section", "time",
        "video",
    ] {
        assert!(html5.contains(tag), "`{tag}` missing from HTML5");
    }
}

#[test]
fn test_html5_attribute_additions_layered_last() {
    let html5 = resolve(Variant::Html5);
    assert!(html5.allows_attribute("div", "role"));
    assert!(html5.allows_attribute("meta", "charset"));
    let transitional = resolve(Variant::XhtmlTransitional);
    assert!(!transitional.allows_attribute("div", "role"));
    assert!(!transitional.allows_attribute("meta", "charset"));
}

// ========== attribute lists ==========

#[test]
fn test_duplicate_accept_is_harmless_for_membership() {
    // `accept` appears twice in the composed `form` list; only
    // membership is contractual.
    for variant in Variant::iter() {
        let tagset = resolve(variant);
        assert!(tagset.allows_attribute("form", "accept"), "{variant}");
    }
}

#[test]
fn test_unknown_tag_has_no_whitelist() {
    let tagset = resolve(Variant::XhtmlStrict);
    assert!(tagset.allowed_attributes("blink").is_none());
    assert!(!tagset.allows_attribute("blink", "id"));
}

// ========== document metadata ==========

#[test]
fn test_xhtml_doctypes() {
    let strict = resolve(Variant::XhtmlStrict).doctype();
    assert_eq!(
        strict,
        Some(Doctype::Public {
            public_id: "-//W3C//DTD XHTML 1.0 Strict//EN",
            system_id: "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd",
        })
    );
    let frameset = resolve(Variant::XhtmlFrameset).doctype();
    assert_eq!(
        frameset,
        Some(Doctype::Public {
            public_id: "-//W3C//DTD XHTML 1.0 Frameset//EN",
            system_id: "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd",
        })
    );
}

#[test]
fn test_html5_metadata_inherits_doctype_only() {
    let html5 = resolve(Variant::Html5);
    assert_eq!(html5.doctype(), None);
    assert_eq!(html5.output_xml_instruction(), Some(false));
    assert_eq!(html5.root_attributes(), Some(&[("lang", "en")][..]));
}

#[test]
fn test_xhtml_variants_inherit_session_defaults() {
    for variant in [
        Variant::XhtmlStrict,
        Variant::XhtmlTransitional,
        Variant::XhtmlFrameset,
    ] {
        let tagset = resolve(variant);
        assert_eq!(tagset.output_xml_instruction(), None, "{variant}");
        assert_eq!(tagset.root_attributes(), None, "{variant}");
        assert!(tagset.doctype().is_some(), "{variant}");
    }
}

// ========== variant names ==========

#[test]
fn test_variant_names_round_trip() {
    for variant in Variant::iter() {
        let name = variant.to_string();
        assert_eq!(name.parse::<Variant>(), Ok(variant), "{name}");
    }
    assert_eq!("html5".parse::<Variant>(), Ok(Variant::Html5));
    assert_eq!("xhtml-strict".parse::<Variant>(), Ok(Variant::XhtmlStrict));
}
