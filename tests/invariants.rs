//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use chrono::{TimeZone, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::json;

use wireframe_core::{
    render_markup, render_markup_at, render_vector, synthesize_specification,
    synthesize_specification_at, ArtifactFormat, SynthesisError, SynthesisPipeline, Wireframe,
};

fn create_test_wireframe() -> Wireframe {
    Wireframe::from_value(json!({
        "title": "Login Page",
        "description": "Email and password sign-in",
        "components": [
            {"id": "hdr", "type": "header", "position": {"x": 0, "y": 0, "width": 1200, "height": 60}, "content": "Acme"},
            {"id": "email", "type": "input", "position": {"x": 400, "y": 150, "width": 400, "height": 40}, "content": "Email address"},
            {"id": "submit", "type": "button", "position": {"x": 400, "y": 260, "width": 120, "height": 40},
             "properties": {"backgroundColor": "#ff00ff"}, "content": "Sign In"},
            {"id": "hero", "type": "image", "position": {"x": 20, "y": 100, "width": 300, "height": 200}}
        ],
        "annotations": [
            {"componentId": "email", "note": "Validate on blur", "type": "interaction"},
            {"note": "General page note"},
            {"componentId": "submit", "note": "Disabled until form is valid"}
        ],
        "userFlow": ["open page", "enter credentials", "submit"]
    }))
    .unwrap()
}

fn assert_well_formed(doc: &str) {
    let mut reader = Reader::from_str(doc);
    let mut depth = 0i32;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("not well-formed at {}: {:?}", reader.buffer_position(), e),
        }
        assert!(depth >= 0, "closing tag without opener");
    }
    assert_eq!(depth, 0, "unclosed elements");
}

#[test]
fn invariant_vector_render_deterministic() {
    let wf = create_test_wireframe();
    assert_eq!(render_vector(&wf), render_vector(&wf));
}

#[test]
fn invariant_markup_pure_apart_from_timestamp() {
    let wf = create_test_wireframe();
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(render_markup_at(&wf, at), render_markup_at(&wf, at));
}

#[test]
fn invariant_specification_deterministic_apart_from_timestamp() {
    let wf = create_test_wireframe();
    let mut first = synthesize_specification(&wf);
    let second = synthesize_specification(&wf);
    first.project_info.created_date = second.project_info.created_date;
    assert_eq!(first, second);
}

#[test]
fn invariant_components_keep_input_order() {
    let wf = create_test_wireframe();
    let svg = render_vector(&wf);
    let html = render_markup(&wf);

    for doc in [&svg, &html] {
        let positions: Vec<usize> = ["HEADER", "INPUT", "BUTTON", "IMAGE"]
            .iter()
            .map(|label| doc.find(&format!(">{}<", label)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken: {:?}", positions);
    }
}

#[test]
fn invariant_annotations_keep_input_order_in_markup() {
    let html = render_markup(&create_test_wireframe());
    let a = html.find("Validate on blur").unwrap();
    let b = html.find("General page note").unwrap();
    let c = html.find("Disabled until form is valid").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn invariant_truncation_law() {
    let long = format!("LONG{}", "z".repeat(56));
    let medium = format!("MED{}", "m".repeat(37));
    let wf = Wireframe::from_value(json!({
        "title": "T",
        "components": [
            {"id": "a", "type": "card", "content": long},
            {"id": "b", "type": "card", "content": medium}
        ]
    }))
    .unwrap();

    let svg = render_vector(&wf);
    assert!(!svg.contains("LONG"));
    let expected: String = medium.chars().take(30).collect::<String>() + "...";
    assert!(svg.contains(&format!(">{}</text>", expected)));

    let html = render_markup(&wf);
    assert!(html.contains(&long));
    assert!(html.contains(&medium));
}

#[test]
fn invariant_annotation_filtering_asymmetry() {
    let wf = create_test_wireframe();
    let svg = render_vector(&wf);
    let html = render_markup(&wf);

    assert!(!svg.contains("General page note"));
    assert!(svg.contains("Disabled until form is valid"));
    // Second placed annotation sits in the second slot.
    assert!(svg.contains(r#"<rect x="1000" y="160" width="180" height="50""#));
    assert!(!svg.contains(r#"<rect x="1000" y="220""#));
    // Badges carry the original index, matching the markup numbering.
    assert!(svg.contains(r##"text-anchor="middle" fill="#ffffff">1</text>"##));
    assert!(svg.contains(r##"text-anchor="middle" fill="#ffffff">3</text>"##));
    assert!(!svg.contains(r##"text-anchor="middle" fill="#ffffff">2</text>"##));

    assert!(html.contains("#2 - Component: Unknown"));
    assert!(html.contains("General page note"));
    assert!(html.contains("#3 - Component: submit"));
}

#[test]
fn invariant_empty_input_well_formed() {
    let wf = Wireframe::from_value(json!({"title": "T", "components": [], "annotations": []})).unwrap();

    let svg = render_vector(&wf);
    assert_well_formed(&svg);
    assert!(svg.contains(">T</text>"));
    assert!(svg.contains(r#"<g class="wireframe-content"></g>"#));
    assert!(svg.contains(r#"<g class="wireframe-annotations"></g>"#));

    let html = render_markup(&wf);
    assert_well_formed(&html);
    assert!(html.contains("No annotations available."));
}

#[test]
fn invariant_documents_well_formed_for_hostile_text() {
    let wf = Wireframe::from_value(json!({
        "title": "<script>alert('x')</script> & co",
        "description": "\"quoted\" <b>",
        "components": [{"id": "x", "type": "a\"b<c", "content": "1 < 2 && 3 > 2",
                        "properties": {"backgroundColor": "\"><svg"}}],
        "annotations": [{"componentId": "<x>", "note": "&amp; already", "type": "<t>"}]
    }))
    .unwrap();

    assert_well_formed(&render_vector(&wf));
    assert_well_formed(&render_markup(&wf));

    let controls = Wireframe::from_value(json!({
        "title": "bell\u{7} and\u{1} nul\u{0}",
        "components": [{"id": "c", "content": "x\u{1f}y"}]
    }))
    .unwrap();
    let svg = render_vector(&controls);
    let html = render_markup(&controls);
    for doc in [&svg, &html] {
        assert!(!doc.chars().any(|c| c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')));
        assert_well_formed(doc);
    }
    assert!(svg.contains(">bell and nul</text>"));
    assert_well_formed(&render_markup(&create_test_wireframe()));
    assert_well_formed(&render_vector(&create_test_wireframe()));
}

#[test]
fn invariant_button_fill_forced() {
    let svg = render_vector(&create_test_wireframe());
    assert!(svg.contains(r##"<rect x="400" y="330" width="120" height="40" fill="#007bff""##));
    assert!(!svg.contains("#ff00ff"));
    assert!(svg.contains(r##"class="component-text" fill="#ffffff">Sign In</text>"##));
}

#[test]
fn invariant_image_draws_cross() {
    let svg = render_vector(&create_test_wireframe());
    assert!(svg.contains(r#"<line x1="30" y1="190" x2="310" y2="360""#));
    assert!(svg.contains(r#"<line x1="310" y1="190" x2="30" y2="360""#));
}

#[test]
fn invariant_header_offsets_agree_on_content_region() {
    let wf = create_test_wireframe();
    let svg = render_vector(&wf);
    let html = render_markup(&wf);
    // Same component: y=150 in markup, y=150+70 in vector.
    assert!(html.contains("left: 400px; top: 150px; width: 400px; height: 40px"));
    assert!(svg.contains(r#"<rect x="400" y="220" width="400" height="40""#));
}

#[test]
fn invariant_specification_complete() {
    let wf = create_test_wireframe();
    let spec = synthesize_specification(&wf);

    assert_eq!(spec.component_specifications.len(), wf.components.len());
    for component in &wf.components {
        let id = component.id.as_deref().unwrap();
        let matching: Vec<_> = spec.component_specifications.iter().filter(|s| s.id == id).collect();
        assert_eq!(matching.len(), 1);

        let entry = matching[0];
        let expected_a11y = match entry.kind.as_str() {
            "button" | "input" => 4,
            "image" => 3,
            _ => 0,
        };
        assert_eq!(entry.accessibility_requirements.len(), expected_a11y);
    }

    let button = spec.component_specifications.iter().find(|s| s.kind == "button").unwrap();
    assert_eq!(button.content_requirements.content_type, "action text");
    let header = spec.component_specifications.iter().find(|s| s.kind == "header").unwrap();
    assert_eq!(header.content_requirements.content_type, "text");
    assert_eq!(spec.user_flow, vec![json!("open page"), json!("enter credentials"), json!("submit")]);
}

#[test]
fn invariant_specification_timestamp_is_metadata_only() {
    let wf = create_test_wireframe();
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let spec = synthesize_specification_at(&wf, at);
    assert_eq!(spec.project_info.created_date, at);
    assert_eq!(spec.project_info.version, "1.0");
}

#[test]
fn invariant_malformed_input_single_error() {
    let err = Wireframe::from_value(json!({"title": "T", "components": 7})).unwrap_err();
    assert!(matches!(err, SynthesisError::MalformedInput(_)));

    let err = SynthesisPipeline::new().synthesize(&json!("just a string")).unwrap_err();
    assert!(matches!(err, SynthesisError::MalformedInput(_)));
}

#[test]
fn invariant_bundle_hashes_stable() {
    let pipeline = SynthesisPipeline::new();
    let input = serde_json::to_value(create_test_wireframe()).unwrap();

    let first = pipeline.synthesize(&input).unwrap();
    let second = pipeline.synthesize(&input).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.input_hash, second.input_hash);
    assert_eq!(
        first.artifact(ArtifactFormat::Svg).unwrap().hash,
        second.artifact(ArtifactFormat::Svg).unwrap().hash
    );
}

#[test]
fn invariant_bundle_written_to_dir() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = SynthesisPipeline::new()
        .synthesize(&serde_json::to_value(create_test_wireframe()).unwrap())
        .unwrap();

    let written = bundle.write_to_dir(dir.path()).unwrap();
    assert_eq!(written.len(), 4);

    let svg = std::fs::read_to_string(dir.path().join("wireframe.svg")).unwrap();
    assert_eq!(svg, bundle.artifact(ArtifactFormat::Svg).unwrap().content);

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["title"], "Login Page");
    assert_eq!(manifest["artifacts"].as_array().unwrap().len(), 3);
}
