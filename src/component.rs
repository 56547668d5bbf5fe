//! Component Renderer - Type-Dispatched Fragments
//!
//! Style precedence: catalog default, then component properties, then the
//! type treatment table. A treatment always has the last word.

use crate::catalog::{self, BORDER, LIGHT_FOREGROUND, PRIMARY};
use crate::geometry::{Primitive, Rect, Text};
use crate::model::Component;

/// Content at or above this many characters is left out of the vector rendering
pub const CONTENT_DISPLAY_LIMIT: usize = 50;
/// Vector content longer than this is cut and suffixed with an ellipsis
pub const CONTENT_TRUNCATE_AT: usize = 30;

pub const ELLIPSIS: &str = "...";

const DEFAULT_FILL: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    Text,
    /// Diagonal cross drawn in place of any content
    CrossedPlaceholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub fill: Option<String>,
    pub radius: Option<String>,
    /// Vector content text color
    pub text_fill: Option<&'static str>,
    /// Vector content handling
    pub content: ContentMode,
}

type Treatment = fn(&mut ResolvedStyle);

const TYPE_TREATMENTS: &[(&str, Treatment)] = &[("button", treat_button), ("image", treat_image)];

fn treat_button(style: &mut ResolvedStyle) {
    style.fill = Some(PRIMARY.to_string());
    style.text_fill = Some(LIGHT_FOREGROUND);
}

fn treat_image(style: &mut ResolvedStyle) {
    style.content = ContentMode::CrossedPlaceholder;
}

pub fn treatment_for(kind: &str) -> Option<Treatment> {
    TYPE_TREATMENTS
        .iter()
        .find(|(tag, _)| *tag == kind)
        .map(|(_, treat)| *treat)
}

pub fn resolve_style(component: &Component) -> ResolvedStyle {
    let kind = component.kind.as_str();
    let merged = catalog::effective_style(kind, &component.properties);

    let mut style = ResolvedStyle {
        fill: merged.get("backgroundColor").cloned(),
        radius: merged.get("borderRadius").cloned(),
        text_fill: None,
        content: ContentMode::Text,
    };

    if let Some(treat) = treatment_for(kind) {
        treat(&mut style);
    }
    style
}

/// Content line as shown in the vector rendering, if shown at all
pub fn vector_content_line(content: &str) -> Option<String> {
    let len = content.chars().count();
    if len == 0 || len >= CONTENT_DISPLAY_LIMIT {
        return None;
    }
    if len > CONTENT_TRUNCATE_AT {
        let head: String = content.chars().take(CONTENT_TRUNCATE_AT).collect();
        Some(format!("{}{}", head, ELLIPSIS))
    } else {
        Some(content.to_string())
    }
}

fn corner_radius(radius: Option<&str>) -> String {
    match radius {
        Some(r) => {
            let trimmed = r.trim().trim_end_matches("px").trim();
            if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() }
        }
        None => "0".to_string(),
    }
}

/// Vector primitives for one component, drawn within `rect`
pub fn vector_fragment(component: &Component, rect: Rect) -> Vec<Primitive> {
    let style = resolve_style(component);
    let mut primitives = vec![
        Primitive::Rect {
            rect,
            fill: style.fill.clone().unwrap_or_else(|| DEFAULT_FILL.to_string()),
            stroke: BORDER,
            stroke_width: 1.0,
            rx: corner_radius(style.radius.as_deref()),
        },
        Primitive::Text(Text::new(
            rect.x + 4.0,
            rect.y + 12.0,
            "component-label",
            component.kind.label(),
        )),
    ];

    match style.content {
        ContentMode::Text => {
            if let Some(line) = vector_content_line(component.content()) {
                let mut text = Text::new(rect.x + 4.0, rect.bottom() - 8.0, "component-text", line);
                text.fill = style.text_fill;
                primitives.push(Primitive::Text(text));
            }
        }
        ContentMode::CrossedPlaceholder => {
            let (left, right) = (rect.x + 10.0, rect.right() - 10.0);
            let (top, bottom) = (rect.y + 20.0, rect.bottom() - 10.0);
            for (from, to) in [((left, top), (right, bottom)), ((right, top), (left, bottom))] {
                primitives.push(Primitive::Line {
                    from,
                    to,
                    stroke: BORDER,
                    stroke_width: 2.0,
                });
            }
        }
    }

    primitives
}

/// Markup block for one component. Content is never truncated here.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupBlock {
    pub class: String,
    pub inline_style: String,
    pub label: String,
    pub content: String,
}

pub fn markup_fragment(component: &Component, rect: Rect) -> MarkupBlock {
    let style = resolve_style(component);

    let mut declarations = vec![
        format!("left: {}px", rect.x),
        format!("top: {}px", rect.y),
        format!("width: {}px", rect.width),
        format!("height: {}px", rect.height),
    ];
    if let Some(fill) = &style.fill {
        declarations.push(format!("background-color: {}", fill));
    }
    if let Some(radius) = &style.radius {
        declarations.push(format!("border-radius: {}", radius));
    }

    MarkupBlock {
        class: format!("component component-{}", component.kind),
        inline_style: declarations.join("; "),
        label: component.kind.label(),
        content: component.content().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve;
    use crate::model::Position;

    fn rect() -> Rect {
        Rect { x: 10.0, y: 80.0, width: 200.0, height: 40.0 }
    }

    fn texts(primitives: &[Primitive]) -> Vec<&Text> {
        primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_content_line_limits() {
        assert_eq!(vector_content_line(""), None);
        assert_eq!(vector_content_line("Sign in").as_deref(), Some("Sign in"));

        let forty = "a".repeat(40);
        assert_eq!(vector_content_line(&forty), Some(format!("{}...", "a".repeat(30))));

        assert_eq!(vector_content_line(&"b".repeat(50)), None);
        assert_eq!(vector_content_line(&"c".repeat(30)), Some("c".repeat(30)));
    }

    #[test]
    fn test_content_line_counts_characters_not_bytes() {
        let accented = "é".repeat(35);
        let line = vector_content_line(&accented).unwrap();
        assert_eq!(line.chars().count(), 33);
    }

    #[test]
    fn test_button_fill_wins_over_properties() {
        let button = Component::new("b1", "button", Position::default())
            .with_property("backgroundColor", "#ff0000")
            .with_content("Go");
        let primitives = vector_fragment(&button, rect());

        match &primitives[0] {
            Primitive::Rect { fill, .. } => assert_eq!(fill, PRIMARY),
            other => panic!("expected rect, got {:?}", other),
        }
        let content = texts(&primitives)[1];
        assert_eq!(content.fill, Some(LIGHT_FOREGROUND));
    }

    #[test]
    fn test_image_draws_cross_instead_of_content() {
        let image = Component::new("i1", "image", Position::default()).with_content("hero");
        let primitives = vector_fragment(&image, rect());

        let lines = primitives.iter().filter(|p| matches!(p, Primitive::Line { .. })).count();
        assert_eq!(lines, 2);
        assert_eq!(texts(&primitives).len(), 1);
        assert_eq!(
            primitives[2],
            Primitive::Line { from: (20.0, 100.0), to: (200.0, 110.0), stroke: BORDER, stroke_width: 2.0 }
        );
    }

    #[test]
    fn test_unknown_type_renders_generic_box() {
        let widget = Component::new("w", "carousel", Position::default());
        let primitives = vector_fragment(&widget, rect());
        match &primitives[0] {
            Primitive::Rect { fill, rx, .. } => {
                assert_eq!(fill, "#ffffff");
                assert_eq!(rx, "0");
            }
            other => panic!("expected rect, got {:?}", other),
        }
        assert_eq!(texts(&primitives)[0].body, "CAROUSEL");
    }

    #[test]
    fn test_radius_strips_px() {
        let input = Component::new("in", "input", Position::default());
        match &vector_fragment(&input, rect())[0] {
            Primitive::Rect { rx, .. } => assert_eq!(rx, "4"),
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_markup_keeps_full_content_and_unshifted_geometry() {
        let long = "x".repeat(120);
        let card = Component::new("c", "card", Position::new(5.0, 6.0, 70.0, 80.0)).with_content(long.clone());
        let block = markup_fragment(&card, resolve(&card.position));

        assert_eq!(block.content, long);
        assert_eq!(block.class, "component component-card");
        assert!(block.inline_style.starts_with("left: 5px; top: 6px; width: 70px; height: 80px"));
        assert!(block.inline_style.contains("border-radius: 8px"));
    }
}
