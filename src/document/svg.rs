//! Vector document: fixed 1200x800 canvas, header band via numeric offset.

use crate::annotation;
use crate::component;
use crate::geometry::{resolve_vector, Primitive, Text};
use crate::model::Wireframe;
use crate::pipeline::ArtifactFormat;

use super::{container, escape, RenderContext, WireframeRenderer, DEFAULT_TITLE};

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 800;

const SVG_STYLES: &str = r#"
.wireframe-title { font-family: Arial, sans-serif; font-size: 18px; font-weight: bold; fill: #333333; }
.wireframe-description { font-family: Arial, sans-serif; font-size: 12px; fill: #666666; }
.component-text { font-family: Arial, sans-serif; font-size: 12px; fill: #333333; }
.component-label { font-family: Arial, sans-serif; font-size: 10px; fill: #666666; }
.annotation-text { font-family: Arial, sans-serif; font-size: 10px; fill: #007bff; }
"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl WireframeRenderer for SvgRenderer {
    fn format(&self) -> ArtifactFormat {
        ArtifactFormat::Svg
    }

    fn render(&self, wireframe: &Wireframe, _ctx: &RenderContext) -> String {
        log::debug!(
            "rendering vector document: {} components, {} annotations",
            wireframe.components.len(),
            wireframe.annotations.len()
        );

        let mut header = vec![text_xml(&Text::new(
            20.0,
            30.0,
            "wireframe-title",
            wireframe.title_or(DEFAULT_TITLE),
        ))];
        if !wireframe.description().is_empty() {
            header.push(text_xml(&Text::new(
                20.0,
                50.0,
                "wireframe-description",
                wireframe.description(),
            )));
        }

        let components = wireframe
            .components
            .iter()
            .map(|c| {
                let open = format!(r#"<g class="component-{}">"#, escape(c.kind.as_str()));
                let body = component::vector_fragment(c, resolve_vector(&c.position))
                    .iter()
                    .map(primitive_xml)
                    .collect();
                container(&open, "</g>", body)
            })
            .collect();

        let annotations = annotation::place(&wireframe.annotations)
            .iter()
            .map(|a| {
                let body = a.primitives().iter().map(primitive_xml).collect();
                container(r#"<g class="annotation">"#, "</g>", body)
            })
            .collect();

        let children = vec![
            format!("<style>{}</style>", SVG_STYLES),
            format!(
                r##"<rect width="100%" height="100%" fill="#ffffff" stroke="{}" stroke-width="2" />"##,
                crate::catalog::BORDER
            ),
            container(r#"<g class="wireframe-header">"#, "</g>", header),
            container(r#"<g class="wireframe-content">"#, "</g>", components),
            container(r#"<g class="wireframe-annotations">"#, "</g>", annotations),
        ];

        let open = format!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        );
        container(&open, "</svg>", children)
    }
}

fn text_xml(text: &Text) -> String {
    let mut attrs = format!(r#"x="{}" y="{}" class="{}""#, text.x, text.y, text.class);
    if let Some(anchor) = text.anchor {
        attrs.push_str(&format!(r#" text-anchor="{}""#, anchor));
    }
    if let Some(fill) = text.fill {
        attrs.push_str(&format!(r#" fill="{}""#, fill));
    }
    if let Some(size) = text.font_size {
        attrs.push_str(&format!(r#" font-size="{}""#, size));
    }
    format!("<text {}>{}</text>", attrs, escape(&text.body))
}

fn primitive_xml(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Rect { rect, fill, stroke, stroke_width, rx } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}" rx="{}" />"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape(fill),
            stroke,
            stroke_width,
            escape(rx)
        ),
        Primitive::Line { from, to, stroke, stroke_width } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" />"#,
            from.0, from.1, to.0, to.1, stroke, stroke_width
        ),
        Primitive::Circle { cx, cy, r, fill } => {
            format!(r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#, cx, cy, r, fill)
        }
        Primitive::Text(text) => text_xml(text),
    }
}
