//! Markup document: header block reserves space structurally, content is
//! never truncated, and every annotation is listed.

use crate::annotation;
use crate::component;
use crate::geometry::resolve;
use crate::model::Wireframe;
use crate::pipeline::ArtifactFormat;

use super::{container, escape, RenderContext, WireframeRenderer, DEFAULT_TITLE};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const NO_ANNOTATIONS: &str = "No annotations available.";

const HTML_STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; background-color: #f8f9fa; }
.wireframe-container { max-width: 1400px; margin: 0 auto; padding: 20px; background: white; box-shadow: 0 0 20px rgba(0,0,0,0.1); }
.wireframe-header { border-bottom: 2px solid #dee2e6; padding-bottom: 20px; margin-bottom: 30px; }
.wireframe-header h1 { font-size: 2.5rem; color: #2c3e50; margin-bottom: 10px; }
.description { font-size: 1.1rem; color: #6c757d; margin-bottom: 15px; }
.metadata { display: flex; gap: 20px; font-size: 0.9rem; color: #6c757d; }
.wireframe-content { position: relative; min-height: 600px; border: 2px dashed #dee2e6; margin-bottom: 30px; background: #fafafa; }
.component { position: absolute; border: 1px solid #adb5bd; background: white; display: flex; flex-direction: column; overflow: hidden; }
.component-header { background: #e9ecef; padding: 4px 8px; font-size: 0.75rem; font-weight: bold; color: #495057; border-bottom: 1px solid #adb5bd; }
.component-content { padding: 8px; flex: 1; font-size: 0.85rem; overflow: hidden; }
.component-button { background: #007bff; color: white; border: none; cursor: pointer; }
.component-button .component-header { background: #0056b3; }
.component-input { background: white; border: 2px solid #ced4da; }
.component-image { background: #f8f9fa; display: flex; align-items: center; justify-content: center; color: #6c757d; }
.wireframe-annotations { border-top: 2px solid #dee2e6; padding-top: 20px; }
.wireframe-annotations h3 { color: #2c3e50; margin-bottom: 15px; }
.annotation { background: #e3f2fd; border-left: 4px solid #2196f3; padding: 12px; margin-bottom: 10px; border-radius: 4px; }
.annotation-header { font-weight: bold; color: #1976d2; margin-bottom: 5px; }
.annotation-type { font-size: 0.8rem; color: #666; text-transform: uppercase; letter-spacing: 0.5px; }
"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl WireframeRenderer for HtmlRenderer {
    fn format(&self) -> ArtifactFormat {
        ArtifactFormat::Html
    }

    fn render(&self, wireframe: &Wireframe, ctx: &RenderContext) -> String {
        log::debug!(
            "rendering markup document: {} components, {} annotations",
            wireframe.components.len(),
            wireframe.annotations.len()
        );

        let title = escape(wireframe.title_or(DEFAULT_TITLE));

        let mut header = vec![format!("<h1>{}</h1>", title)];
        if !wireframe.description().is_empty() {
            header.push(format!(r#"<p class="description">{}</p>"#, escape(wireframe.description())));
        }
        header.push(container(
            r#"<div class="metadata">"#,
            "</div>",
            vec![
                format!("<span>Generated: {}</span>", ctx.generated_at.format(TIMESTAMP_FORMAT)),
                format!("<span>Components: {}</span>", wireframe.components.len()),
            ],
        ));

        let components = wireframe
            .components
            .iter()
            .map(|c| {
                let block = component::markup_fragment(c, resolve(&c.position));
                let open = format!(
                    r#"<div class="{}" style="{}">"#,
                    escape(&block.class),
                    escape(&block.inline_style)
                );
                container(
                    &open,
                    "</div>",
                    vec![
                        format!(r#"<div class="component-header">{}</div>"#, escape(&block.label)),
                        format!(r#"<div class="component-content">{}</div>"#, escape(&block.content)),
                    ],
                )
            })
            .collect();

        let listed = annotation::list(&wireframe.annotations);
        let mut annotations = vec!["<h3>Design Annotations</h3>".to_string()];
        if listed.is_empty() {
            annotations.push(format!("<p>{}</p>", NO_ANNOTATIONS));
        }
        for a in &listed {
            annotations.push(container(
                r#"<div class="annotation">"#,
                "</div>",
                vec![
                    format!(
                        r#"<div class="annotation-header">#{} - Component: {}</div>"#,
                        a.number,
                        escape(&a.component)
                    ),
                    format!(r#"<div class="annotation-content">{}</div>"#, escape(&a.note)),
                    format!(r#"<div class="annotation-type">{}</div>"#, escape(&a.kind)),
                ],
            ));
        }

        let body = container(
            r#"<div class="wireframe-container">"#,
            "</div>",
            vec![
                container(r#"<div class="wireframe-header">"#, "</div>", header),
                container(r#"<div class="wireframe-content">"#, "</div>", components),
                container(r#"<div class="wireframe-annotations">"#, "</div>", annotations),
            ],
        );

        let head = container(
            "<head>",
            "</head>",
            vec![
                r#"<meta charset="UTF-8" />"#.to_string(),
                r#"<meta name="viewport" content="width=device-width, initial-scale=1.0" />"#.to_string(),
                format!("<title>{}</title>", title),
                format!("<style>{}</style>", HTML_STYLES),
            ],
        );

        format!(
            "<!DOCTYPE html>\n{}\n",
            container(
                r#"<html lang="en">"#,
                "</html>",
                vec![head, container("<body>", "</body>", vec![body])],
            )
        )
    }
}
