//! Document Assembler - Two Independent Renderers
//!
//! The vector and markup documents share one input but diverge on header
//! reservation, content truncation and annotation filtering. Each format keeps
//! its own policy in its own renderer.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::model::Wireframe;
use crate::pipeline::ArtifactFormat;

pub mod html;
pub mod svg;

pub use html::HtmlRenderer;
pub use svg::SvgRenderer;

/// Title shown when the wireframe has none
pub const DEFAULT_TITLE: &str = "Wireframe";

/// Wall-clock inputs. Only metadata fields may read from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub generated_at: DateTime<Utc>,
}

impl RenderContext {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }
}

/// Renders a complete document from a wireframe
pub trait WireframeRenderer {
    fn format(&self) -> ArtifactFormat;
    fn render(&self, wireframe: &Wireframe, ctx: &RenderContext) -> String;
}

pub fn render_vector(wireframe: &Wireframe) -> String {
    SvgRenderer.render(wireframe, &RenderContext::now())
}

pub fn render_markup(wireframe: &Wireframe) -> String {
    render_markup_at(wireframe, Utc::now())
}

pub fn render_markup_at(wireframe: &Wireframe, generated_at: DateTime<Utc>) -> String {
    HtmlRenderer.render(wireframe, &RenderContext::at(generated_at))
}

/// XML-escape `raw`, dropping C0 control characters XML 1.0 cannot carry
pub(crate) fn escape(raw: &str) -> Cow<'_, str> {
    if raw.chars().any(is_forbidden_control) {
        let cleaned: String = raw.chars().filter(|c| !is_forbidden_control(*c)).collect();
        Cow::Owned(quick_xml::escape::escape(cleaned.as_str()).into_owned())
    } else {
        quick_xml::escape::escape(raw)
    }
}

fn is_forbidden_control(c: char) -> bool {
    c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')
}

/// An element holding `children`, rendered as an empty pair when there are none
pub(crate) fn container(open: &str, close: &str, children: Vec<String>) -> String {
    if children.is_empty() {
        format!("{}{}", open, close)
    } else {
        format!("{}\n{}\n{}", open, children.join("\n"), close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_drops_forbidden_controls() {
        assert_eq!(escape("a\u{0001}b\u{001f}<c>"), "ab&lt;c&gt;");
        assert_eq!(escape("tab\tline\ncr\r"), "tab\tline\ncr\r");
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
    }
}
