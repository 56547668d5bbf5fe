//! Wireframe Core - Wireframe Synthesis Engine
//!
//! # The Five Laws (Non-Negotiable)
//! 1. The Wireframe Is Read-Only
//! 2. Catalogs Are Frozen
//! 3. Missing Fields Have Defaults, Not Errors
//! 4. Deterministic Output (timestamps live in metadata only)
//! 5. One Failure Per Call

pub mod model;
pub mod catalog;
pub mod geometry;
pub mod component;
pub mod annotation;
pub mod document;
pub mod specification;
pub mod hashing;
pub mod pipeline;

pub use model::{Annotation, Component, ComponentType, LayoutHint, Position, Wireframe};
pub use geometry::{resolve, Rect, HEADER_OFFSET};
pub use document::{
    render_markup, render_markup_at, render_vector, HtmlRenderer, RenderContext, SvgRenderer,
    WireframeRenderer,
};
pub use specification::{synthesize_specification, synthesize_specification_at, SpecificationDocument};
pub use hashing::{canonical_json, compute_content_hash, sha256_hex};
pub use pipeline::{Artifact, ArtifactBundle, ArtifactFormat, SynthesisError, SynthesisPipeline};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
