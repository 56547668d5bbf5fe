//! Synthesis Pipeline - Single Entry Point
//!
//! CRITICAL: synthesize decodes exactly once. Either every artifact is produced
//! or the call fails with one error. No partial bundles.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::document::{HtmlRenderer, RenderContext, SvgRenderer, WireframeRenderer};
use crate::hashing::{compute_content_hash, compute_input_hash};
use crate::model::Wireframe;
use crate::specification::synthesize_specification_at;
use crate::ENGINE_VERSION;

pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Malformed wireframe: {0}")]
    MalformedInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Svg,
    Html,
    Json,
}

impl ArtifactFormat {
    pub fn filename(&self) -> &'static str {
        match self {
            ArtifactFormat::Svg => "wireframe.svg",
            ArtifactFormat::Html => "wireframe.html",
            ArtifactFormat::Json => "design-spec.json",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ArtifactFormat::Svg => "image/svg+xml",
            ArtifactFormat::Html => "text/html",
            ArtifactFormat::Json => "application/json",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub format: ArtifactFormat,
    pub filename: String,
    pub media_type: String,
    pub size: usize,
    pub hash: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_base64: String,
    #[serde(skip)]
    pub content: String,
}

impl Artifact {
    pub fn new(format: ArtifactFormat, content: String) -> Self {
        Self {
            format,
            filename: format.filename().to_string(),
            media_type: format.media_type().to_string(),
            size: content.len(),
            hash: compute_content_hash(&content),
            data_base64: base64::engine::general_purpose::STANDARD.encode(content.as_bytes()),
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub id: String,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub input_hash: String,
    pub title: String,
    pub component_count: usize,
    pub annotation_count: usize,
    pub artifacts: Vec<Artifact>,
}

impl ArtifactBundle {
    pub fn artifact(&self, format: ArtifactFormat) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.format == format)
    }

    /// The bundle without artifact payloads
    pub fn manifest(&self) -> Self {
        let mut manifest = self.clone();
        for artifact in &mut manifest.artifacts {
            artifact.data_base64.clear();
            artifact.content.clear();
        }
        manifest
    }

    /// Write every artifact plus `manifest.json` into `dir`
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, SynthesisError> {
        fs::create_dir_all(dir)?;

        let mut written = vec![];
        for artifact in &self.artifacts {
            let path = dir.join(&artifact.filename);
            fs::write(&path, artifact.content.as_bytes())?;
            written.push(path);
        }

        let path = dir.join(MANIFEST_FILENAME);
        fs::write(&path, serde_json::to_string_pretty(&self.manifest())?)?;
        written.push(path);

        log::debug!("wrote {} files to {}", written.len(), dir.display());
        Ok(written)
    }
}

/// The synthesis pipeline - decode once, fan out to every renderer
pub struct SynthesisPipeline {
    renderers: Vec<Box<dyn WireframeRenderer + Send + Sync>>,
}

impl SynthesisPipeline {
    pub fn new() -> Self {
        Self {
            renderers: vec![Box::new(SvgRenderer), Box::new(HtmlRenderer)],
        }
    }

    /// Decode raw input. This is the ONLY malformed-input gate.
    pub fn decode(&self, input: &Value) -> Result<Wireframe, SynthesisError> {
        Wireframe::from_value(input.clone())
    }

    pub fn synthesize(&self, input: &Value) -> Result<ArtifactBundle, SynthesisError> {
        let wireframe = self.decode(input)?;
        self.synthesize_wireframe_at(&wireframe, Utc::now())
    }

    pub fn synthesize_wireframe_at(
        &self,
        wireframe: &Wireframe,
        created_at: DateTime<Utc>,
    ) -> Result<ArtifactBundle, SynthesisError> {
        let ctx = RenderContext::at(created_at);

        let mut artifacts: Vec<Artifact> = self
            .renderers
            .iter()
            .map(|r| Artifact::new(r.format(), r.render(wireframe, &ctx)))
            .collect();

        let spec = synthesize_specification_at(wireframe, created_at);
        artifacts.push(Artifact::new(ArtifactFormat::Json, serde_json::to_string_pretty(&spec)?));

        let bundle = ArtifactBundle {
            id: Uuid::new_v4().to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            created_at,
            input_hash: compute_input_hash(wireframe, ENGINE_VERSION)?,
            title: wireframe.title_or(crate::document::DEFAULT_TITLE).to_string(),
            component_count: wireframe.components.len(),
            annotation_count: wireframe.annotations.len(),
            artifacts,
        };

        log::info!(
            "synthesized bundle {} ({} artifacts, {} components)",
            bundle.id,
            bundle.artifacts.len(),
            bundle.component_count
        );
        Ok(bundle)
    }
}

impl Default for SynthesisPipeline {
    fn default() -> Self {
        Self::new()
    }
}
