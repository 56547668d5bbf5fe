//! Specification Synthesizer - Knowledge Tables
//!
//! Derives the design-specification document. Every lookup has a default
//! branch; nothing here fails on missing fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::catalog;
use crate::model::{Component, Position, Wireframe};

pub const SPEC_VERSION: &str = "1.0";
pub const DEFAULT_SPEC_TITLE: &str = "Untitled Wireframe";
pub const DEFAULT_GRID: &str = "flexbox";
pub const DEFAULT_COLUMNS: u32 = 12;
pub const DEFAULT_BREAKPOINTS: [&str; 3] = ["mobile", "tablet", "desktop"];

const ACCESSIBILITY_BY_TYPE: &[(&str, &[&str])] = &[
    (
        "button",
        &[
            "Must have descriptive text or aria-label",
            "Keyboard accessible (Tab, Enter, Space)",
            "Focus indicator required",
            "Minimum 44px touch target",
        ],
    ),
    (
        "input",
        &[
            "Associated label required",
            "Error states must be announced",
            "Placeholder text should not replace labels",
            "Keyboard navigation support",
        ],
    ),
    (
        "image",
        &[
            "Alt text required for content images",
            "Decorative images should have empty alt",
            "Consider high contrast alternatives",
        ],
    ),
];

const ACCESSIBILITY_NOTES: [&str; 8] = [
    "Ensure minimum 4.5:1 color contrast ratio for text",
    "All interactive elements must be keyboard accessible",
    "Provide alternative text for images and icons",
    "Use semantic HTML elements for proper structure",
    "Implement proper heading hierarchy (h1-h6)",
    "Ensure focus indicators are visible and clear",
    "Test with screen readers and keyboard navigation",
    "Provide skip links for main content areas",
];

const RESPONSIVE_MOBILE: [&str; 4] = [
    "Stack components vertically",
    "Increase touch target sizes to minimum 44px",
    "Simplify navigation to hamburger menu",
    "Optimize content hierarchy for small screens",
];

const RESPONSIVE_TABLET: [&str; 4] = [
    "Adapt grid to 8-column layout",
    "Maintain readable text sizes",
    "Consider both portrait and landscape orientations",
    "Optimize for touch and mouse interactions",
];

const RESPONSIVE_DESKTOP: [&str; 4] = [
    "Utilize full 12-column grid system",
    "Implement hover states for interactive elements",
    "Consider keyboard shortcuts for power users",
    "Optimize for larger screen real estate",
];

const DEVELOPMENT_NOTES: [&str; 10] = [
    "Use semantic HTML5 elements for proper structure",
    "Implement CSS Grid or Flexbox for layout",
    "Consider component-based architecture (React, Vue, etc.)",
    "Implement proper error handling and loading states",
    "Optimize images and assets for web delivery",
    "Ensure cross-browser compatibility",
    "Implement proper form validation",
    "Consider performance optimization techniques",
    "Plan for internationalization if needed",
    "Implement proper SEO meta tags and structure",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationDocument {
    pub project_info: ProjectInfo,
    pub layout_specifications: LayoutSpecification,
    pub component_specifications: Vec<ComponentSpecification>,
    pub design_system: DesignSystem,
    pub user_flow: Vec<Value>,
    pub accessibility_notes: Vec<String>,
    pub responsive_considerations: ResponsiveConsiderations,
    pub development_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpecification {
    pub grid_system: String,
    pub columns: u32,
    pub breakpoints: Vec<String>,
    pub spacing_system: String,
    pub max_width: String,
    pub margins: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpecification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    pub properties: BTreeMap<String, Value>,
    pub states: Vec<String>,
    pub interactions: Vec<Value>,
    pub content_requirements: ContentRequirements,
    pub accessibility_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequirements {
    pub content_type: String,
    pub max_length: String,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
}

impl Default for ContentRequirements {
    fn default() -> Self {
        Self {
            content_type: "text".to_string(),
            max_length: "unlimited".to_string(),
            format: "plain text".to_string(),
            aspect_ratio: None,
            placeholder: None,
            validation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    pub colors: BTreeMap<String, String>,
    pub typography: Typography,
    pub spacing: SpacingTokens,
    pub borders: BorderTokens,
    pub shadows: ShadowTokens,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub primary_font: String,
    pub heading_scale: String,
    pub base_size: String,
    pub line_height: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub base_unit: String,
    pub scale: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderTokens {
    pub radius: Vec<u32>,
    pub width: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub small: String,
    pub medium: String,
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveConsiderations {
    pub mobile: Vec<String>,
    pub tablet: Vec<String>,
    pub desktop: Vec<String>,
}

pub fn synthesize_specification(wireframe: &Wireframe) -> SpecificationDocument {
    synthesize_specification_at(wireframe, Utc::now())
}

pub fn synthesize_specification_at(wireframe: &Wireframe, created_date: DateTime<Utc>) -> SpecificationDocument {
    log::debug!("synthesizing specification for {} components", wireframe.components.len());

    SpecificationDocument {
        project_info: ProjectInfo {
            title: wireframe.title_or(DEFAULT_SPEC_TITLE).to_string(),
            description: wireframe.description().to_string(),
            created_date,
            version: SPEC_VERSION.to_string(),
        },
        layout_specifications: layout_specification(wireframe),
        component_specifications: wireframe.components.iter().map(component_specification).collect(),
        design_system: design_system(),
        user_flow: wireframe.user_flow.clone(),
        accessibility_notes: owned(&ACCESSIBILITY_NOTES),
        responsive_considerations: ResponsiveConsiderations {
            mobile: owned(&RESPONSIVE_MOBILE),
            tablet: owned(&RESPONSIVE_TABLET),
            desktop: owned(&RESPONSIVE_DESKTOP),
        },
        development_notes: owned(&DEVELOPMENT_NOTES),
    }
}

fn layout_specification(wireframe: &Wireframe) -> LayoutSpecification {
    let layout = &wireframe.layout;
    LayoutSpecification {
        grid_system: layout.kind.clone().unwrap_or_else(|| DEFAULT_GRID.to_string()),
        columns: layout.columns.unwrap_or(DEFAULT_COLUMNS),
        breakpoints: layout
            .breakpoints
            .clone()
            .unwrap_or_else(|| owned(&DEFAULT_BREAKPOINTS)),
        spacing_system: "8px base unit".to_string(),
        max_width: "1200px".to_string(),
        margins: "24px".to_string(),
    }
}

pub fn component_specification(component: &Component) -> ComponentSpecification {
    let kind = component.kind.as_str();
    ComponentSpecification {
        id: component.id.clone().unwrap_or_else(|| "unknown".to_string()),
        kind: kind.to_string(),
        position: component.position.clone(),
        properties: component.properties.clone(),
        states: component.states.clone(),
        interactions: component.interactions.clone(),
        content_requirements: content_requirements(kind),
        accessibility_requirements: accessibility_requirements(kind),
    }
}

pub fn content_requirements(kind: &str) -> ContentRequirements {
    let base = ContentRequirements::default();
    match kind {
        "button" => ContentRequirements {
            content_type: "action text".to_string(),
            max_length: "25 characters".to_string(),
            format: "title case".to_string(),
            ..base
        },
        "image" => ContentRequirements {
            content_type: "image".to_string(),
            format: "JPG, PNG, WebP".to_string(),
            aspect_ratio: Some("16:9 recommended".to_string()),
            ..base
        },
        "input" => ContentRequirements {
            content_type: "user input".to_string(),
            placeholder: Some("required".to_string()),
            validation: Some("as needed".to_string()),
            ..base
        },
        _ => base,
    }
}

pub fn accessibility_requirements(kind: &str) -> Vec<String> {
    ACCESSIBILITY_BY_TYPE
        .iter()
        .find(|(tag, _)| *tag == kind)
        .map(|(_, reqs)| owned(reqs))
        .unwrap_or_default()
}

pub fn design_system() -> DesignSystem {
    DesignSystem {
        colors: catalog::palette(),
        typography: Typography {
            primary_font: "system-ui, -apple-system, sans-serif".to_string(),
            heading_scale: "1.25 (Major Third)".to_string(),
            base_size: "16px".to_string(),
            line_height: "1.6".to_string(),
        },
        spacing: SpacingTokens {
            base_unit: "8px".to_string(),
            scale: vec![4, 8, 16, 24, 32, 48, 64, 96],
        },
        borders: BorderTokens {
            radius: vec![0, 4, 8, 16],
            width: vec![1, 2, 4],
        },
        shadows: ShadowTokens {
            small: "0 1px 3px rgba(0,0,0,0.12)".to_string(),
            medium: "0 4px 6px rgba(0,0,0,0.12)".to_string(),
            large: "0 10px 25px rgba(0,0,0,0.12)".to_string(),
        },
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
