//! Annotation Placer
//!
//! Vector placement skips annotations without a target and stacks the rest by
//! their filtered index. Both documents number annotations by original index.

use crate::catalog::{PRIMARY, SURFACE, LIGHT_FOREGROUND};
use crate::component::ELLIPSIS;
use crate::geometry::{Primitive, Rect, Text};
use crate::model::Annotation;

pub const COLUMN_X: f64 = 1000.0;
pub const BASE_Y: f64 = 100.0;
pub const SLOT_PITCH: f64 = 60.0;
pub const SLOT_WIDTH: f64 = 180.0;
pub const SLOT_HEIGHT: f64 = 50.0;

/// Vector notes longer than this are cut and suffixed with an ellipsis
pub const NOTE_TRUNCATE_AT: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedAnnotation {
    /// 1-based original index, matching the markup listing
    pub number: usize,
    pub slot: Rect,
    pub note: String,
    pub kind: String,
}

impl PositionedAnnotation {
    pub fn primitives(&self) -> Vec<Primitive> {
        let Rect { x, y, .. } = self.slot;

        let mut number = Text::new(x + 15.0, y + 19.0, "annotation-text", self.number.to_string());
        number.anchor = Some("middle");
        number.fill = Some(LIGHT_FOREGROUND);

        let mut kind = Text::new(x + 30.0, y + 35.0, "annotation-text", format!("Type: {}", self.kind));
        kind.font_size = Some("9");

        vec![
            Primitive::Rect {
                rect: self.slot,
                fill: SURFACE.to_string(),
                stroke: PRIMARY,
                stroke_width: 1.0,
                rx: "4".to_string(),
            },
            Primitive::Circle { cx: x + 15.0, cy: y + 15.0, r: 8.0, fill: PRIMARY },
            Primitive::Text(number),
            Primitive::Text(Text::new(x + 30.0, y + 20.0, "annotation-text", self.note.clone())),
            Primitive::Text(kind),
        ]
    }
}

pub fn truncate_note(note: &str) -> String {
    if note.chars().count() > NOTE_TRUNCATE_AT {
        let head: String = note.chars().take(NOTE_TRUNCATE_AT).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        note.to_string()
    }
}

/// Place annotations in the vector side column
pub fn place(annotations: &[Annotation]) -> Vec<PositionedAnnotation> {
    annotations
        .iter()
        .enumerate()
        .filter(|(_, a)| a.target().is_some())
        .enumerate()
        .map(|(slot, (index, a))| PositionedAnnotation {
            number: index + 1,
            slot: Rect {
                x: COLUMN_X,
                y: BASE_Y + slot as f64 * SLOT_PITCH,
                width: SLOT_WIDTH,
                height: SLOT_HEIGHT,
            },
            note: truncate_note(a.note.as_deref().unwrap_or("")),
            kind: a.kind().to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListedAnnotation {
    /// 1-based original index
    pub number: usize,
    pub component: String,
    pub note: String,
    pub kind: String,
}

/// Every annotation, in input order, with full note text
pub fn list(annotations: &[Annotation]) -> Vec<ListedAnnotation> {
    annotations
        .iter()
        .enumerate()
        .map(|(index, a)| ListedAnnotation {
            number: index + 1,
            component: a.target().unwrap_or("Unknown").to_string(),
            note: a
                .note
                .clone()
                .unwrap_or_else(|| "No description provided".to_string()),
            kind: a.kind().to_string(),
        })
        .collect()
}
