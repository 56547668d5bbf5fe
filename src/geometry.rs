//! Geometry Resolver - Declared Position to Draw Coordinates

use crate::model::Position;

/// Vertical band reserved above vector content for the title and description
pub const HEADER_OFFSET: f64 = 70.0;

pub const DEFAULT_WIDTH: f64 = 100.0;
pub const DEFAULT_HEIGHT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn shifted_down(self, dy: f64) -> Self {
        Self { y: self.y + dy, ..self }
    }
}

/// Resolve a declared position. Negative or zero sizes pass through untouched.
pub fn resolve(position: &Position) -> Rect {
    Rect {
        x: position.x().unwrap_or(0.0),
        y: position.y().unwrap_or(0.0),
        width: position.width().unwrap_or(DEFAULT_WIDTH),
        height: position.height().unwrap_or(DEFAULT_HEIGHT),
    }
}

/// Resolved geometry in vector-document coordinates (header band applied)
pub fn resolve_vector(position: &Position) -> Rect {
    resolve(position).shifted_down(HEADER_OFFSET)
}

/// Text primitive. Optional fields are omitted from output when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub class: &'static str,
    pub fill: Option<&'static str>,
    pub anchor: Option<&'static str>,
    pub font_size: Option<&'static str>,
    pub body: String,
}

impl Text {
    pub fn new(x: f64, y: f64, class: &'static str, body: impl Into<String>) -> Self {
        Self {
            x,
            y,
            class,
            fill: None,
            anchor: None,
            font_size: None,
            body: body.into(),
        }
    }
}

/// Vector drawing primitives, independent of output syntax
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        rect: Rect,
        fill: String,
        stroke: &'static str,
        stroke_width: f64,
        rx: String,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: &'static str,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: &'static str,
    },
    Text(Text),
}
