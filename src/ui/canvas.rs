// src/ui/canvas.rs

//! Draw instructions: the renderer-neutral description of a report page.
//!
//! Coordinates are canvas units with the origin in the top-left corner and
//! `y` growing downward. Colors and fonts are roles, resolved to concrete
//! values by the exporter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageRole {
    Cover,
    Summary,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorRole {
    /// Default text and banner fill.
    Ink,
    Positive,
    Alert,
    Warning,
}

impl ColorRole {
    /// RGB components in `0.0..=1.0`.
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            ColorRole::Ink => (0.0, 0.0, 0.0),
            ColorRole::Positive => (0.0, 0.5, 0.0),
            ColorRole::Alert => (1.0, 0.0, 0.0),
            ColorRole::Warning => (1.0, 0.647, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontRole {
    Title,
    Header,
    Body,
}

/// Axis-aligned rectangle from `(x0, y0)` (top-left) to `(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paint {
    Fill,
    Outline { width: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DrawInstruction {
    Text {
        text: String,
        x: i32,
        y: i32,
        color: ColorRole,
        font: FontRole,
    },
    Rect {
        bounds: Bounds,
        paint: Paint,
        color: ColorRole,
    },
}

/// One fixed-size page of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPage {
    pub role: PageRole,
    pub instructions: Vec<DrawInstruction>,
}

impl ReportPage {
    pub fn new(role: PageRole) -> Self {
        Self { role, instructions: Vec::new() }
    }

    pub fn text(&mut self, x: i32, y: i32, text: impl Into<String>, color: ColorRole, font: FontRole) {
        self.instructions.push(DrawInstruction::Text { text: text.into(), x, y, color, font });
    }

    pub fn rect(&mut self, bounds: Bounds, paint: Paint, color: ColorRole) {
        self.instructions.push(DrawInstruction::Rect { bounds, paint, color });
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Text runs in draw order.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().filter_map(|i| match i {
            DrawInstruction::Text { text, .. } => Some(text.as_str()),
            DrawInstruction::Rect { .. } => None,
        })
    }
}
