//! Level file parser.
//!
//! A level is a text file with one element per line:
//!
//! ```text
//! ElementType AnimationName GridX GridY
//! ```
//!
//! `ElementType` is `Tile` (solid, gets a collision box the size of its
//! animation frame) or `Dec` (decoration, no box). Grid coordinates are
//! floats counted in cells from the bottom-left corner of the screen.
//!
//! Malformed lines are logged and skipped; a missing file is an empty level.

use std::fs;
use std::path::Path;

use glam::Vec2;
use log::{info, warn};

use crate::error::LevelLineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Tile,
    Dec,
}

impl ElementKind {
    /// Entity tag for elements of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Tile => "tile",
            ElementKind::Dec => "dec",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelElement {
    pub kind: ElementKind,
    pub animation: String,
    pub grid: Vec2,
    /// 1-based source line.
    pub line: usize,
}

fn parse_coordinate(token: &str) -> Result<f32, LevelLineError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LevelLineError::BadCoordinate(token.to_owned()))
}

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<LevelElement>, LevelLineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    let &[kind, animation, x, y] = tokens.as_slice() else {
        return Err(LevelLineError::TokenCount(tokens.len()));
    };
    let kind = match kind {
        "Tile" => ElementKind::Tile,
        "Dec" => ElementKind::Dec,
        other => return Err(LevelLineError::UnknownElement(other.to_owned())),
    };
    let grid = Vec2::new(parse_coordinate(x)?, parse_coordinate(y)?);
    Ok(Some(LevelElement {
        kind,
        animation: animation.to_owned(),
        grid,
        line: line_number,
    }))
}

/// Parse a whole level, skipping and logging bad lines.
pub fn parse_level(text: &str) -> Vec<LevelElement> {
    let mut elements = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(line, line_number) {
            Ok(Some(element)) => elements.push(element),
            Ok(None) => {}
            Err(err) => warn!("Error line {line_number}: {err}"),
        }
    }
    elements
}

/// Read and parse a level file. A missing or unreadable file is an empty level.
pub fn load_level(path: &Path) -> Vec<LevelElement> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let elements = parse_level(&text);
            info!("Loaded level {:?}: {} elements", path, elements.len());
            elements
        }
        Err(err) => {
            warn!("Could not open level file {:?}: {}", path, err);
            Vec::new()
        }
    }
}
