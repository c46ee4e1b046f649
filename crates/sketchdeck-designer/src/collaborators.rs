//! Seams to the host application.
//!
//! The interaction core never owns persistence, rendering or the system
//! clipboard. It reaches those through these traits; the in-memory
//! implementations serve tests and headless use.

use crate::element::{Element, Style};
use crate::model::ShapeType;

/// Supplies the style for newly created elements.
pub trait StyleSource {
    fn default_style(&self, kind: ShapeType) -> Style;
}

/// The stock style for every kind.
#[derive(Debug, Clone, Default)]
pub struct DefaultStyleSource;

impl StyleSource for DefaultStyleSource {
    fn default_style(&self, _kind: ShapeType) -> Style {
        Style::default()
    }
}

/// One fixed style for every kind.
#[derive(Debug, Clone)]
pub struct FixedStyleSource(pub Style);

impl StyleSource for FixedStyleSource {
    fn default_style(&self, _kind: ShapeType) -> Style {
        self.0.clone()
    }
}

/// Receives elements the user adds to their library.
pub trait LibrarySink {
    fn add_to_library(&mut self, elements: Vec<Element>);
}

/// Text clipboard used for copying and pasting styles.
pub trait StyleClipboard {
    fn write_text(&mut self, text: String);
    fn read_text(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl StyleClipboard for MemoryClipboard {
    fn write_text(&mut self, text: String) {
        self.contents = Some(text);
    }

    fn read_text(&self) -> Option<String> {
        self.contents.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLibrary {
    pub items: Vec<Vec<Element>>,
}

impl LibrarySink for MemoryLibrary {
    fn add_to_library(&mut self, elements: Vec<Element>) {
        self.items.push(elements);
    }
}
