//! Scene elements, their styles and group membership.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::geometry::Bounds;
use crate::model::{DesignerShape, Shape, ShapeType};

pub type ElementId = u64;

/// Opaque group identifier. Elements that share one belong to the same group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Group membership, outermost group first.
pub type GroupChain = SmallVec<[GroupId; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillStyle {
    #[default]
    Solid,
    Hachure,
    CrossHatch,
}

/// Visual attributes of an element.
///
/// Keys the core does not interpret are kept in `extra` so style patches and
/// clipboard payloads round-trip them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub stroke_color: String,
    pub background_color: String,
    #[serde(default)]
    pub fill_style: FillStyle,
    pub stroke_width: f64,
    /// 0..=100
    pub opacity: u8,
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: "#1e1e1e".to_string(),
            background_color: "transparent".to_string(),
            fill_style: FillStyle::Solid,
            stroke_width: 2.0,
            opacity: 100,
            extra: BTreeMap::new(),
        }
    }
}

impl Style {
    /// Default style with a filled background.
    pub fn solid(background: &str) -> Self {
        Self {
            background_color: background.to_string(),
            ..Self::default()
        }
    }

    /// Whether the background paints nothing.
    pub fn is_transparent_fill(&self) -> bool {
        let bg = self.background_color.trim().to_ascii_lowercase();
        if bg.is_empty() || bg == "transparent" || self.opacity == 0 {
            return true;
        }
        // #rrggbbaa / #rgba with a zero alpha channel
        (bg.len() == 9 && bg.starts_with('#') && bg.ends_with("00"))
            || (bg.len() == 5 && bg.starts_with('#') && bg.ends_with('0'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(format!("stroke width {} is not a non-negative number", self.stroke_width));
        }
        if self.opacity > 100 {
            return Err(format!("opacity {} is above 100", self.opacity));
        }
        Ok(())
    }
}

/// A drawable item in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    pub shape: Shape,
    pub style: Style,
    #[serde(default)]
    pub group_ids: GroupChain,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Element {
    pub fn new(id: ElementId, shape: Shape, style: Style) -> Self {
        Self {
            id,
            shape,
            style,
            group_ids: GroupChain::new(),
            is_deleted: false,
        }
    }

    pub fn with_groups<I: IntoIterator<Item = GroupId>>(mut self, groups: I) -> Self {
        self.group_ids = groups.into_iter().collect();
        self
    }

    pub fn kind(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn bounds(&self) -> Bounds {
        self.shape.bounds()
    }

    pub fn outermost_group(&self) -> Option<&GroupId> {
        self.group_ids.first()
    }

    pub fn innermost_group(&self) -> Option<&GroupId> {
        self.group_ids.last()
    }

    pub fn in_group(&self, group_id: &GroupId) -> bool {
        self.group_ids.contains(group_id)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.shape.translate(dx, dy);
    }
}
