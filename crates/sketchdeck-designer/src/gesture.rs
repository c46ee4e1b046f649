//! Two-finger pan and pinch-zoom.
//!
//! The recognizer tracks every live contact. A second contact starts a
//! gesture; from then on each move of either contact produces one frame that
//! is either a pan (the midpoint moved more than the spread changed) or a
//! pinch (zoom scaled by the ratio of the spreads, centered on the midpoint).

use std::collections::BTreeMap;

use crate::input::ContactId;
use crate::model::Point;
use crate::viewport::Viewport;
use sketchdeck_core::constants::GEOMETRY_EPSILON;

/// One classified gesture frame, already applied to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureFrame {
    Pan { dx: f64, dy: f64 },
    Pinch { scale: f64, center: Point, zoom: f64 },
}

/// How a contact change affected gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChange {
    /// Only one contact is down; ordinary pointer handling applies.
    Single,
    /// A second contact arrived and a gesture began.
    GestureStarted,
    /// The gesture was already running.
    GestureContinues,
    /// The gesture ended. `remaining` is still down and starts a new press.
    GestureEnded { remaining: Option<ContactId> },
    /// The last contact lifted with no gesture running.
    Released,
    /// The contact was not being tracked.
    Unknown,
}

#[derive(Debug, Clone, Copy)]
struct PinchState {
    pair: (ContactId, ContactId),
    initial_distance: f64,
    last_distance: f64,
    last_center: Point,
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    contacts: BTreeMap<ContactId, Point>,
    pinch: Option<PinchState>,
    pan_threshold: f64,
}

impl GestureRecognizer {
    pub fn new(pan_threshold: f64) -> Self {
        Self {
            contacts: BTreeMap::new(),
            pinch: None,
            pan_threshold: pan_threshold.max(0.0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.pinch.is_some()
    }

    pub fn live_contacts(&self) -> usize {
        self.contacts.len()
    }

    pub fn position(&self, contact: ContactId) -> Option<Point> {
        self.contacts.get(&contact).copied()
    }

    /// Spread of the pair when the gesture (re)started.
    pub fn initial_distance(&self) -> Option<f64> {
        self.pinch.map(|p| p.initial_distance)
    }

    pub fn contact_down(&mut self, contact: ContactId, position: Point) -> ContactChange {
        self.contacts.insert(contact, position);
        if self.pinch.is_some() {
            return ContactChange::GestureContinues;
        }
        if self.contacts.len() >= 2 {
            self.seed_pinch();
            tracing::debug!("Gesture started with {} contacts", self.contacts.len());
            return ContactChange::GestureStarted;
        }
        ContactChange::Single
    }

    /// Track a move and, during a gesture, classify and apply one frame.
    pub fn contact_move(&mut self, contact: ContactId, position: Point, viewport: &mut Viewport) -> Option<GestureFrame> {
        let slot = self.contacts.get_mut(&contact)?;
        *slot = position;

        let mut pinch = self.pinch?;
        if contact != pinch.pair.0 && contact != pinch.pair.1 {
            return None;
        }
        let (a, b) = self.pair_positions(pinch.pair)?;
        let distance = a.distance_to(&b);
        let center = a.midpoint(&b);

        let spread_change = (distance - pinch.last_distance).abs();
        let drift = center.distance_to(&pinch.last_center);

        let frame = if drift > spread_change + self.pan_threshold {
            let dx = center.x - pinch.last_center.x;
            let dy = center.y - pinch.last_center.y;
            viewport.pan_by(dx, dy);
            Some(GestureFrame::Pan { dx, dy })
        } else if pinch.last_distance > GEOMETRY_EPSILON && distance > GEOMETRY_EPSILON {
            let scale = distance / pinch.last_distance;
            let zoom = viewport.zoom_to_screen_point(center, viewport.zoom() * scale);
            Some(GestureFrame::Pinch { scale, center, zoom })
        } else {
            None
        };

        pinch.last_distance = distance;
        pinch.last_center = center;
        self.pinch = Some(pinch);
        frame
    }

    pub fn contact_up(&mut self, contact: ContactId) -> ContactChange {
        if self.contacts.remove(&contact).is_none() {
            return ContactChange::Unknown;
        }
        let Some(pinch) = self.pinch else {
            return if self.contacts.is_empty() {
                ContactChange::Released
            } else {
                ContactChange::Single
            };
        };

        match self.contacts.len() {
            0 | 1 => {
                self.pinch = None;
                let remaining = self.contacts.keys().next().copied();
                tracing::debug!("Gesture ended, remaining contact {:?}", remaining);
                ContactChange::GestureEnded { remaining }
            }
            _ => {
                if contact == pinch.pair.0 || contact == pinch.pair.1 {
                    // a pair member lifted; continue with the next two contacts
                    self.seed_pinch();
                }
                ContactChange::GestureContinues
            }
        }
    }

    /// Forget a contact the host cancelled. Behaves like a release.
    pub fn cancel_contact(&mut self, contact: ContactId) -> ContactChange {
        self.contact_up(contact)
    }

    fn pair_positions(&self, pair: (ContactId, ContactId)) -> Option<(Point, Point)> {
        Some((*self.contacts.get(&pair.0)?, *self.contacts.get(&pair.1)?))
    }

    fn seed_pinch(&mut self) {
        let mut ids = self.contacts.keys().copied();
        let (Some(first), Some(second)) = (ids.next(), ids.next()) else {
            self.pinch = None;
            return;
        };
        let pair = (first, second);
        self.pinch = self.pair_positions(pair).map(|(a, b)| {
            let distance = a.distance_to(&b);
            PinchState {
                pair,
                initial_distance: distance,
                last_distance: distance,
                last_center: a.midpoint(&b),
            }
        });
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(sketchdeck_core::constants::PAN_THRESHOLD_PX)
    }
}
