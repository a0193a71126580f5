//! Pointer gesture interpretation for the top card.
//!
//! A press that never travels further than [`DRAG_THRESHOLD_PX`] is a tap and
//! flips the card. Once the threshold is crossed the card follows the pointer;
//! on release the horizontal travel is compared against [`SWIPE_FRACTION`] of
//! the viewport width to decide between a swipe and a snap back.

use crate::core::Verdict;

pub const DRAG_THRESHOLD_PX: f32 = 10.0;
pub const SWIPE_FRACTION: f32 = 0.25;
pub const ROTATION_DEG_PER_PX: f32 = 0.05;

/// How far past the viewport edge a judged card travels while exiting.
const EXIT_TRAVEL_FACTOR: f32 = 1.5;
const EXIT_EXTRA_ROTATION_DEG: f32 = 30.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Offset and tilt applied to a card relative to its resting place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardTransform {
    pub dx: f32,
    pub dy: f32,
    pub rotation_deg: f32,
}

impl CardTransform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_delta(dx: f32, dy: f32) -> Self {
        Self { dx, dy, rotation_deg: ROTATION_DEG_PER_PX * dx }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

/// Position of an exiting card `progress` (0..=1) of the way through its exit.
pub fn exit_transform(
    from: CardTransform,
    verdict: Verdict,
    progress: f32,
    viewport_width: f32,
) -> CardTransform {
    let t = progress.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t) * (1.0 - t);
    let direction = verdict.exit_direction();

    CardTransform {
        dx: from.dx + direction * viewport_width * EXIT_TRAVEL_FACTOR * eased,
        dy: from.dy,
        rotation_deg: from.rotation_deg + direction * EXIT_EXTRA_ROTATION_DEG * eased,
    }
}

/// Swipe classification of a drag that ended `dx` pixels from where it began.
pub fn classify_release(dx: f32, viewport_width: f32) -> Option<Verdict> {
    let threshold = viewport_width * SWIPE_FRACTION;
    if dx < -threshold {
        Some(Verdict::Wrong)
    } else if dx > threshold {
        Some(Verdict::Right)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum GestureState {
    #[default]
    Idle,
    Pressed {
        start: Point,
    },
    Dragging {
        start: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Release without a matching press.
    Ignored,
    Flip,
    SnapBack,
    Swipe(Verdict),
}

#[derive(Debug, Default)]
pub struct GestureInterpreter {
    state: GestureState,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.state = GestureState::Pressed { start: at };
    }

    /// Returns the transform to apply to the card, if it should follow the pointer.
    pub fn pointer_move(&mut self, at: Point) -> Option<CardTransform> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pressed { start } => {
                if start.distance_to(at) > DRAG_THRESHOLD_PX {
                    self.state = GestureState::Dragging { start };
                    Some(CardTransform::from_delta(at.x - start.x, at.y - start.y))
                } else {
                    None
                }
            }
            GestureState::Dragging { start } => {
                Some(CardTransform::from_delta(at.x - start.x, at.y - start.y))
            }
        }
    }

    pub fn pointer_up(&mut self, at: Point, viewport_width: f32) -> GestureOutcome {
        let state = std::mem::take(&mut self.state);
        match state {
            GestureState::Idle => GestureOutcome::Ignored,
            GestureState::Pressed { .. } => GestureOutcome::Flip,
            GestureState::Dragging { start } => match classify_release(at.x - start.x, viewport_width) {
                Some(verdict) => GestureOutcome::Swipe(verdict),
                None => GestureOutcome::SnapBack,
            },
        }
    }
}
