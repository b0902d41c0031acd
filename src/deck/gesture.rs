//! Drag gesture lifecycle for the active card.
//!
//! ```text
//! Idle ──press──→ Dragging ──release, |x| > commit──→ Resolving ──settled──→ Done
//!  ↑                 │  ↑
//!  │        release, |x| ≤ commit
//!  │                 ↓  │ press
//!  └────settled─── SpringBack
//! ```
//!
//! The resolution is reported by the call that handles the release, before
//! any exit frame is stepped. Everything after that is cosmetic.

use serde::{Deserialize, Serialize};

use crate::deck::spring::{Spring, SpringConfig};

/// Final outcome of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Swiped right.
    Accept,
    /// Swiped left.
    Reject,
}

impl SwipeDirection {
    /// +1 for accept, -1 for reject.
    pub fn sign(self) -> f64 {
        match self {
            SwipeDirection::Accept => 1.0,
            SwipeDirection::Reject => -1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SwipeDirection::Accept => "accept",
            SwipeDirection::Reject => "reject",
        }
    }
}

/// Card displacement from its resting position, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOffset {
    pub x: f64,
    pub y: f64,
}

impl DragOffset {
    pub const ORIGIN: DragOffset = DragOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tunables for swipe classification and animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Fraction of the surface width a release must exceed to commit.
    #[serde(default = "default_commit_ratio")]
    pub commit_ratio: f64,
    /// Horizontal space between the card and the surface edges, in total.
    #[serde(default = "default_card_inset")]
    pub card_inset: f64,
    /// Exit target as a multiple of the surface width.
    #[serde(default = "default_exit_multiplier")]
    pub exit_multiplier: f64,
    /// Extra downward travel during the exit animation.
    #[serde(default = "default_exit_drop")]
    pub exit_drop: f64,
    #[serde(default)]
    pub spring: SpringConfig,
}

fn default_commit_ratio() -> f64 {
    0.3
}

fn default_card_inset() -> f64 {
    60.0
}

fn default_exit_multiplier() -> f64 {
    1.5
}

fn default_exit_drop() -> f64 {
    100.0
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_ratio: default_commit_ratio(),
            card_inset: default_card_inset(),
            exit_multiplier: default_exit_multiplier(),
            exit_drop: default_exit_drop(),
            spring: SpringConfig::default(),
        }
    }
}

/// Input samples fed to the active card's gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    /// Pointer went down on the card.
    Press,
    /// Pointer moved; translation relative to the press point.
    Drag { dx: f64, dy: f64 },
    /// Pointer lifted.
    Release,
    /// Animation frame, `dt` in seconds.
    Frame { dt: f64 },
}

/// Observable consequence of a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEffect {
    None,
    /// The gesture committed. Emitted once per gesture.
    Resolved(SwipeDirection),
    /// Released under the commit distance; springing back.
    Cancelled,
    /// A running animation came to rest.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    Dragging {
        /// Card offset at the moment of the press.
        origin: DragOffset,
        offset: DragOffset,
    },
    SpringBack {
        x: Spring,
        y: Spring,
    },
    Resolving {
        direction: SwipeDirection,
        x: Spring,
        y: Spring,
    },
    /// Exit animation finished; the card can be dropped.
    Done {
        direction: SwipeDirection,
        offset: DragOffset,
    },
}

/// Gesture state owned by exactly one active card.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeGesture {
    phase: GesturePhase,
    surface_width: f64,
    config: GestureConfig,
}

impl SwipeGesture {
    pub fn new(surface_width: f64, config: GestureConfig) -> Self {
        Self {
            phase: GesturePhase::Idle,
            surface_width,
            config,
        }
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    pub fn set_surface_width(&mut self, width: f64) {
        self.surface_width = width;
    }

    /// Distance a release must exceed to commit.
    pub fn commit_distance(&self) -> f64 {
        self.surface_width * self.config.commit_ratio
    }

    /// Current displacement of the card.
    pub fn offset(&self) -> DragOffset {
        match self.phase {
            GesturePhase::Idle => DragOffset::ORIGIN,
            GesturePhase::Dragging { offset, .. } => offset,
            GesturePhase::SpringBack { x, y } | GesturePhase::Resolving { x, y, .. } => {
                DragOffset::new(x.position(), y.position())
            }
            GesturePhase::Done { offset, .. } => offset,
        }
    }

    /// Direction once committed, even while the exit animation runs.
    pub fn resolution(&self) -> Option<SwipeDirection> {
        match self.phase {
            GesturePhase::Resolving { direction, .. } | GesturePhase::Done { direction, .. } => {
                Some(direction)
            }
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, GesturePhase::Done { .. })
    }

    pub fn apply(&mut self, input: GestureInput) -> GestureEffect {
        match input {
            GestureInput::Press => self.press(),
            GestureInput::Drag { dx, dy } => {
                if let GesturePhase::Dragging { origin, offset } = &mut self.phase {
                    *offset = DragOffset::new(origin.x + dx, origin.y + dy);
                }
                GestureEffect::None
            }
            GestureInput::Release => self.release(),
            GestureInput::Frame { dt } => self.frame(dt),
        }
    }

    /// Commits without a drag, as if the card had been flung.
    ///
    /// Returns `GestureEffect::None` if the gesture already resolved.
    pub fn commit(&mut self, direction: SwipeDirection) -> GestureEffect {
        if self.resolution().is_some() {
            return GestureEffect::None;
        }
        let from = self.offset();
        self.start_exit(direction, from);
        GestureEffect::Resolved(direction)
    }

    fn press(&mut self) -> GestureEffect {
        match self.phase {
            GesturePhase::Idle => {
                self.phase = GesturePhase::Dragging {
                    origin: DragOffset::ORIGIN,
                    offset: DragOffset::ORIGIN,
                };
            }
            // Grab the card mid-flight.
            GesturePhase::SpringBack { x, y } => {
                let current = DragOffset::new(x.position(), y.position());
                self.phase = GesturePhase::Dragging {
                    origin: current,
                    offset: current,
                };
            }
            _ => {}
        }
        GestureEffect::None
    }

    fn release(&mut self) -> GestureEffect {
        let GesturePhase::Dragging { offset, .. } = self.phase else {
            return GestureEffect::None;
        };

        match classify(offset.x, self.commit_distance()) {
            Some(direction) => {
                self.start_exit(direction, offset);
                GestureEffect::Resolved(direction)
            }
            None => {
                let spring = self.config.spring;
                self.phase = GesturePhase::SpringBack {
                    x: Spring::new(offset.x, 0.0, spring),
                    y: Spring::new(offset.y, 0.0, spring),
                };
                GestureEffect::Cancelled
            }
        }
    }

    fn start_exit(&mut self, direction: SwipeDirection, from: DragOffset) {
        let spring = self.config.spring;
        let to_x = direction.sign() * self.surface_width * self.config.exit_multiplier;
        let to_y = from.y + self.config.exit_drop;
        self.phase = GesturePhase::Resolving {
            direction,
            x: Spring::new(from.x, to_x, spring),
            y: Spring::new(from.y, to_y, spring),
        };
    }

    fn frame(&mut self, dt: f64) -> GestureEffect {
        match &mut self.phase {
            GesturePhase::SpringBack { x, y } => {
                x.step(dt);
                y.step(dt);
                if x.is_settled() && y.is_settled() {
                    self.phase = GesturePhase::Idle;
                    return GestureEffect::Settled;
                }
            }
            GesturePhase::Resolving { direction, x, y } => {
                x.step(dt);
                y.step(dt);
                if x.is_settled() && y.is_settled() {
                    let done = GesturePhase::Done {
                        direction: *direction,
                        offset: DragOffset::new(x.position(), y.position()),
                    };
                    self.phase = done;
                    return GestureEffect::Settled;
                }
            }
            _ => {}
        }
        GestureEffect::None
    }
}

/// Classifies a release at horizontal offset `x`.
///
/// `None` means the gesture is cancelled.
pub fn classify(x: f64, commit_distance: f64) -> Option<SwipeDirection> {
    if x.abs() <= commit_distance {
        None
    } else if x > 0.0 {
        Some(SwipeDirection::Accept)
    } else {
        Some(SwipeDirection::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(width: f64) -> SwipeGesture {
        SwipeGesture::new(width, GestureConfig::default())
    }

    fn drag_and_release(g: &mut SwipeGesture, dx: f64, dy: f64) -> GestureEffect {
        g.apply(GestureInput::Press);
        g.apply(GestureInput::Drag { dx, dy });
        g.apply(GestureInput::Release)
    }

    fn settle(g: &mut SwipeGesture) {
        for _ in 0..600 {
            if g.apply(GestureInput::Frame { dt: 1.0 / 60.0 }) == GestureEffect::Settled {
                return;
            }
        }
        panic!("gesture never settled: {:?}", g.phase());
    }

    #[test]
    fn drag_updates_offset() {
        let mut g = gesture(300.0);
        g.apply(GestureInput::Press);
        g.apply(GestureInput::Drag { dx: 42.0, dy: -7.0 });
        assert_eq!(g.offset(), DragOffset::new(42.0, -7.0));
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut g = gesture(300.0);
        g.apply(GestureInput::Drag { dx: 200.0, dy: 0.0 });
        assert_eq!(g.offset(), DragOffset::ORIGIN);
        assert_eq!(g.apply(GestureInput::Release), GestureEffect::None);
    }

    #[test]
    fn exactly_at_threshold_cancels() {
        let mut g = gesture(300.0);
        assert_eq!(drag_and_release(&mut g, 90.0, 0.0), GestureEffect::Cancelled);
    }

    #[test]
    fn cancelled_springs_back_to_origin_and_idles() {
        let mut g = gesture(300.0);
        assert_eq!(drag_and_release(&mut g, -60.0, 35.0), GestureEffect::Cancelled);
        assert!(matches!(g.phase(), GesturePhase::SpringBack { .. }));
        settle(&mut g);
        assert_eq!(g.phase(), &GesturePhase::Idle);
        assert_eq!(g.offset(), DragOffset::ORIGIN);
    }

    #[test]
    fn resolution_is_reported_before_any_frame() {
        let mut g = gesture(300.0);
        let effect = drag_and_release(&mut g, 120.0, 10.0);
        assert_eq!(effect, GestureEffect::Resolved(SwipeDirection::Accept));
        // Still at the release point: no animation has run yet.
        assert_eq!(g.offset(), DragOffset::new(120.0, 10.0));
    }

    #[test]
    fn exit_animation_heads_off_screen_and_down() {
        let mut g = gesture(300.0);
        drag_and_release(&mut g, -150.0, 20.0);
        match g.phase() {
            GesturePhase::Resolving { direction, x, y } => {
                assert_eq!(*direction, SwipeDirection::Reject);
                assert_eq!(x.target(), -450.0);
                assert_eq!(y.target(), 120.0);
            }
            other => panic!("unexpected phase {other:?}"),
        }
        settle(&mut g);
        assert!(g.is_done());
        assert_eq!(g.offset(), DragOffset::new(-450.0, 120.0));
    }

    #[test]
    fn resolved_gesture_ignores_further_input() {
        let mut g = gesture(300.0);
        drag_and_release(&mut g, 200.0, 0.0);
        assert_eq!(drag_and_release(&mut g, -200.0, 0.0), GestureEffect::None);
        assert_eq!(g.commit(SwipeDirection::Reject), GestureEffect::None);
        assert_eq!(g.resolution(), Some(SwipeDirection::Accept));
    }

    #[test]
    fn press_during_spring_back_grabs_current_position() {
        let mut g = gesture(300.0);
        drag_and_release(&mut g, 80.0, 0.0);
        g.apply(GestureInput::Frame { dt: 1.0 / 60.0 });
        let mid = g.offset();
        assert!(mid.x > 0.0 && mid.x < 80.0);

        g.apply(GestureInput::Press);
        g.apply(GestureInput::Drag { dx: 50.0, dy: 0.0 });
        assert_eq!(g.offset().x, mid.x + 50.0);
    }

    #[test]
    fn commit_from_idle_resolves_once() {
        let mut g = gesture(300.0);
        assert_eq!(
            g.commit(SwipeDirection::Accept),
            GestureEffect::Resolved(SwipeDirection::Accept)
        );
        assert_eq!(g.commit(SwipeDirection::Accept), GestureEffect::None);
    }

    #[test]
    fn classify_by_sign() {
        assert_eq!(classify(91.0, 90.0), Some(SwipeDirection::Accept));
        assert_eq!(classify(-91.0, 90.0), Some(SwipeDirection::Reject));
        assert_eq!(classify(-90.0, 90.0), None);
        assert_eq!(classify(0.0, 90.0), None);
    }
}
