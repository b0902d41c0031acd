//! Swipe interaction core.
//!
//! Given the live drag offsets of the topmost card, decides whether a gesture
//! is still in progress, committed, or cancelled, and derives every visual
//! transform of the stack from plain state.
//!
//! # Flow
//!
//! ```text
//! pointer ──→ SwipeSession ──→ SwipeGesture ──→ GestureEffect::Resolved
//!                  │                                   │
//!                  └── card_transform() per frame      └──→ deck reducer
//! ```
//!
//! - [`gesture`]: per-card drag state machine and threshold classification
//! - [`spring`]: damped spring driving settle and exit animations
//! - [`transform`]: pure rotation/scale/opacity derivation
//! - [`stack`]: visible window, input routing and compositing

pub mod gesture;
pub mod interpolate;
pub mod spring;
pub mod stack;
pub mod transform;

pub use gesture::{
    classify, DragOffset, GestureConfig, GestureEffect, GestureInput, GesturePhase,
    SwipeDirection, SwipeGesture,
};
pub use interpolate::{interpolate, Extrapolation};
pub use spring::{Spring, SpringConfig};
pub use stack::{DepartingCard, StackWindow, StackedCard, SwipeSession};
pub use transform::{
    badge_opacity, card_transform, rotation, stack_nudge, stack_opacity, stack_scale,
    BadgeOpacity, CardTransform, MAX_ROTATION_DEG, VISIBLE_DEPTH,
};
