//! Per-frame visual transforms derived from drag offsets and stack position.
//!
//! Nothing here holds state: the same offsets and stack index always produce
//! the same transform.

use crate::deck::gesture::DragOffset;
use crate::deck::interpolate::{interpolate, Extrapolation};

/// Rotation at a horizontal offset of one full surface width.
pub const MAX_ROTATION_DEG: f64 = 20.0;

/// Number of cards that stay visible in the stack.
pub const VISIBLE_DEPTH: usize = 3;

const STACK_SCALE: [f64; 3] = [0.9, 0.95, 1.0];
const STACK_NUDGE: [f64; 3] = [20.0, 10.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    /// Drag offset plus the stack nudge.
    pub translate_y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Opacity of the accept/reject overlays on the active card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BadgeOpacity {
    pub accept: f64,
    pub reject: f64,
}

pub fn rotation(offset_x: f64, surface_width: f64) -> f64 {
    if surface_width <= 0.0 {
        return 0.0;
    }
    interpolate(
        offset_x,
        &[-surface_width, 0.0, surface_width],
        &[-MAX_ROTATION_DEG, 0.0, MAX_ROTATION_DEG],
        Extrapolation::Extend,
    )
}

fn stack_domain(count: usize) -> [f64; 3] {
    let n = count as f64;
    [n - 3.0, n - 2.0, n - 1.0]
}

/// Back cards shrink: 0.9, 0.95, 1.0 from the third card to the top.
pub fn stack_scale(index: usize, count: usize) -> f64 {
    interpolate(
        index as f64,
        &stack_domain(count),
        &STACK_SCALE,
        Extrapolation::Extend,
    )
}

/// Back cards sit lower: 20, 10, 0 units from the third card to the top.
pub fn stack_nudge(index: usize, count: usize) -> f64 {
    interpolate(
        index as f64,
        &stack_domain(count),
        &STACK_NUDGE,
        Extrapolation::Extend,
    )
}

/// Only the top [`VISIBLE_DEPTH`] cards are drawn.
pub fn stack_opacity(index: usize, count: usize) -> f64 {
    if index + VISIBLE_DEPTH >= count {
        1.0
    } else {
        0.0
    }
}

pub fn card_transform(
    offset: DragOffset,
    index: usize,
    count: usize,
    surface_width: f64,
) -> CardTransform {
    CardTransform {
        translate_x: offset.x,
        translate_y: offset.y + stack_nudge(index, count),
        rotation_deg: rotation(offset.x, surface_width),
        scale: stack_scale(index, count),
        opacity: stack_opacity(index, count),
    }
}

/// Badges fade in over the commit distance on their own side only.
pub fn badge_opacity(offset_x: f64, commit_distance: f64) -> BadgeOpacity {
    if commit_distance <= 0.0 {
        return BadgeOpacity::default();
    }
    let accept = if offset_x > 0.0 {
        interpolate(offset_x, &[0.0, commit_distance], &[0.0, 1.0], Extrapolation::Clamp)
    } else {
        0.0
    };
    let reject = if offset_x < 0.0 {
        interpolate(offset_x, &[-commit_distance, 0.0], &[1.0, 0.0], Extrapolation::Clamp)
    } else {
        0.0
    };
    BadgeOpacity { accept, reject }
}
