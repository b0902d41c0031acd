//! Visible card window, pointer routing and stack compositing.

use tracing::trace;
use uuid::Uuid;

use crate::deck::gesture::{
    DragOffset, GestureConfig, GestureEffect, GestureInput, SwipeDirection, SwipeGesture,
};
use crate::deck::transform::{
    badge_opacity, card_transform, BadgeOpacity, CardTransform, VISIBLE_DEPTH,
};
use crate::profile::Profile;

/// Up to [`VISIBLE_DEPTH`] profiles ordered back to front.
///
/// The last index is the active card; everything below it is inert.
#[derive(Debug, Clone, PartialEq)]
pub struct StackWindow<'a> {
    cards: Vec<&'a Profile>,
}

impl<'a> StackWindow<'a> {
    /// Builds the window from the upcoming queue, `upcoming[0]` being next.
    pub fn new(upcoming: &'a [Profile]) -> Self {
        let cards = upcoming.iter().take(VISIBLE_DEPTH).rev().collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    pub fn active(&self) -> Option<&'a Profile> {
        self.cards.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<&'a Profile> {
        self.cards.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a Profile)> + '_ {
        self.cards.iter().copied().enumerate()
    }
}

/// One card ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedCard<'a> {
    pub profile: &'a Profile,
    pub index: usize,
    pub is_active: bool,
    pub transform: CardTransform,
    pub badges: BadgeOpacity,
}

/// A resolved card finishing its exit animation.
///
/// It is already gone from the deck; dropping it early changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartingCard {
    pub profile: Profile,
    pub gesture: SwipeGesture,
}

impl DepartingCard {
    pub fn transform(&self) -> CardTransform {
        card_transform(self.gesture.offset(), 0, 1, self.gesture.surface_width())
    }

    pub fn badges(&self) -> BadgeOpacity {
        badge_opacity(self.gesture.offset().x, self.gesture.commit_distance())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveCard {
    profile_id: Uuid,
    gesture: SwipeGesture,
}

/// Owns the drag state of the active card and the exit animation of the
/// previous one.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    config: GestureConfig,
    surface_width: f64,
    active: Option<ActiveCard>,
    departing: Option<DepartingCard>,
}

impl SwipeSession {
    pub fn new(surface_width: f64, config: GestureConfig) -> Self {
        Self {
            config,
            surface_width,
            active: None,
            departing: None,
        }
    }

    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    pub fn commit_distance(&self) -> f64 {
        self.surface_width * self.config.commit_ratio
    }

    pub fn resize(&mut self, surface_width: f64) {
        self.surface_width = surface_width;
        if let Some(active) = &mut self.active {
            active.gesture.set_surface_width(surface_width);
        }
        if let Some(departing) = &mut self.departing {
            departing.gesture.set_surface_width(surface_width);
        }
    }

    /// Binds the gesture to the window's top card.
    ///
    /// A different top card starts from a fresh gesture at the origin.
    pub fn sync(&mut self, window: &StackWindow<'_>) {
        let Some(top) = window.active() else {
            self.active = None;
            return;
        };
        let bound = self.active.as_ref().map(|active| active.profile_id);
        if bound != Some(top.id) {
            self.active = Some(ActiveCard {
                profile_id: top.id,
                gesture: SwipeGesture::new(self.surface_width, self.config),
            });
        }
    }

    /// Routes pointer input aimed at card `index` of `window`.
    ///
    /// Input for anything but the active card is dropped. Returns the
    /// direction when this input committed the gesture.
    pub fn input(
        &mut self,
        window: &StackWindow<'_>,
        index: usize,
        input: GestureInput,
    ) -> Option<SwipeDirection> {
        if window.active_index() != Some(index) {
            trace!(index, "Ignoring input on inert card");
            return None;
        }
        self.sync(window);
        let effect = self.active.as_mut()?.gesture.apply(input);
        self.handle_effect(window, effect)
    }

    /// Commits the active card without a drag.
    pub fn commit(
        &mut self,
        window: &StackWindow<'_>,
        direction: SwipeDirection,
    ) -> Option<SwipeDirection> {
        self.sync(window);
        let effect = self.active.as_mut()?.gesture.commit(direction);
        self.handle_effect(window, effect)
    }

    /// Steps every running animation by `dt` seconds.
    pub fn frame(&mut self, dt: f64) {
        if let Some(active) = &mut self.active {
            active.gesture.apply(GestureInput::Frame { dt });
        }
        if let Some(departing) = &mut self.departing {
            departing.gesture.apply(GestureInput::Frame { dt });
            if departing.gesture.is_done() {
                trace!(name = %departing.profile.name, "Exit animation finished");
                self.departing = None;
            }
        }
    }

    /// True while any card is being dragged or animated.
    pub fn is_busy(&self) -> bool {
        let active_busy = self
            .active
            .as_ref()
            .is_some_and(|active| active.gesture.offset() != DragOffset::ORIGIN);
        active_busy || self.departing.is_some()
    }

    pub fn active_gesture(&self) -> Option<&SwipeGesture> {
        self.active.as_ref().map(|active| &active.gesture)
    }

    pub fn departing(&self) -> Option<&DepartingCard> {
        self.departing.as_ref()
    }

    /// Drops the departing card without finishing its animation.
    pub fn abandon_departing(&mut self) {
        self.departing = None;
    }

    /// Derives the draw list for `window`, back to front.
    ///
    /// Cards that are not bound to the current gesture render at rest.
    pub fn compose<'a>(&self, window: &StackWindow<'a>) -> Vec<StackedCard<'a>> {
        let count = window.len();
        let active_index = window.active_index();
        window
            .iter()
            .map(|(index, profile)| {
                let is_active = Some(index) == active_index;
                let offset = match &self.active {
                    Some(active) if is_active && active.profile_id == profile.id => {
                        active.gesture.offset()
                    }
                    _ => DragOffset::ORIGIN,
                };
                let badges = if is_active {
                    badge_opacity(offset.x, self.commit_distance())
                } else {
                    BadgeOpacity::default()
                };
                StackedCard {
                    profile,
                    index,
                    is_active,
                    transform: card_transform(offset, index, count, self.surface_width),
                    badges,
                }
            })
            .collect()
    }

    fn handle_effect(
        &mut self,
        window: &StackWindow<'_>,
        effect: GestureEffect,
    ) -> Option<SwipeDirection> {
        let GestureEffect::Resolved(direction) = effect else {
            return None;
        };
        let active = self.active.take()?;
        // A previous exit animation still running is simply cut short.
        self.departing = window.active().map(|profile| DepartingCard {
            profile: profile.clone(),
            gesture: active.gesture,
        });
        Some(direction)
    }
}
