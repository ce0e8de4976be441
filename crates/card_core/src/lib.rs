//! Interaction core for the swipeable fact-card stack.
//!
//! [`CardSwipeController`] owns the current card index and the live drag
//! offset, decides commit-vs-cancel when a drag is released, and runs the
//! commit/cancel animation timelines. It has no UI dependency: the GUI feeds
//! it pointer deltas plus a monotonic clock, and reads back a
//! [`CardTransform`] every frame.

use std::collections::HashSet;

use shared::{
    domain::{FactDeck, TopicId},
    error::DeckError,
};

/// Fraction of the layout width a drag must exceed for a release to commit.
pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.25;

/// Rotation applied once the card has travelled one full layout width.
pub const MAX_ROTATION_DEGREES: f32 = 12.0;

/// Duration of the commit (fly off-screen) animation, in seconds.
pub const COMMIT_ANIMATION_SECS: f32 = 0.18;

// Snap-back spring: closed-form under-damped oscillation toward the origin,
// for a displaced start with zero initial velocity.
const SPRING_DAMPING: f32 = 12.0;
const SPRING_FREQUENCY: f32 = 10.0;
const SPRING_REST_DISTANCE: f32 = 0.5;

/// Current screen dimensions, passed in explicitly and refreshed by the
/// caller on resize rather than cached as process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub width: f32,
    pub height: f32,
}

impl LayoutMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.width * SWIPE_THRESHOLD_FRACTION
    }
}

/// Pointer delta from the drag start, in screen points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOffset {
    pub x: f32,
    pub y: f32,
}

impl DragOffset {
    pub const ORIGIN: DragOffset = DragOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn lerp(self, target: DragOffset, t: f32) -> DragOffset {
        DragOffset::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn from_delta(dx: f32) -> Self {
        if dx >= 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    }

    pub fn signum(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    Commit(SwipeDirection),
    Cancel,
}

/// Commit only when the drag travelled strictly past the threshold; a
/// release exactly at the threshold snaps back.
pub fn swipe_decision(dx: f32, layout: &LayoutMetrics) -> SwipeDecision {
    if dx.abs() > layout.swipe_threshold() {
        SwipeDecision::Commit(SwipeDirection::from_delta(dx))
    } else {
        SwipeDecision::Cancel
    }
}

/// Piecewise-linear map of `[-width, 0, width]` onto
/// `[-MAX_ROTATION_DEGREES, 0, MAX_ROTATION_DEGREES]`, clamped at the edges.
pub fn rotation_degrees(x: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    (x / width).clamp(-1.0, 1.0) * MAX_ROTATION_DEGREES
}

/// Per-frame visual transform for the top card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotation_degrees: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AnimationKind {
    CommitOffscreen(SwipeDirection),
    CancelSpring,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AnimationRun {
    kind: AnimationKind,
    generation: u64,
    started_at: f64,
    from: DragOffset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging,
    Animating(AnimationRun),
}

pub struct CardSwipeController {
    deck_len: usize,
    layout: LayoutMetrics,
    current_index: usize,
    offset: DragOffset,
    phase: Phase,
    generation: u64,
}

impl CardSwipeController {
    pub fn new(deck_len: usize, layout: LayoutMetrics) -> Result<Self, DeckError> {
        if deck_len == 0 {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self {
            deck_len,
            layout,
            current_index: 0,
            offset: DragOffset::ORIGIN,
            phase: Phase::Idle,
            generation: 0,
        })
    }

    /// Infallible constructor: `FactDeck` construction already rejects
    /// empty decks.
    pub fn for_deck(deck: &FactDeck, layout: LayoutMetrics) -> Self {
        Self {
            deck_len: deck.len(),
            layout,
            current_index: 0,
            offset: DragOffset::ORIGIN,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn layout(&self) -> LayoutMetrics {
        self.layout
    }

    /// Refresh the layout after a resize. The threshold and rotation domain
    /// follow the new width; any in-flight animation keeps running against it.
    pub fn set_layout(&mut self, layout: LayoutMetrics) {
        self.layout = layout;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn offset(&self) -> DragOffset {
        self.offset
    }

    pub fn phase(&self) -> SwipePhase {
        match self.phase {
            Phase::Idle => SwipePhase::Idle,
            Phase::Dragging => SwipePhase::Dragging,
            Phase::Animating(_) => SwipePhase::Animating,
        }
    }

    pub fn transform(&self) -> CardTransform {
        CardTransform {
            translate_x: self.offset.x,
            translate_y: self.offset.y,
            rotation_degrees: rotation_degrees(self.offset.x, self.layout.width),
        }
    }

    /// Touch-down. Ignored while a commit/cancel animation is still running:
    /// gestures are handled serially.
    pub fn begin_drag(&mut self) {
        match self.phase {
            Phase::Idle => {
                self.offset = DragOffset::ORIGIN;
                self.phase = Phase::Dragging;
                tracing::trace!("drag started");
            }
            Phase::Dragging => {}
            Phase::Animating(_) => {
                tracing::trace!("drag ignored while animating");
            }
        }
    }

    /// Touch-move: the offset tracks the raw pointer delta, unsmoothed and
    /// unclamped.
    pub fn drag_to(&mut self, offset: DragOffset) {
        if matches!(self.phase, Phase::Dragging) {
            self.offset = offset;
        }
    }

    /// Touch-release. Returns the decision taken, or `None` when there is no
    /// active drag (duplicate release events are dropped here).
    pub fn release(&mut self, now: f64) -> Option<SwipeDecision> {
        if !matches!(self.phase, Phase::Dragging) {
            return None;
        }
        let decision = swipe_decision(self.offset.x, &self.layout);
        tracing::debug!(
            dx = self.offset.x,
            threshold = self.layout.swipe_threshold(),
            ?decision,
            "drag released"
        );
        let kind = match decision {
            SwipeDecision::Commit(direction) => AnimationKind::CommitOffscreen(direction),
            SwipeDecision::Cancel => AnimationKind::CancelSpring,
        };
        self.start_animation(kind, now);
        Some(decision)
    }

    /// Starts a snap-back to the origin, superseding any in-flight animation.
    /// A superseded commit run can no longer advance the index.
    pub fn reset_position(&mut self, now: f64) {
        if matches!(self.phase, Phase::Idle) {
            return;
        }
        self.start_animation(AnimationKind::CancelSpring, now);
    }

    fn start_animation(&mut self, kind: AnimationKind, now: f64) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Animating(AnimationRun {
            kind,
            generation: self.generation,
            started_at: now,
            from: self.offset,
        });
    }

    /// Advances any running animation to `now` (caller-supplied monotonic
    /// seconds). Returns `true` while the animation still needs frames.
    pub fn tick(&mut self, now: f64) -> bool {
        let run = match self.phase {
            Phase::Animating(run) => run,
            _ => return false,
        };
        let elapsed = (now - run.started_at).max(0.0) as f32;
        match run.kind {
            AnimationKind::CommitOffscreen(direction) => {
                let t = (elapsed / COMMIT_ANIMATION_SECS).clamp(0.0, 1.0);
                let target = DragOffset::new(direction.signum() * self.layout.width, 0.0);
                self.offset = run.from.lerp(target, t);
                if t >= 1.0 {
                    self.finish(run);
                    return false;
                }
            }
            AnimationKind::CancelSpring => {
                let envelope = spring_envelope(elapsed);
                self.offset = DragOffset::new(run.from.x * envelope, run.from.y * envelope);
                if spring_settled(run.from, elapsed) {
                    self.finish(run);
                    return false;
                }
            }
        }
        true
    }

    fn finish(&mut self, run: AnimationRun) {
        if run.generation != self.generation {
            // A newer run superseded this one; its completion must not
            // mutate the index.
            tracing::trace!(generation = run.generation, "stale animation completion dropped");
            return;
        }
        self.offset = DragOffset::ORIGIN;
        if let AnimationKind::CommitOffscreen(direction) = run.kind {
            self.current_index = (self.current_index + 1) % self.deck_len;
            tracing::debug!(?direction, index = self.current_index, "card committed");
        } else {
            tracing::trace!("card snapped back");
        }
        self.phase = Phase::Idle;
    }
}

fn spring_envelope(t: f32) -> f32 {
    let decay = (-SPRING_DAMPING * t).exp();
    decay
        * ((SPRING_FREQUENCY * t).cos()
            + (SPRING_DAMPING / SPRING_FREQUENCY) * (SPRING_FREQUENCY * t).sin())
}

fn spring_settled(from: DragOffset, t: f32) -> bool {
    let reach = from.x.abs().max(from.y.abs());
    let bound = (-SPRING_DAMPING * t).exp() * (1.0 + SPRING_DAMPING / SPRING_FREQUENCY) * reach;
    bound <= SPRING_REST_DISTANCE
}

/// Set of topics picked during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSelection {
    selected: HashSet<TopicId>,
}

impl TopicSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = TopicId>) -> Self {
        Self {
            selected: ids.into_iter().collect(),
        }
    }

    /// Toggles membership; returns whether the topic is selected afterwards.
    pub fn toggle(&mut self, id: TopicId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub fn is_selected(&self, id: &TopicId) -> bool {
        self.selected.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Ids in stable order, for persistence.
    pub fn sorted_ids(&self) -> Vec<TopicId> {
        let mut ids: Vec<TopicId> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
