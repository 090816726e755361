//! Snapping scroll wheel.
//!
//! A [`Wheel`] is a vertically scrolling list of discrete items that always
//! comes to rest with exactly one item in its selection band. It is driven by
//! the host's touch input and frame clock and reports the index it settles on.
//!
//! # States
//!
//! - **Idle**: resting on a snapped index.
//! - **Dragging**: following the finger; nothing is reported.
//! - **Settling**: momentum after release, decaying until the wheel snaps.
//!
//! Settling ends either through [`WheelGesture::Frame`] ticks (the wheel runs
//! its own kinetic simulation) or through [`WheelGesture::MomentumEnd`] when
//! the host's scroll view ran the momentum and reports where it stopped.
//! Both paths snap to `round(offset / item_height)` and report that index.
//!
//! Programmatic positioning ([`Wheel::jump_to_index`], [`Wheel::set_items`])
//! never reports anything.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tally::widget::widgets::{Wheel, WheelGesture};
//! use tally::KineticConfig;
//!
//! let mut wheel = Wheel::new((1..=31).collect::<Vec<u32>>(), 40.0, KineticConfig::default());
//! wheel.jump_to_index(11);
//!
//! let t0 = Instant::now();
//! wheel.handle(WheelGesture::TouchDown { y: 100.0, at: t0 });
//! wheel.handle(WheelGesture::TouchMove { y: 60.0, at: t0 + Duration::from_millis(500) });
//! let settled = wheel.handle(WheelGesture::Release { at: t0 + Duration::from_millis(1000) });
//! assert_eq!(settled, Some(12));
//! ```

use std::time::{Duration, Instant};

use tally_core::logging::targets;

use crate::config::KineticConfig;

/// Only touch samples this recent contribute to the release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// The gesture phase of a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelPhase {
    /// Resting on a snapped index.
    #[default]
    Idle,
    /// Following a drag.
    Dragging,
    /// Momentum scrolling after release.
    Settling,
}

/// Input delivered to a wheel by its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelGesture {
    /// Finger or button went down at vertical position `y`.
    TouchDown { y: f32, at: Instant },
    /// Finger moved to vertical position `y`.
    TouchMove { y: f32, at: Instant },
    /// Finger lifted.
    Release { at: Instant },
    /// A frame tick; advances momentum while settling.
    Frame { now: Instant },
    /// The host's own scroll view finished its momentum at `offset`.
    MomentumEnd { offset: f32 },
}

/// One-dimensional kinetic (momentum-based) scrolling state.
#[derive(Debug, Clone)]
struct KineticScroller {
    /// Momentum constants.
    config: KineticConfig,
    /// Offset velocity in pixels per second.
    velocity: f32,
    /// Timestamp of the last momentum update.
    last_update: Option<Instant>,
    /// Recent touch positions for velocity calculation.
    position_history: Vec<(f32, Instant)>,
    /// Touch position and wheel offset when the drag began.
    drag_start: Option<(f32, f32)>,
}

impl KineticScroller {
    fn new(config: KineticConfig) -> Self {
        Self {
            config,
            velocity: 0.0,
            last_update: None,
            position_history: Vec::with_capacity(10),
            drag_start: None,
        }
    }

    fn reset(&mut self) {
        self.velocity = 0.0;
        self.last_update = None;
        self.position_history.clear();
        self.drag_start = None;
    }

    fn press(&mut self, y: f32, offset: f32, at: Instant) {
        self.reset();
        self.drag_start = Some((y, offset));
        self.record_position(y, at);
    }

    fn record_position(&mut self, y: f32, at: Instant) {
        self.position_history
            .retain(|(_, t)| at.saturating_duration_since(*t) <= VELOCITY_WINDOW);
        self.position_history.push((y, at));
    }

    /// Follow a drag, returning the unclamped wheel offset.
    fn drag(&mut self, y: f32, at: Instant) -> Option<f32> {
        let (start_y, start_offset) = self.drag_start?;
        self.record_position(y, at);
        Some(start_offset + (start_y - y))
    }

    /// Finish a drag, returning the capped release velocity.
    fn release(&mut self, at: Instant) -> f32 {
        self.position_history
            .retain(|(_, t)| at.saturating_duration_since(*t) <= VELOCITY_WINDOW);
        self.drag_start = None;

        let velocity = match (self.position_history.first(), self.position_history.last()) {
            (Some(&(y1, t1)), Some(&(y2, t2))) => {
                let dt = t2.saturating_duration_since(t1).as_secs_f32();
                if dt > 0.001 {
                    // Finger moving up scrolls the content down the list.
                    -(y2 - y1) / dt
                } else {
                    0.0
                }
            }
            _ => 0.0,
        };

        self.position_history.clear();
        velocity.clamp(-self.config.max_velocity, self.config.max_velocity)
    }

    fn has_momentum(&self, velocity: f32) -> bool {
        velocity.abs() > self.config.min_velocity
    }

    fn start_momentum(&mut self, velocity: f32, at: Instant) {
        self.velocity = velocity;
        self.last_update = Some(at);
    }

    /// Advance momentum, returning the offset delta, or `None` once momentum
    /// has decayed below the minimum velocity.
    fn update(&mut self, now: Instant) -> Option<f32> {
        let last = self.last_update?;
        let dt = now.saturating_duration_since(last).as_secs_f32();
        self.last_update = Some(now);

        if dt <= 0.0 {
            return Some(0.0);
        }

        let speed = self.velocity.abs();
        if speed <= self.config.min_velocity {
            self.reset();
            return None;
        }

        let decel = self.config.deceleration * dt;
        let decel_factor = ((speed - decel) / speed).max(0.0);
        let start_velocity = self.velocity;
        self.velocity *= decel_factor;

        // Trapezoidal step so large frame gaps don't overshoot.
        let delta = (start_velocity + self.velocity) * 0.5 * dt;

        if self.velocity.abs() <= self.config.min_velocity {
            self.velocity = 0.0;
        }
        Some(delta)
    }
}

/// A snapping scroll wheel over items of type `T`.
#[derive(Debug, Clone)]
pub struct Wheel<T> {
    items: Vec<T>,
    selected: usize,
    offset: f32,
    phase: WheelPhase,
    item_height: f32,
    scroller: KineticScroller,
}

impl<T> Wheel<T> {
    /// Create a wheel resting on its first item.
    pub fn new(items: Vec<T>, item_height: f32, kinetic: KineticConfig) -> Self {
        Self {
            items,
            selected: 0,
            offset: 0.0,
            phase: WheelPhase::Idle,
            item_height,
            scroller: KineticScroller::new(kinetic),
        }
    }

    /// The items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the wheel has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item in the selection band.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The item in the selection band.
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Current scroll offset in pixels from the first item.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current gesture phase.
    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    /// Height of one row.
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Largest offset the wheel can scroll to.
    pub fn max_offset(&self) -> f32 {
        self.last_index() as f32 * self.item_height
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// Clamp an index to the item range.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// The index a wheel resting at `offset` would snap to.
    pub fn index_at_offset(&self, offset: f32) -> usize {
        if offset.is_nan() {
            return self.selected;
        }
        let raw = (offset / self.item_height).round();
        if raw <= 0.0 {
            0
        } else {
            self.clamp_index(raw as usize)
        }
    }

    /// Move to `index` without reporting a selection.
    ///
    /// Out-of-range indices are clamped. Any gesture in progress is
    /// cancelled.
    pub fn jump_to_index(&mut self, index: usize) {
        let index = self.clamp_index(index);
        if index != self.selected {
            tracing::trace!(target: targets::WHEEL, from = self.selected, to = index, "jump");
        }
        self.selected = index;
        self.offset = index as f32 * self.item_height;
        self.phase = WheelPhase::Idle;
        self.scroller.reset();
    }

    /// Replace the items without reporting a selection.
    ///
    /// The selected index is kept when still in range and clamped otherwise.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = self.clamp_index(self.selected);
        if self.phase == WheelPhase::Idle {
            self.offset = self.selected as f32 * self.item_height;
        } else {
            self.offset = self.offset.clamp(0.0, self.max_offset());
        }
    }

    /// Feed one host gesture. Returns the index when the wheel settles.
    pub fn handle(&mut self, gesture: WheelGesture) -> Option<usize> {
        match gesture {
            WheelGesture::TouchDown { y, at } => {
                if self.phase == WheelPhase::Settling {
                    tracing::trace!(target: targets::WHEEL, "touch interrupted momentum");
                }
                self.phase = WheelPhase::Dragging;
                self.scroller.press(y, self.offset, at);
                None
            }
            WheelGesture::TouchMove { y, at } => {
                if self.phase != WheelPhase::Dragging {
                    return None;
                }
                if let Some(offset) = self.scroller.drag(y, at) {
                    self.offset = offset.clamp(0.0, self.max_offset());
                }
                None
            }
            WheelGesture::Release { at } => {
                if self.phase != WheelPhase::Dragging {
                    return None;
                }
                let velocity = self.scroller.release(at);
                if self.scroller.has_momentum(velocity) {
                    self.phase = WheelPhase::Settling;
                    self.scroller.start_momentum(velocity, at);
                    tracing::trace!(target: targets::WHEEL, velocity, "settling");
                    None
                } else {
                    Some(self.settle())
                }
            }
            WheelGesture::Frame { now } => {
                if self.phase != WheelPhase::Settling {
                    return None;
                }
                match self.scroller.update(now) {
                    Some(delta) => {
                        let target = self.offset + delta;
                        let max = self.max_offset();
                        self.offset = target.clamp(0.0, max);
                        if target <= 0.0 || target >= max {
                            Some(self.settle())
                        } else {
                            None
                        }
                    }
                    None => Some(self.settle()),
                }
            }
            WheelGesture::MomentumEnd { offset } => {
                if !offset.is_nan() {
                    self.offset = offset;
                }
                Some(self.settle())
            }
        }
    }

    /// Snap to the nearest index and report it.
    fn settle(&mut self) -> usize {
        let index = self.index_at_offset(self.offset);
        self.selected = index;
        self.offset = index as f32 * self.item_height;
        self.phase = WheelPhase::Idle;
        self.scroller.reset();
        tracing::trace!(target: targets::WHEEL, index, "settled");
        index
    }
}
