use log::{debug, warn};
use yew::prelude::*;

use crate::dom;
use crate::listener::EventSubscription;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
    Unchanged,
}

impl ScrollDirection {
    pub fn between(last: u32, current: u32) -> Self {
        if current > last {
            ScrollDirection::Down
        } else if current < last {
            ScrollDirection::Up
        } else {
            ScrollDirection::Unchanged
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSample {
    pub offset: u32,
    pub direction: ScrollDirection,
}

/// Remembers the previous offset so each new one can be given a direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTracker {
    last_offset: u32,
}

impl ScrollTracker {
    pub fn new(initial_offset: u32) -> Self {
        Self {
            last_offset: initial_offset,
        }
    }

    pub fn last_offset(&self) -> u32 {
        self.last_offset
    }

    pub fn sample(&mut self, offset: u32) -> ScrollSample {
        let direction = ScrollDirection::between(self.last_offset, offset);
        self.last_offset = offset;
        ScrollSample { offset, direction }
    }

    /// Moves the baseline without producing a sample.
    pub fn reset_to(&mut self, offset: u32) {
        self.last_offset = offset;
    }
}

/// Converts the browser's fractional scroll position into a pixel offset.
/// Overscroll bounce can report negative values, those count as the top.
pub fn clamp_offset(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        0
    } else if raw >= u32::MAX as f64 {
        u32::MAX
    } else {
        raw.round() as u32
    }
}

/// How far through the document the viewport is, in `[0, 1]`.
pub fn scroll_progress(offset: u32, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (offset as f64 / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEvent {
    /// Position read when the listener is attached.
    Initial(u32),
    Scrolled(u32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: u32,
    pub progress: f64,
}

fn read_snapshot() -> Option<ScrollSnapshot> {
    let offset = match dom::scroll_y() {
        Ok(raw) => clamp_offset(raw),
        Err(err) => {
            warn!("Scroll position unavailable: {}", err);
            return None;
        }
    };
    let progress = match (dom::scroll_height(), dom::viewport_height()) {
        (Ok(total), Ok(viewport)) => scroll_progress(offset, total, viewport),
        _ => 0.0,
    };
    Some(ScrollSnapshot { offset, progress })
}

/// Tracks the window scroll position.
///
/// `on_event` receives every native notification, including ones that leave
/// the offset unchanged. Without a window the snapshot stays at its default.
#[hook]
pub fn use_scroll(on_event: Callback<ScrollEvent>) -> ScrollSnapshot {
    let snapshot = use_state_eq(ScrollSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(initial) = read_snapshot() {
                    snapshot.set(initial);
                    on_event.emit(ScrollEvent::Initial(initial.offset));
                }

                let subscription = EventSubscription::on_window("scroll", move || {
                    if let Some(current) = read_snapshot() {
                        snapshot.set(current);
                        on_event.emit(ScrollEvent::Scrolled(current.offset));
                    }
                });

                let subscription = match subscription {
                    Ok(subscription) => {
                        debug!("Subscribed to window `{}`", subscription.event());
                        Some(subscription)
                    }
                    Err(err) => {
                        warn!("Scroll tracking disabled: {}", err);
                        None
                    }
                };

                move || drop(subscription)
            },
            (),
        );
    }

    *snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_compares_with_previous_sample() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.sample(0).direction, ScrollDirection::Unchanged);
        assert_eq!(tracker.sample(40).direction, ScrollDirection::Down);
        assert_eq!(tracker.sample(40).direction, ScrollDirection::Unchanged);
        assert_eq!(tracker.sample(10).direction, ScrollDirection::Up);
        assert_eq!(tracker.last_offset(), 10);
    }

    #[test]
    fn reset_to_moves_baseline_only() {
        let mut tracker = ScrollTracker::new(0);
        tracker.reset_to(500);
        let sample = tracker.sample(500);
        assert_eq!(sample.direction, ScrollDirection::Unchanged);
        assert_eq!(sample.offset, 500);
    }

    #[test]
    fn offsets_clamp_to_non_negative_pixels() {
        assert_eq!(clamp_offset(-12.0), 0);
        assert_eq!(clamp_offset(f64::NAN), 0);
        assert_eq!(clamp_offset(f64::NEG_INFINITY), 0);
        assert_eq!(clamp_offset(99.6), 100);
        assert_eq!(clamp_offset(1e12), u32::MAX);
    }

    #[test]
    fn progress_is_clamped_and_zero_without_overflow() {
        assert_eq!(scroll_progress(0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(300, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(300, 1000.0, 1000.0), 0.0);
    }
}
