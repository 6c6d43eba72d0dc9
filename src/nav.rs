//! Header visibility state machine.
//!
//! Each scroll sample is run through three ordered rules:
//!
//! 1. a one-shot latch set by a manual reveal swallows the reset for exactly
//!    one sample, since the reveal's own reflow can fire a scroll event;
//! 2. otherwise an active manual reveal is cancelled;
//! 3. if nothing was cancelled, the header collapses when moving down past the
//!    threshold and expands when moving up above it. Any other sample leaves
//!    `collapsed` alone, which keeps it from flapping around the threshold.
//!
//! The previous offset is updated on every sample regardless.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::{SCROLL_THRESHOLD, TINT_OFFSET};
use crate::scroll::{ScrollDirection, ScrollTracker};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub collapsed: bool,
    pub manually_revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Scroll(u32),
    ManualReveal,
    /// Sets the baseline offset without running any rule.
    Resync(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavController {
    state: NavState,
    tracker: ScrollTracker,
    ignore_next_reset: bool,
    threshold: u32,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD)
    }
}

impl NavController {
    pub fn new(threshold: u32) -> Self {
        Self {
            state: NavState::default(),
            tracker: ScrollTracker::new(0),
            ignore_next_reset: false,
            threshold,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn last_offset(&self) -> u32 {
        self.tracker.last_offset()
    }

    pub fn apply(&mut self, action: NavAction) {
        let before = self.state;
        match action {
            NavAction::Scroll(offset) => self.on_scroll(offset),
            NavAction::ManualReveal => self.reveal(),
            NavAction::Resync(offset) => self.tracker.reset_to(offset),
        }
        if self.state != before {
            debug!(
                "Nav {:?} (last offset {}): {:?} -> {:?}",
                action,
                self.last_offset(),
                before,
                self.state
            );
        }
    }

    fn reveal(&mut self) {
        self.state.manually_revealed = true;
        self.ignore_next_reset = true;
    }

    fn on_scroll(&mut self, offset: u32) {
        let sample = self.tracker.sample(offset);

        let mut reset_occurred = false;
        if self.ignore_next_reset {
            self.ignore_next_reset = false;
        } else if self.state.manually_revealed {
            self.state.manually_revealed = false;
            reset_occurred = true;
        }

        if reset_occurred {
            return;
        }

        match sample.direction {
            ScrollDirection::Down if sample.offset > self.threshold => self.state.collapsed = true,
            ScrollDirection::Up if sample.offset < self.threshold => self.state.collapsed = false,
            _ => {}
        }
    }
}

impl Reducible for NavController {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Which parts of the header to render. Derived on every render, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderLayout {
    pub show_desktop_nav: bool,
    pub show_compact_trigger: bool,
    pub tinted: bool,
}

impl HeaderLayout {
    pub fn derive(state: NavState, is_large: bool, offset: u32) -> Self {
        let revealed = is_large && state.manually_revealed;
        Self {
            show_desktop_nav: is_large && (!state.collapsed || state.manually_revealed),
            show_compact_trigger: !is_large || (state.collapsed && !state.manually_revealed),
            tinted: offset > TINT_OFFSET || revealed,
        }
    }
}

/// What a click on the compact trigger does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    /// Dispatch [`NavAction::ManualReveal`].
    Reveal,
    /// Open or close the mobile sheet. Never touches [`NavState`].
    ToggleSheet,
}

pub fn trigger_action(is_large: bool) -> TriggerAction {
    if is_large {
        TriggerAction::Reveal
    } else {
        TriggerAction::ToggleSheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointState};
    use proptest::prelude::*;

    fn click_trigger(controller: &mut NavController, width: f64) -> TriggerAction {
        let is_large = BreakpointState::measured(width).is_at_least(Breakpoint::Lg);
        let action = trigger_action(is_large);
        if action == TriggerAction::Reveal {
            controller.apply(NavAction::ManualReveal);
        }
        action
    }

    fn scroll_through(controller: &mut NavController, offsets: &[u32]) -> Vec<bool> {
        offsets
            .iter()
            .map(|&offset| {
                controller.apply(NavAction::Scroll(offset));
                controller.state().collapsed
            })
            .collect()
    }

    #[test]
    fn starts_expanded_and_unrevealed() {
        let controller = NavController::default();
        assert_eq!(controller.state(), NavState::default());
        assert_eq!(controller, NavController::new(100));
        assert_eq!(controller.last_offset(), 0);
    }

    #[test]
    fn collapses_going_down_and_expands_going_up() {
        let mut controller = NavController::default();
        let collapsed = scroll_through(&mut controller, &[0, 50, 150, 200, 80]);
        assert_eq!(collapsed, vec![false, false, true, true, false]);
    }

    #[test]
    fn threshold_itself_fires_neither_branch() {
        let mut controller = NavController::default();
        assert_eq!(scroll_through(&mut controller, &[100]), vec![false]);

        let mut controller = NavController::default();
        assert_eq!(scroll_through(&mut controller, &[300, 100]), vec![true, true]);
    }

    #[test]
    fn no_flapping_when_wiggling_on_one_side() {
        let mut controller = NavController::default();
        // Going back up while still past the threshold keeps the header collapsed.
        let collapsed = scroll_through(&mut controller, &[150, 140, 145, 120, 130]);
        assert!(collapsed.iter().all(|&c| c));

        // Going down while still above the threshold keeps it expanded.
        let mut controller = NavController::default();
        let collapsed = scroll_through(&mut controller, &[90, 60, 70, 95, 99]);
        assert!(collapsed.iter().all(|&c| !c));
    }

    #[test]
    fn manual_reveal_survives_one_self_inflicted_sample() {
        let mut controller = NavController::default();
        scroll_through(&mut controller, &[150]);
        assert!(controller.state().collapsed);

        controller.apply(NavAction::ManualReveal);
        assert_eq!(
            controller.state(),
            NavState {
                collapsed: true,
                manually_revealed: true
            }
        );

        controller.apply(NavAction::Scroll(151));
        assert!(controller.state().manually_revealed);
        assert!(controller.state().collapsed);

        controller.apply(NavAction::Scroll(160));
        assert!(!controller.state().manually_revealed);
        assert!(controller.state().collapsed);
        assert_eq!(controller.last_offset(), 160);
    }

    #[test]
    fn reset_sample_skips_collapse_rule() {
        let mut controller = NavController::default();
        scroll_through(&mut controller, &[150]);
        controller.apply(NavAction::ManualReveal);
        controller.apply(NavAction::Scroll(150));

        // Would expand (up, below threshold) but the reveal is cancelled instead.
        controller.apply(NavAction::Scroll(50));
        assert_eq!(
            controller.state(),
            NavState {
                collapsed: true,
                manually_revealed: false
            }
        );

        controller.apply(NavAction::Scroll(40));
        assert!(!controller.state().collapsed);
    }

    #[test]
    fn resync_moves_baseline_without_transition() {
        let mut controller = NavController::default();
        controller.apply(NavAction::Resync(500));
        assert_eq!(controller.state(), NavState::default());

        controller.apply(NavAction::Scroll(500));
        assert!(!controller.state().collapsed);
        controller.apply(NavAction::Scroll(520));
        assert!(controller.state().collapsed);
    }

    #[test]
    fn reducer_applies_actions() {
        let controller = Rc::new(NavController::default());
        let controller = controller.reduce(NavAction::Scroll(150));
        let controller = controller.reduce(NavAction::ManualReveal);
        assert_eq!(
            controller.state(),
            NavState {
                collapsed: true,
                manually_revealed: true
            }
        );
    }

    #[test]
    fn desktop_nav_and_trigger_are_complementary_on_large_screens() {
        for collapsed in [false, true] {
            for manually_revealed in [false, true] {
                let state = NavState {
                    collapsed,
                    manually_revealed,
                };
                let layout = HeaderLayout::derive(state, true, 0);
                assert_ne!(layout.show_desktop_nav, layout.show_compact_trigger);
                assert_eq!(layout.show_desktop_nav, !collapsed || manually_revealed);
            }
        }
    }

    #[test]
    fn small_screens_always_get_the_trigger() {
        let is_large = BreakpointState::measured(500.0).is_at_least(Breakpoint::Lg);
        assert!(!is_large);
        for collapsed in [false, true] {
            for manually_revealed in [false, true] {
                let state = NavState {
                    collapsed,
                    manually_revealed,
                };
                let layout = HeaderLayout::derive(state, is_large, 500);
                assert!(!layout.show_desktop_nav);
                assert!(layout.show_compact_trigger);
            }
        }
    }

    #[test]
    fn trigger_reveals_only_from_lg_up() {
        let mut controller = NavController::default();
        scroll_through(&mut controller, &[150]);

        assert_eq!(click_trigger(&mut controller, 1023.0), TriggerAction::ToggleSheet);
        assert_eq!(
            controller.state(),
            NavState {
                collapsed: true,
                manually_revealed: false
            }
        );

        assert_eq!(click_trigger(&mut controller, 1024.0), TriggerAction::Reveal);
        assert_eq!(
            controller.state(),
            NavState {
                collapsed: true,
                manually_revealed: true
            }
        );
    }

    #[test]
    fn unmeasured_viewport_toggles_the_sheet() {
        let is_large = BreakpointState::default().is_at_least(Breakpoint::Lg);
        assert_eq!(trigger_action(is_large), TriggerAction::ToggleSheet);
    }

    #[test]
    fn tint_follows_offset_or_large_reveal() {
        let idle = NavState::default();
        assert!(!HeaderLayout::derive(idle, true, 20).tinted);
        assert!(HeaderLayout::derive(idle, true, 21).tinted);

        let revealed = NavState {
            collapsed: true,
            manually_revealed: true,
        };
        assert!(HeaderLayout::derive(revealed, true, 0).tinted);
        assert!(!HeaderLayout::derive(revealed, false, 0).tinted);
    }

    #[derive(Clone, Debug)]
    enum Step {
        Scroll(u32),
        Reveal,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            4 => (0u32..400).prop_map(Step::Scroll),
            1 => Just(Step::Reveal),
        ]
    }

    proptest! {
        #[test]
        fn collapse_flips_only_on_directed_crossings(offsets in prop::collection::vec(0u32..400, 1..60)) {
            let mut controller = NavController::default();
            for offset in offsets {
                let last = controller.last_offset();
                let before = controller.state().collapsed;
                controller.apply(NavAction::Scroll(offset));
                let after = controller.state().collapsed;

                if !before && after {
                    prop_assert!(offset > last && offset > 100);
                }
                if before && !after {
                    prop_assert!(offset < last && offset < 100);
                }
                if offset > last && offset > 100 {
                    prop_assert!(after);
                }
                if offset < last && offset < 100 {
                    prop_assert!(!after);
                }
            }
        }

        #[test]
        fn repeated_offsets_are_idempotent(offsets in prop::collection::vec(0u32..400, 1..30), repeats in 1usize..5) {
            let mut controller = NavController::default();
            for offset in offsets {
                controller.apply(NavAction::Scroll(offset));
                let settled = controller.state();
                for _ in 0..repeats {
                    controller.apply(NavAction::Scroll(offset));
                    prop_assert_eq!(controller.state().collapsed, settled.collapsed);
                }
            }
        }

        #[test]
        fn reveal_is_cancelled_by_the_second_sample(steps in prop::collection::vec(step(), 1..60)) {
            let mut controller = NavController::default();
            // Samples seen since the most recent reveal.
            let mut since_reveal: Option<usize> = None;
            for step in steps {
                match step {
                    Step::Reveal => {
                        controller.apply(NavAction::ManualReveal);
                        since_reveal = Some(0);
                        prop_assert!(controller.state().manually_revealed);
                    }
                    Step::Scroll(offset) => {
                        controller.apply(NavAction::Scroll(offset));
                        since_reveal = since_reveal.map(|n| n + 1);
                        let expected = since_reveal == Some(1);
                        prop_assert_eq!(controller.state().manually_revealed, expected);
                    }
                }
            }
        }
    }
}
