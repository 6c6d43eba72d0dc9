use log::warn;
use yew::prelude::*;

use crate::dom;
use crate::listener::EventSubscription;

/// Named viewport widths, smallest first.
// Full table is kept; only `Lg` is consulted at runtime.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    #[cfg_attr(not(test), allow(dead_code))]
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    pub fn matches(self, width: f64) -> bool {
        width >= self.min_width() as f64
    }
}

/// Viewport width as last measured. Until a measurement arrives every
/// breakpoint reports unmatched, which selects the compact layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BreakpointState {
    width: Option<f64>,
}

impl BreakpointState {
    pub fn measured(width: f64) -> Self {
        Self { width: Some(width) }
    }

    pub fn is_at_least(&self, breakpoint: Breakpoint) -> bool {
        self.width.map_or(false, |width| breakpoint.matches(width))
    }
}

fn measure() -> Option<BreakpointState> {
    match dom::viewport_width() {
        Ok(width) => Some(BreakpointState::measured(width)),
        Err(err) => {
            warn!("Viewport width unavailable: {}", err);
            None
        }
    }
}

#[hook]
pub fn use_breakpoint_state() -> BreakpointState {
    let state = use_state_eq(BreakpointState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(measured) = measure() {
                    state.set(measured);
                }

                let subscriptions: Vec<EventSubscription> = ["resize", "orientationchange"]
                    .into_iter()
                    .filter_map(|event| {
                        let state = state.clone();
                        EventSubscription::on_window(event, move || {
                            if let Some(measured) = measure() {
                                state.set(measured);
                            }
                        })
                        .map_err(|err| warn!("Breakpoint tracking degraded: {}", err))
                        .ok()
                    })
                    .collect();

                move || drop(subscriptions)
            },
            (),
        );
    }

    *state
}

/// Whether the viewport is at least as wide as `breakpoint`.
#[hook]
pub fn use_breakpoint(breakpoint: Breakpoint) -> bool {
    use_breakpoint_state().is_at_least(breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered() {
        let widths: Vec<u32> = Breakpoint::ALL.iter().map(|bp| bp.min_width()).collect();
        assert_eq!(widths, vec![640, 768, 1024, 1280, 1536]);
    }

    #[test]
    fn unmeasured_matches_nothing() {
        let state = BreakpointState::default();
        for breakpoint in Breakpoint::ALL {
            assert!(!state.is_at_least(breakpoint));
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(BreakpointState::measured(1024.0).is_at_least(Breakpoint::Lg));
        assert!(!BreakpointState::measured(1023.5).is_at_least(Breakpoint::Lg));
        assert!(!BreakpointState::measured(500.0).is_at_least(Breakpoint::Sm));
    }
}
