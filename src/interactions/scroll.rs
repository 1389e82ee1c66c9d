/// Scroll offset past which the navbar switches to its opaque background.
pub const OPAQUE_THRESHOLD: f64 = 50.0;
/// Scroll offset past which scrolling down slides the navbar off-screen.
pub const HIDE_THRESHOLD: f64 = 200.0;
/// Room left for the fixed navbar when scrolling to an in-page anchor.
pub const HEADER_CLEARANCE: f64 = 80.0;

/// Navbar presentation derived from the window scroll position. Every scroll
/// event folds the new offset through [`NavbarState::handle_scroll`]; the
/// previous offset is carried along so direction can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavbarState {
    pub opaque: bool,
    pub hidden: bool,
    last_offset: f64,
}

impl NavbarState {
    pub fn handle_scroll(self, offset: f64) -> Self {
        NavbarState {
            opaque: offset > OPAQUE_THRESHOLD,
            // hide only while moving down and already past the threshold
            hidden: offset > self.last_offset && offset > HIDE_THRESHOLD,
            last_offset: offset,
        }
    }
}

/// Destination for a smooth scroll to an anchor target. Not clamped at zero;
/// the browser clamps for us.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - HEADER_CLEARANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to fold a scroll offset sequence into (opaque, hidden) pairs
    fn run_sequence(offsets: &[f64]) -> Vec<(bool, bool)> {
        let mut state = NavbarState::default();
        offsets
            .iter()
            .map(|&offset| {
                state = state.handle_scroll(offset);
                (state.opaque, state.hidden)
            })
            .collect()
    }

    #[test]
    fn test_scroll_sequence() {
        let states = run_sequence(&[0.0, 60.0, 250.0, 100.0]);
        assert_eq!(
            states,
            vec![
                (false, false), // at top: translucent, shown
                (true, false),  // past 50 going down but under 200: opaque, shown
                (true, true),   // deep and going down: opaque, hidden
                (true, false),  // going up: opaque, shown again
            ]
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let states = run_sequence(&[50.0]);
        assert_eq!(states, vec![(false, false)]);

        // 200 exactly, reached while scrolling down, stays shown
        let states = run_sequence(&[100.0, 200.0]);
        assert_eq!(states[1], (true, false));
    }

    #[test]
    fn test_scrolling_up_always_shows() {
        let states = run_sequence(&[600.0, 599.0]);
        assert!(states[0].1);
        assert!(!states[1].1);
    }

    #[test]
    fn test_holding_position_shows() {
        // equal offsets are not "scrolling down"
        let states = run_sequence(&[400.0, 400.0]);
        assert!(states[0].1);
        assert!(!states[1].1);
    }

    #[test]
    fn test_deep_jump_from_top_hides() {
        let states = run_sequence(&[0.0, 900.0]);
        assert_eq!(states[1], (true, true));
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(500.0), 420.0);
        // targets near the top resolve above zero and rely on browser clamping
        assert_eq!(anchor_scroll_top(30.0), -50.0);
    }
}
