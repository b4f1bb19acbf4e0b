//! Infinite scroll controller - pure function of viewport metrics
//!
//! Content-agnostic: callers pass the current scroll metrics along with
//! `has_more`, `is_loading`, and `is_empty`; the decision says whether to
//! call load-more and whether the move-to-top affordance is shown. Reusable
//! for any paged list.

/// Distance from the bottom (px) under which the next page is requested
pub const LOAD_MORE_THRESHOLD_PX: f64 = 5.0;

/// Raw scroll metrics of the list viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Some platforms report fractional offsets; the absolute value guards
    /// against a slightly negative remainder at the very bottom.
    pub fn distance_to_bottom(&self) -> f64 {
        (self.scroll_height - self.scroll_top - self.client_height).abs()
    }
}

/// What the viewport should do after a scroll event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollDecision {
    pub should_load_more: bool,
    pub show_move_to_top: bool,
}

/// Evaluate one scroll event.
pub fn evaluate_scroll(
    metrics: ScrollMetrics,
    has_more: bool,
    is_loading: bool,
    is_empty: bool,
) -> ScrollDecision {
    ScrollDecision {
        should_load_more: metrics.distance_to_bottom() <= LOAD_MORE_THRESHOLD_PX
            && has_more
            && !is_loading,
        // Forced hidden for an empty window regardless of scroll position.
        show_move_to_top: metrics.scroll_top > 0.0 && !is_empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near_bottom() -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: 596.0,
            scroll_height: 1000.0,
            client_height: 400.0,
        }
    }

    #[test]
    fn test_load_more_within_threshold() {
        let decision = evaluate_scroll(near_bottom(), true, false, false);
        assert!(decision.should_load_more);
    }

    #[test]
    fn test_no_load_more_above_threshold() {
        let metrics = ScrollMetrics {
            scroll_top: 500.0,
            scroll_height: 1000.0,
            client_height: 400.0,
        };
        let decision = evaluate_scroll(metrics, true, false, false);
        assert!(!decision.should_load_more);
    }

    #[test]
    fn test_no_load_more_while_loading_or_exhausted() {
        assert!(!evaluate_scroll(near_bottom(), true, true, false).should_load_more);
        assert!(!evaluate_scroll(near_bottom(), false, false, false).should_load_more);
    }

    #[test]
    fn test_move_to_top_visibility_tracks_scroll_position() {
        let mut metrics = near_bottom();
        assert!(evaluate_scroll(metrics, true, false, false).show_move_to_top);

        metrics.scroll_top = 0.0;
        assert!(!evaluate_scroll(metrics, true, false, false).show_move_to_top);
    }

    #[test]
    fn test_move_to_top_forced_hidden_for_empty_window() {
        let decision = evaluate_scroll(near_bottom(), false, false, true);
        assert!(!decision.show_move_to_top);
    }

    #[test]
    fn test_overscroll_past_bottom_still_triggers() {
        // Elastic overscroll can push the remainder negative.
        let metrics = ScrollMetrics {
            scroll_top: 603.0,
            scroll_height: 1000.0,
            client_height: 400.0,
        };
        assert!(evaluate_scroll(metrics, true, false, false).should_load_more);
    }
}
