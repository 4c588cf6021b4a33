//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render (day cells,
//! tabs, the AI and confirm buttons), and mouse events are routed to the
//! matching region. The registry is rebuilt every frame, so regions always
//! reflect the current layout and scroll position.

use crate::app::ClickRegion;
use crate::events::Action;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first).
    /// The calendar overlay uses this to capture clicks over the home screen.
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the
    /// point and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_down.as_ref())
    }

    fn best_match<'a>(
        &'a self,
        x: u16,
        y: u16,
        pick: impl Fn(&'a InteractiveRegion) -> Option<&'a Action>,
    ) -> Action {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && pick(r).is_some())
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates
            .first()
            .and_then(|r| pick(r).cloned())
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        // Home-screen button underneath the calendar overlay
        registry.register(
            InteractiveRegion::clickable("ai_button", ClickRegion::new(0, 0, 100, 100), Action::AskAi)
                .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "confirm_button",
                ClickRegion::new(20, 20, 60, 60),
                Action::ConfirmCalendar,
            )
            .with_priority(10),
        );

        // Click in the overlay area should hit the overlay's region
        assert_eq!(registry.handle_click(50, 50), Action::ConfirmCalendar);

        // Click outside it falls through to the home screen
        assert_eq!(registry.handle_click(5, 5), Action::AskAi);
    }

    #[test]
    fn test_scroll_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "calendar_body",
            ClickRegion::new(0, 5, 40, 20),
            Action::CalendarScrollUp(3),
            Action::CalendarScrollDown(3),
        ));

        assert_eq!(registry.handle_scroll_down(10, 10), Action::CalendarScrollDown(3));
        assert_eq!(registry.handle_scroll_up(10, 10), Action::CalendarScrollUp(3));
        // A scroll-only region does not answer clicks.
        assert_eq!(registry.handle_click(10, 10), Action::None);
    }
}
