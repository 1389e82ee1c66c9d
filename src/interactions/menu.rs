/// Clicks that can change the mobile menu's open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger control itself.
    Toggle,
    /// Anywhere outside both the panel and the control.
    Outside,
    /// Inside the panel, e.g. on a nav link.
    Panel,
}

/// Next state of the open flag after a click.
pub fn handle_click(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::Outside => false,
        MenuEvent::Panel => open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert!(handle_click(false, MenuEvent::Toggle));
        assert!(!handle_click(true, MenuEvent::Toggle));
    }

    #[test]
    fn test_outside_click_closes() {
        assert!(!handle_click(true, MenuEvent::Outside));
        assert!(!handle_click(false, MenuEvent::Outside));
    }

    #[test]
    fn test_panel_click_leaves_state_alone() {
        assert!(handle_click(true, MenuEvent::Panel));
        assert!(!handle_click(false, MenuEvent::Panel));
    }

    #[test]
    fn test_click_sequence() {
        let mut open = false;
        open = handle_click(open, MenuEvent::Toggle);
        assert!(open, "first toggle opens");
        open = handle_click(open, MenuEvent::Toggle);
        assert!(!open, "second toggle closes");
        open = handle_click(open, MenuEvent::Toggle);
        open = handle_click(open, MenuEvent::Outside);
        assert!(!open, "outside click closes an open menu");
        open = handle_click(open, MenuEvent::Toggle);
        open = handle_click(open, MenuEvent::Panel);
        assert!(open, "clicking a link inside the panel keeps it open");
    }
}
