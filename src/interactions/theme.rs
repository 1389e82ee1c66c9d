/// Color theme for the page, reflected as a `data-theme` attribute on the
/// body. Light is the unset default; the flag lives for the page session
/// only and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle control: the moon invites switching to
    /// dark, the sun invites switching back.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    /// Body attribute value; light leaves the attribute off entirely.
    pub fn attr_value(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

/// Ambient `prefers-color-scheme` query, read once at start-up. Reports
/// light wherever no DOM is attached.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Write the theme to the body attribute. No-op without a DOM.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
        else {
            return;
        };
        match theme.attr_value() {
            Some(value) => {
                let _ = body.set_attribute("data-theme", value);
            }
            None => {
                let _ = body.remove_attribute("data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_preference_starts_dark_with_sun_glyph() {
        let theme = Theme::from_prefers_dark(true);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.icon_class(), "fas fa-sun");
        assert_eq!(theme.attr_value(), Some("dark"));
    }

    #[test]
    fn test_light_preference_starts_unset_with_moon_glyph() {
        let theme = Theme::from_prefers_dark(false);
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.icon_class(), "fas fa-moon");
        assert_eq!(theme.attr_value(), None);
    }

    #[test]
    fn test_toggle_round_trip() {
        let start = Theme::from_prefers_dark(true);
        let once = start.toggled();
        assert_eq!(once, Theme::Light);
        assert_eq!(once.icon_class(), "fas fa-moon");
        assert_eq!(once.toggled(), Theme::Dark);
    }

    #[test]
    #[cfg(not(feature = "hydrate"))]
    fn test_browser_queries_degrade_without_dom() {
        assert!(!prefers_dark());
        // applying is a silent no-op rather than a fault
        apply(Theme::Dark);
        apply(Theme::Light);
    }
}
