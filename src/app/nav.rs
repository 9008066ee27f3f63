//! Navigation destinations shown in the bottom bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Explore,
    Cart,
    Profile,
}

impl NavTab {
    /// Bar order, left to right.
    pub const ALL: [NavTab; 4] = [NavTab::Home, NavTab::Explore, NavTab::Cart, NavTab::Profile];

    pub fn route(self) -> &'static str {
        match self {
            NavTab::Home => "home",
            NavTab::Explore => "explore",
            NavTab::Cart => "cart",
            NavTab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Explore => "Explore",
            NavTab::Cart => "Cart",
            NavTab::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavTab::Home => "⌂",
            NavTab::Explore => "◎",
            NavTab::Cart => "▤",
            NavTab::Profile => "☺",
        }
    }

    pub fn from_route(route: &str) -> Option<NavTab> {
        Self::ALL
            .into_iter()
            .find(|t| t.route().eq_ignore_ascii_case(route))
    }

    /// Position in the bar, also the number key that selects it (1-based).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> NavTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> NavTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trip() {
        for tab in NavTab::ALL {
            assert_eq!(NavTab::from_route(tab.route()), Some(tab));
        }
        assert_eq!(NavTab::from_route("CART"), Some(NavTab::Cart));
        assert_eq!(NavTab::from_route("settings"), None);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(NavTab::Profile.next(), NavTab::Home);
        assert_eq!(NavTab::Home.prev(), NavTab::Profile);
        assert_eq!(NavTab::Explore.next(), NavTab::Cart);
    }
}
