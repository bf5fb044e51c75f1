//! Route definitions - domain model
//!
//! Pure routing logic with no dependency on the DOM or web_sys.
//! Defines every route of the app and the navigation history model.

use std::fmt::Display;

/// Application routes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// City selector (default route)
    #[default]
    Cities,
    /// Neighborhoods of one city
    Neighborhoods { city_id: i64 },
    /// Comments of one neighborhood
    NeighborhoodDetails { neighborhood_id: i64 },
    /// Page not found
    NotFound,
}

impl AppRoute {
    /// Parses a URL path into a route
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["cities"] => Self::Cities,
            ["neighborhoods", id] => id
                .parse()
                .map(|city_id| Self::Neighborhoods { city_id })
                .unwrap_or(Self::NotFound),
            ["neighborhood", id] => id
                .parse()
                .map(|neighborhood_id| Self::NeighborhoodDetails { neighborhood_id })
                .unwrap_or(Self::NotFound),
            _ => Self::NotFound,
        }
    }

    /// URL path of the route
    pub fn to_path(&self) -> String {
        match self {
            Self::Cities => "/cities".to_string(),
            Self::Neighborhoods { city_id } => format!("/neighborhoods/{}", city_id),
            Self::NeighborhoodDetails { neighborhood_id } => {
                format!("/neighborhood/{}", neighborhood_id)
            }
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Where "back" leads when there is no earlier history entry
    /// (e.g. the page was opened from a bookmark).
    pub fn parent(&self) -> Self {
        Self::Cities
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// Navigation history model
// =========================================================

/// In-memory mirror of the browser session history.
///
/// The router keeps it in step with `pushState`/`replaceState` and
/// `popstate` so it can tell whether a "back" would stay inside the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHistory {
    entries: Vec<AppRoute>,
    cursor: usize,
}

impl RouteHistory {
    pub fn new(initial: AppRoute) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    #[cfg(test)]
    fn current(&self) -> &AppRoute {
        &self.entries[self.cursor]
    }

    /// Adds a new entry, dropping any forward entries.
    pub fn push(&mut self, route: AppRoute) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        self.cursor = self.entries.len() - 1;
    }

    pub fn replace(&mut self, route: AppRoute) {
        self.entries[self.cursor] = route;
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Follows a `popstate` to `route`.
    ///
    /// A neighbouring entry equal to `route` becomes current; anything
    /// else (a jump of several entries) replaces the current entry.
    pub fn sync_to(&mut self, route: AppRoute) {
        if self.cursor > 0 && self.entries[self.cursor - 1] == route {
            self.cursor -= 1;
        } else if self.entries.get(self.cursor + 1) == Some(&route) {
            self.cursor += 1;
        } else {
            self.replace(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Cities);
        assert_eq!(AppRoute::from_path("/cities"), AppRoute::Cities);
        assert_eq!(AppRoute::from_path("/cities/"), AppRoute::Cities);
        assert_eq!(
            AppRoute::from_path("/neighborhoods/3"),
            AppRoute::Neighborhoods { city_id: 3 }
        );
        assert_eq!(
            AppRoute::from_path("/neighborhood/12"),
            AppRoute::NeighborhoodDetails { neighborhood_id: 12 }
        );
    }

    #[test]
    fn unknown_or_malformed_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/login"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/neighborhoods/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/neighborhood"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/neighborhood/1/extra"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Cities,
            AppRoute::Neighborhoods { city_id: 7 },
            AppRoute::NeighborhoodDetails { neighborhood_id: 42 },
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn back_from_details_returns_to_neighborhood_list() {
        let mut history = RouteHistory::new(AppRoute::Cities);
        history.push(AppRoute::Neighborhoods { city_id: 3 });
        history.push(AppRoute::NeighborhoodDetails { neighborhood_id: 5 });

        // RouterService::back only hands over to the browser when this holds
        assert!(history.can_go_back());

        // the browser then fires popstate with the previous URL
        history.sync_to(AppRoute::from_path("/neighborhoods/3"));
        assert_eq!(history.current(), &AppRoute::Neighborhoods { city_id: 3 });
        assert!(history.can_go_back());
    }

    #[test]
    fn first_entry_falls_back_to_parent() {
        let mut history = RouteHistory::new(AppRoute::NeighborhoodDetails { neighborhood_id: 1 });
        assert!(!history.can_go_back());

        let parent = history.current().parent();
        assert_eq!(parent, AppRoute::Cities);
        history.replace(parent);
        assert_eq!(history.current(), &AppRoute::Cities);
        assert!(!history.can_go_back());
    }

    #[test]
    fn push_drops_forward_entries() {
        let mut history = RouteHistory::new(AppRoute::Cities);
        history.push(AppRoute::Neighborhoods { city_id: 1 });
        history.sync_to(AppRoute::Cities);
        history.push(AppRoute::Neighborhoods { city_id: 2 });

        // the dropped entry is no longer reachable by a forward popstate
        history.sync_to(AppRoute::Neighborhoods { city_id: 1 });
        assert_eq!(history.current(), &AppRoute::Neighborhoods { city_id: 1 });
        history.sync_to(AppRoute::Cities);
        assert_eq!(history.current(), &AppRoute::Cities);
        assert!(!history.can_go_back());
    }

    #[test]
    fn popstate_sync_moves_cursor() {
        let mut history = RouteHistory::new(AppRoute::Cities);
        history.push(AppRoute::Neighborhoods { city_id: 3 });
        history.push(AppRoute::NeighborhoodDetails { neighborhood_id: 5 });

        history.sync_to(AppRoute::Neighborhoods { city_id: 3 });
        assert_eq!(history.current(), &AppRoute::Neighborhoods { city_id: 3 });

        history.sync_to(AppRoute::NeighborhoodDetails { neighborhood_id: 5 });
        assert_eq!(
            history.current(),
            &AppRoute::NeighborhoodDetails { neighborhood_id: 5 }
        );

        history.sync_to(AppRoute::NotFound);
        assert_eq!(history.current(), &AppRoute::NotFound);
        assert!(history.can_go_back());
    }
}
