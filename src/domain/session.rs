use crate::domain::models::{Household, Route};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resolution {
    pub active_id: Option<String>,
    pub route: Route,
}

/// Pick the household in focus from the server-ordered group list.
///
/// A remembered id wins while it is still a membership; otherwise focus
/// falls to the first group. No groups at all routes to onboarding. The
/// same inputs always produce the same output, so repeated refreshes
/// cannot oscillate between households.
pub fn resolve(groups: &[Household], previous_active_id: Option<&str>) -> Resolution {
    if groups.is_empty() {
        return Resolution {
            active_id: None,
            route: Route::Onboarding,
        };
    }
    if let Some(previous) = previous_active_id {
        if groups.iter().any(|g| g.group_id == previous) {
            return Resolution {
                active_id: Some(previous.to_string()),
                route: Route::Dashboard,
            };
        }
    }
    Resolution {
        active_id: Some(groups[0].group_id.clone()),
        route: Route::Dashboard,
    }
}
