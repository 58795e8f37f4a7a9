use crate::api::ApiClient;
use crate::domain::balance::{compute_balance, Balance};
use crate::domain::models::{Bill, Household, Member, Route, State, Summary};
use crate::domain::session::{resolve, Resolution};
use crate::services::storage::save_state;

/// In-memory snapshot of one refresh. Presentation layers read this, they
/// never mutate it.
pub struct SessionData {
    pub groups: Vec<Household>,
    pub active_id: Option<String>,
    pub route: Route,
    pub summary: Option<Summary>,
    pub bills: Vec<Bill>,
    pub members: Vec<Member>,
}

impl SessionData {
    fn onboarding() -> Self {
        Self {
            groups: vec![],
            active_id: None,
            route: Route::Onboarding,
            summary: None,
            bills: vec![],
            members: vec![],
        }
    }

    pub fn active_group(&self) -> Option<&Household> {
        let active = self.active_id.as_deref()?;
        self.groups.iter().find(|g| g.group_id == active)
    }

    pub fn balance(&self, current_user_id: &str) -> Balance {
        let owed = self.summary.as_ref().map(|s| s.total_owed).unwrap_or(0.0);
        compute_balance(owed, &self.bills, current_user_id)
    }
}

/// Resolve the active household id for a household-scoped command,
/// persisting the choice so later invocations keep the same focus.
pub fn require_active(api: &ApiClient, state: &mut State) -> anyhow::Result<String> {
    let groups = api.list_households()?;
    let resolution = resolve(&groups, state.active_group_id.as_deref());
    match resolution.active_id {
        Some(id) => {
            if state.active_group_id.as_deref() != Some(id.as_str()) {
                state.active_group_id = Some(id.clone());
                save_state(state)?;
            }
            Ok(id)
        }
        None => anyhow::bail!(
            "no active household; run `fairshare household create <name>` or `fairshare household join <group-id>` first"
        ),
    }
}

/// Full data refresh. The group list resolves first since the active
/// household id is a precondition for every scoped fetch; summary, bills
/// and members then fan out concurrently. A failed piece stays empty
/// without blocking the rest, and a failed group fetch degrades to the
/// onboarding/empty state instead of an error.
pub fn refresh(api: &ApiClient, previous_active_id: Option<&str>) -> SessionData {
    let groups = match api.list_households() {
        Ok(groups) => groups,
        Err(_) => return SessionData::onboarding(),
    };

    let Resolution { active_id, route } = resolve(&groups, previous_active_id);
    let mut data = SessionData {
        groups,
        active_id: active_id.clone(),
        route,
        summary: None,
        bills: vec![],
        members: vec![],
    };
    let Some(active) = active_id else {
        return data;
    };

    let (summary_res, bills_res, detail_res) = std::thread::scope(|scope| {
        let summary = scope.spawn(|| api.my_summary());
        let bills = scope.spawn(|| (active.clone(), api.list_bills(&active)));
        let detail = scope.spawn(|| (active.clone(), api.household_detail(&active)));
        (summary.join(), bills.join(), detail.join())
    });

    if let Ok(Ok(summary)) = summary_res {
        data.summary = Some(summary);
    }
    // A scoped response is applied only while its household is still the
    // active one; anything else is a stale answer and gets dropped.
    if let Ok((requested, Ok(bills))) = bills_res {
        if data.active_id.as_deref() == Some(requested.as_str()) {
            data.bills = bills;
        }
    }
    if let Ok((requested, Ok(detail))) = detail_res {
        if data.active_id.as_deref() == Some(requested.as_str()) {
            data.members = detail.members;
        }
    }

    data
}
