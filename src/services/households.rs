use crate::api::{ApiClient, JoinRequest};
use crate::domain::models::{
    HouseholdCreated, HouseholdJoined, HouseholdSwitched, State, UserProfile,
};
use crate::services::storage::{audit, save_state};

pub fn create_household(
    api: &ApiClient,
    state: &mut State,
    name: &str,
) -> anyhow::Result<HouseholdCreated> {
    let created = api.create_household(name)?;
    state.active_group_id = Some(created.group_id.clone());
    save_state(state)?;
    audit(
        "household_create",
        serde_json::json!({ "group": created.group_id, "name": name }),
    );
    Ok(HouseholdCreated {
        group_id: created.group_id,
        name: name.to_string(),
    })
}

pub fn join_household(
    api: &ApiClient,
    state: &mut State,
    user: &UserProfile,
    group_id: &str,
) -> anyhow::Result<HouseholdJoined> {
    api.join_household(
        group_id,
        &JoinRequest {
            user_id: &user.id,
            email: &user.email,
            name: &user.name,
        },
    )?;
    state.active_group_id = Some(group_id.to_string());
    save_state(state)?;
    audit(
        "household_join",
        serde_json::json!({ "group": group_id, "user": user.id }),
    );
    Ok(HouseholdJoined {
        group_id: group_id.to_string(),
        user_id: user.id.clone(),
    })
}

/// Move focus to another of the user's households. The target must come
/// back in the freshly fetched group list.
pub fn switch_household(
    api: &ApiClient,
    state: &mut State,
    group_id: &str,
) -> anyhow::Result<HouseholdSwitched> {
    let groups = api.list_households()?;
    let Some(group) = groups.iter().find(|g| g.group_id == group_id) else {
        anyhow::bail!("not a member of household: {group_id}");
    };
    state.active_group_id = Some(group.group_id.clone());
    save_state(state)?;
    audit("household_switch", serde_json::json!({ "group": group_id }));
    Ok(HouseholdSwitched {
        group_id: group.group_id.clone(),
        name: group.name.clone(),
    })
}
