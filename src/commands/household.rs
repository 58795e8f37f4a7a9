use crate::*;

pub fn handle_household_commands(
    cli: &Cli,
    api: &ApiClient,
    config: &ClientConfig,
    state: &mut State,
) -> anyhow::Result<bool> {
    let Commands::Household { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        HouseholdCommands::List => {
            let groups = api.list_households()?;
            print_out(cli.json, &groups, |g| {
                let marker = if state.active_group_id.as_deref() == Some(g.group_id.as_str()) {
                    "*"
                } else {
                    " "
                };
                format!("{} {}\t{}", marker, g.group_id, g.name)
            })?;
        }
        HouseholdCommands::Members => {
            let group_id = require_active(api, state)?;
            let detail = api.household_detail(&group_id)?;
            print_out(cli.json, &detail.members, |m| {
                format!("{}\t{}\t{}\t{}", m.user_id, m.display_name(), m.email, m.role)
            })?;
        }
        HouseholdCommands::Create { name } => {
            let created = create_household(api, state, name)?;
            print_one(cli.json, created, |c| {
                format!("created household {} ({})", c.name, c.group_id)
            })?;
        }
        HouseholdCommands::Join { group_id } => {
            let joined = join_household(api, state, &config.user, group_id)?;
            print_one(cli.json, joined, |j| {
                format!("joined household {} as {}", j.group_id, j.user_id)
            })?;
        }
        HouseholdCommands::Switch { group_id } => {
            let switched = switch_household(api, state, group_id)?;
            print_one(cli.json, switched, |s| {
                format!("switched to household {} ({})", s.name, s.group_id)
            })?;
        }
    }

    Ok(true)
}
