use crate::*;

pub fn handle_runtime_commands(
    cli: &Cli,
    api: &ApiClient,
    config: &ClientConfig,
    state: &mut State,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Status => {
            let data = refresh(api, state.active_group_id.as_deref());
            if state.active_group_id != data.active_id {
                state.active_group_id = data.active_id.clone();
                save_state(state)?;
            }
            let report = StatusReport {
                route: data.route,
                active_group_id: data.active_id.clone(),
                active_group_name: data.active_group().map(|g| g.name.clone()),
                household_count: data.groups.len(),
                member_count: data.members.len(),
                bill_count: data.bills.len(),
            };
            print_one(cli.json, report, |r| match r.route {
                Route::Onboarding => {
                    "no households yet; run `fairshare household create <name>` or `fairshare household join <group-id>`"
                        .to_string()
                }
                Route::Dashboard => format!(
                    "household: {} ({} members, {} bills, {} households total)",
                    r.active_group_name.as_deref().unwrap_or("?"),
                    r.member_count,
                    r.bill_count,
                    r.household_count
                ),
            })?;
        }
        Commands::Balance => {
            let data = refresh(api, state.active_group_id.as_deref());
            let balance = data.balance(&config.user.id);
            print_one(cli.json, balance, |b| {
                format!(
                    "net {} ({}) | you owe {} | owed to you {}",
                    format_amount(b.net.abs()),
                    b.position(),
                    format_amount(b.owed),
                    format_amount(b.owed_to_me)
                )
            })?;
        }
        Commands::Bills { command } => match command {
            BillCommands::List => {
                let group_id = require_active(api, state)?;
                let bills = api.list_bills(&group_id)?;
                print_out(cli.json, &bills, |b| {
                    format!(
                        "{}\t{}\t{}\t{}\t{}",
                        b.bill_id,
                        b.description,
                        format_amount(b.amount),
                        b.due_date,
                        b.status.as_str()
                    )
                })?;
            }
            BillCommands::Add {
                description,
                amount,
                due_date,
            } => {
                let group_id = require_active(api, state)?;
                let created = add_bill(
                    api,
                    &group_id,
                    &config.user,
                    description,
                    *amount,
                    due_date.clone(),
                )?;
                print_one(cli.json, created, |c| {
                    format!(
                        "added {} ({}): {} split {} ways at {}",
                        c.bill_id,
                        c.description,
                        format_amount(c.amount),
                        c.share_count,
                        format_amount(c.per_share)
                    )
                })?;
            }
            BillCommands::Pay { bill_id } => {
                let group_id = require_active(api, state)?;
                let paid = mark_paid(api, &group_id, bill_id, &config.user.id)?;
                print_one(cli.json, paid, |p| {
                    format!("marked bill {} paid for {}", p.bill_id, p.user_id)
                })?;
            }
        },
        Commands::Household { .. } => unreachable!("handled by the household dispatcher"),
    }

    Ok(())
}
