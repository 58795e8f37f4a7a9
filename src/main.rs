use clap::Parser;

mod api;
mod cli;
mod commands;
mod domain;
mod services;

pub use api::{ApiClient, ApiError, CreatedBill, CreatedGroup, JoinRequest, NewBill};
pub use cli::{BillCommands, Cli, Commands, HouseholdCommands, DEFAULT_API_BASE};
pub use commands::{handle_household_commands, handle_runtime_commands};
pub use domain::balance::{compute_balance, Balance};
pub use domain::models::*;
pub use domain::session::{resolve, Resolution};
pub use domain::split::{compute_shares, round_cents, SplitError};
pub use services::expenses::{add_bill, mark_paid};
pub use services::households::{create_household, join_household, switch_household};
pub use services::output::{format_amount, print_one, print_out};
pub use services::session::{refresh, require_active, SessionData};
pub use services::storage::{audit, load_config, load_state, save_state};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if cli.json {
            let out = ErrorOut {
                ok: false,
                error: ErrorBody {
                    code: error_code(&err).to_string(),
                    message: format!("{err:#}"),
                },
            };
            if let Ok(rendered) = serde_json::to_string_pretty(&out) {
                println!("{rendered}");
            }
        } else {
            eprintln!("error: {err:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let mut state = load_state()?;
    let base = cli.api.as_deref().unwrap_or(&config.api_base);
    let api = ApiClient::new(base, config.token.clone())?;

    if handle_household_commands(cli, &api, &config, &mut state)? {
        return Ok(());
    }
    handle_runtime_commands(cli, &api, &config, &mut state)
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return match api {
            ApiError::Network { .. } => "NETWORK",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Status { .. } => "HTTP_STATUS",
            ApiError::Decode { .. } => "BAD_RESPONSE",
        };
    }
    if err.downcast_ref::<SplitError>().is_some() {
        return "INVALID_SPLIT";
    }
    if let Some(ShareError::AlreadyPaid) = err.downcast_ref::<ShareError>() {
        return "ALREADY_PAID";
    }
    "ERROR"
}
