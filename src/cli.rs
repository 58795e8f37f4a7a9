use clap::{Parser, Subcommand};

pub const DEFAULT_API_BASE: &str = "https://lfesbjfali.execute-api.us-west-1.amazonaws.com";

#[derive(Parser, Debug)]
#[command(name = "fairshare", version, about = "FairShare household bill-splitting client")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Override the bill service base URL from config"
    )]
    pub api: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the session: active household and onboarding/dashboard route
    Status,
    /// Net balance: what you owe vs. what the household owes you
    Balance,
    Bills {
        #[command(subcommand)]
        command: BillCommands,
    },
    Household {
        #[command(subcommand)]
        command: HouseholdCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Bills of the active household
    List,
    /// Create a bill split equally across the household
    Add {
        #[arg(long)]
        description: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, help = "ISO date, defaults to today")]
        due_date: Option<String>,
    },
    /// Mark your own share on a bill as paid
    Pay { bill_id: String },
}

#[derive(Subcommand, Debug)]
pub enum HouseholdCommands {
    /// Households you belong to
    List,
    /// Members of the active household
    Members,
    Create { name: String },
    Join { group_id: String },
    /// Move focus to another of your households
    Switch { group_id: String },
}
