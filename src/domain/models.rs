use serde::{Deserialize, Serialize};

/// Placeholder used when the service omits a bill's due date.
pub const PLACEHOLDER_DUE_DATE: &str = "2025-11-01";

fn default_due_date() -> String {
    PLACEHOLDER_DUE_DATE.to_string()
}

fn default_email() -> String {
    "unknown@example.com".to_string()
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub group_id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HouseholdDetail {
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl Member {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.user_id
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareStatus {
    #[default]
    Due,
    Paid,
}

impl ShareStatus {
    /// Forward-only transition: `Due -> Paid`, with `Paid` terminal.
    pub fn pay(self) -> Result<ShareStatus, ShareError> {
        match self {
            ShareStatus::Due => Ok(ShareStatus::Paid),
            ShareStatus::Paid => Err(ShareError::AlreadyPaid),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShareStatus::Due => "due",
            ShareStatus::Paid => "paid",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ShareError {
    #[error("share is already marked paid")]
    AlreadyPaid,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub user_id: String,
    pub amount: f64,
    pub status: ShareStatus,
}

impl Share {
    pub fn mark_paid(&mut self) -> Result<(), ShareError> {
        self.status = self.status.pay()?;
        Ok(())
    }
}

/// A bill as returned by the list-bills endpoint. `status` is the calling
/// user's own share status on that bill.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_id: String,
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_due_date")]
    pub due_date: String,
    pub created_by: String,
    #[serde(default)]
    pub status: ShareStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Summary {
    #[serde(default, rename = "totalowed")]
    pub total_owed: f64,
    #[serde(default)]
    pub bills: Vec<SummaryBill>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryBill {
    #[serde(default)]
    pub my_amount: f64,
    #[serde(default)]
    pub created_by: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Onboarding,
    Dashboard,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct State {
    pub active_group_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: UserProfile,
}

fn default_api_base() -> String {
    crate::cli::DEFAULT_API_BASE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            user: UserProfile::default(),
        }
    }
}

fn default_user_id() -> String {
    "dummy-user".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_user_id")]
    pub id: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        // Prototype identity used when no config is present, matching the
        // service's unauthenticated pass-through behavior.
        Self {
            id: "dummy-user".to_string(),
            email: "dummy-user@example.com".to_string(),
            name: "dummy-user".to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct StatusReport {
    pub route: Route,
    pub active_group_id: Option<String>,
    pub active_group_name: Option<String>,
    pub household_count: usize,
    pub member_count: usize,
    pub bill_count: usize,
}

#[derive(Serialize)]
pub struct BillCreated {
    pub bill_id: String,
    pub description: String,
    pub amount: f64,
    pub per_share: f64,
    pub share_count: usize,
}

#[derive(Serialize)]
pub struct SharePaid {
    pub bill_id: String,
    pub user_id: String,
    pub status: ShareStatus,
}

#[derive(Serialize)]
pub struct HouseholdCreated {
    pub group_id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct HouseholdJoined {
    pub group_id: String,
    pub user_id: String,
}

#[derive(Serialize)]
pub struct HouseholdSwitched {
    pub group_id: String,
    pub name: String,
}
