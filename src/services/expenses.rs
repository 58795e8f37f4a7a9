use crate::api::{ApiClient, NewBill};
use crate::domain::models::{BillCreated, SharePaid, UserProfile};
use crate::domain::split::compute_shares;
use crate::services::storage::audit;
use anyhow::Context;

/// Create a bill split equally across the household's current members.
/// Members joining later are not retroactively added to this bill.
pub fn add_bill(
    api: &ApiClient,
    group_id: &str,
    user: &UserProfile,
    description: &str,
    amount: f64,
    due_date: Option<String>,
) -> anyhow::Result<BillCreated> {
    let detail = api.household_detail(group_id)?;
    let shares = compute_shares(amount, &detail.members, &user.id)?;
    let due = due_date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let created = api.create_bill(
        group_id,
        &NewBill {
            description,
            amount,
            due_date: &due,
            shares: &shares,
        },
    )?;
    audit(
        "bill_add",
        serde_json::json!({
            "group": group_id,
            "bill": created.bill_id,
            "amount": created.amount,
            "shares": shares.len(),
        }),
    );

    Ok(BillCreated {
        bill_id: created.bill_id,
        description: created.description,
        amount: created.amount,
        per_share: shares.first().map(|s| s.amount).unwrap_or(0.0),
        share_count: shares.len(),
    })
}

/// Mark the caller's own share on a bill as paid. The transition is
/// forward-only; a share that is already paid is rejected before any
/// request is sent.
pub fn mark_paid(
    api: &ApiClient,
    group_id: &str,
    bill_id: &str,
    user_id: &str,
) -> anyhow::Result<SharePaid> {
    let bills = api.list_bills(group_id)?;
    let bill = bills
        .iter()
        .find(|b| b.bill_id == bill_id)
        .with_context(|| format!("bill not found in active household: {bill_id}"))?;

    let paid = bill
        .status
        .pay()
        .with_context(|| format!("cannot pay bill {bill_id}"))?;

    api.mark_share_paid(group_id, bill_id, user_id)?;
    audit(
        "share_paid",
        serde_json::json!({ "group": group_id, "bill": bill_id, "user": user_id }),
    );

    Ok(SharePaid {
        bill_id: bill_id.to_string(),
        user_id: user_id.to_string(),
        status: paid,
    })
}
