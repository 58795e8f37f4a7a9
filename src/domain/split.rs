use crate::domain::models::{Member, Share, ShareStatus};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("cannot split a bill across zero household members")]
    EmptyHousehold,
    #[error("bill amount must not be negative (got {0})")]
    NegativeAmount(f64),
}

/// Round to whole cents, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Divide a bill equally across the household at creation time.
///
/// Every member gets `round_cents(amount / n)`; the creator's share starts
/// out `paid`, everyone else's `due`. The rounding remainder is deliberately
/// not reconciled against the face amount, so the shares may sum up to
/// `n - 1` cents away from it.
pub fn compute_shares(
    amount: f64,
    members: &[Member],
    creator_user_id: &str,
) -> Result<Vec<Share>, SplitError> {
    if members.is_empty() {
        return Err(SplitError::EmptyHousehold);
    }
    if amount < 0.0 {
        return Err(SplitError::NegativeAmount(amount));
    }

    let per_share = round_cents(amount / members.len() as f64);
    Ok(members
        .iter()
        .map(|member| Share {
            user_id: member.user_id.clone(),
            amount: per_share,
            status: if member.user_id == creator_user_id {
                ShareStatus::Paid
            } else {
                ShareStatus::Due
            },
        })
        .collect())
}
