use crate::domain::models::Bill;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Balance {
    pub owed: f64,
    pub owed_to_me: f64,
    pub net: f64,
}

impl Balance {
    pub fn position(&self) -> &'static str {
        if self.net >= 0.0 {
            "creditor"
        } else {
            "debtor"
        }
    }
}

/// Net position across the user's households.
///
/// `owed` is the service-computed total of the user's own outstanding
/// shares; it is consumed as-is, never recomputed. `owed_to_me` sums the
/// face amount of bills the user created: the creator's share is marked
/// paid on creation, so a created bill is money fronted to the household.
pub fn compute_balance(owed: f64, bills: &[Bill], current_user_id: &str) -> Balance {
    let owed_to_me: f64 = bills
        .iter()
        .filter(|bill| bill.created_by == current_user_id)
        .map(|bill| bill.amount)
        .sum();
    Balance {
        owed,
        owed_to_me,
        net: owed_to_me - owed,
    }
}
