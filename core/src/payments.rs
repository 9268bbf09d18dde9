//! Payments table generation.
//!
//! Payment counts are derived by a date-cursor walk, never sampled:
//! for each Active policy the cursor starts at the policy's start
//! date and advances in fixed 30-day steps while it stays at or
//! before min(expiration, today). This is what guarantees the
//! per-policy monotonicity and cutoff invariants; a policy that is
//! not Active produces zero payments, and a policy starting on the
//! anchor day produces exactly one.
//!
//! Payment IDs come from one counter threaded across all policies,
//! so the full table's ID sequence is injective.

use crate::{config::GeneratorConfig, policies::PolicyRecord, rng::TableRng};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

const PAYMENT_ID_PREFIX: &str = "PAG-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub payment_id: String,
    pub policy_id: String,
    pub payment_date: NaiveDate,
    pub amount: f64,
    pub status: PaymentStatus,
    pub method: String,
}

/// Expand every Active policy into its premium installment schedule.
/// Pure function of the policy table and stream position.
pub fn generate_payments(
    policies: &[PolicyRecord],
    config: &GeneratorConfig,
    rng: &mut TableRng,
) -> Vec<PaymentRecord> {
    let mut payments = Vec::new();
    let mut sequence: u32 = 1;

    for policy in policies.iter().filter(|p| p.status.is_active()) {
        let cutoff = policy.coverage_cutoff(config.today);
        let mut cursor = policy.start_date;
        while cursor <= cutoff {
            payments.push(PaymentRecord {
                payment_id: format!("{}{:05}", PAYMENT_ID_PREFIX, sequence),
                policy_id: policy.policy_id.clone(),
                payment_date: cursor,
                amount: policy.monthly_premium,
                status: *rng.weighted(&config.payment_status_weights),
                method: rng.pick(&config.payment_methods).clone(),
            });
            sequence += 1;
            cursor += Duration::days(config.payment_interval_days);
        }
    }
    payments
}

/// Number of installments the cursor walk yields for one policy:
/// floor((min(expiration, today) - start) / interval) + 1, or zero
/// for a non-Active policy.
pub fn expected_payment_count(policy: &PolicyRecord, config: &GeneratorConfig) -> usize {
    if !policy.status.is_active() {
        return 0;
    }
    let span = (policy.coverage_cutoff(config.today) - policy.start_date).num_days();
    if span < 0 {
        return 0;
    }
    (span / config.payment_interval_days) as usize + 1
}
