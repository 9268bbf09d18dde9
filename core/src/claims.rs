//! Claims table generation.
//!
//! Claims sample only policies whose status snapshot is Active, and
//! every incident date lands inside the referenced policy's coverage
//! window clipped at the generation anchor. Start dates are never in
//! the future, so that window always holds at least one day; a policy
//! starting on the anchor day collapses to that single day.

use crate::{
    config::GeneratorConfig,
    error::{DatasetError, DatasetResult},
    policies::PolicyRecord,
    rng::{round_cents, TableRng},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MIN_CLAIMED_AMOUNT: f64 = 100.0;
pub const MAX_CLAIMED_AMOUNT: f64 = 15_000.0;

/// Payout damping range: paid = claimed x U[0.7, 1.0].
pub const MIN_PAYOUT_FACTOR: f64 = 0.7;

const CLAIM_ID_PREFIX: &str = "SIN-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Paid,
    Rejected,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub claim_id: String,
    pub policy_id: String,
    pub incident_date: NaiveDate,
    pub claim_type: String,
    pub amount_claimed: f64,
    pub amount_paid: f64,
    pub status: ClaimStatus,
    pub department: String,
}

/// Generate the Claims table. Errors if no Active policy exists,
/// rather than referencing an invalid one.
pub fn generate_claims(
    count: usize,
    policies: &[PolicyRecord],
    config: &GeneratorConfig,
    rng: &mut TableRng,
) -> DatasetResult<Vec<ClaimRecord>> {
    let active: Vec<&PolicyRecord> = policies.iter().filter(|p| p.status.is_active()).collect();
    if active.is_empty() {
        return Err(DatasetError::NoActivePolicies);
    }

    let mut claims = Vec::with_capacity(count);
    for i in 1..=count {
        let policy = *rng.pick(&active);
        let incident_date =
            rng.date_between(policy.start_date, policy.coverage_cutoff(config.today));

        let amount_claimed = rng.amount_between(MIN_CLAIMED_AMOUNT, MAX_CLAIMED_AMOUNT);
        let payout_factor = MIN_PAYOUT_FACTOR + rng.next_f64() * (1.0 - MIN_PAYOUT_FACTOR);

        claims.push(ClaimRecord {
            claim_id: format!("{}{:04}", CLAIM_ID_PREFIX, i),
            policy_id: policy.policy_id.clone(),
            incident_date,
            claim_type: rng.pick(&config.claim_types).clone(),
            amount_claimed,
            amount_paid: round_cents(amount_claimed * payout_factor),
            status: *rng.weighted(&config.claim_status_weights),
            department: rng.pick(&config.departments).clone(),
        });
    }
    Ok(claims)
}
