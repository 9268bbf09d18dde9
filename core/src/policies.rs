//! Policies table generation.
//!
//! A policy owns the coverage window every downstream claim and
//! payment must fall inside. Status is a snapshot drawn at generation
//! time; only Active policies are eligible sources for claims and
//! payments.

use crate::{
    clients::ClientRecord,
    config::GeneratorConfig,
    error::{DatasetError, DatasetResult},
    name_generator::NameGenerator,
    rng::TableRng,
    types::ClientId,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MIN_INSURED_AMOUNT: f64 = 5_000.0;
pub const MAX_INSURED_AMOUNT: f64 = 100_000.0;
pub const MIN_MONTHLY_PREMIUM: f64 = 25.0;
pub const MAX_MONTHLY_PREMIUM: f64 = 300.0;

const POLICY_ID_PREFIX: &str = "POL-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Expired,
    Cancelled,
}

impl PolicyStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub policy_id: String,
    pub client_id: ClientId,
    pub product_type: String,
    pub insured_amount: f64,
    pub monthly_premium: f64,
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub status: PolicyStatus,
    pub agent: String,
}

impl PolicyRecord {
    /// Coverage window end as seen from the generation anchor:
    /// claims and payments may not postdate this.
    pub fn coverage_cutoff(&self, today: NaiveDate) -> NaiveDate {
        self.expiration_date.min(today)
    }

    /// Parse the sequence number back out of a formatted policy ID.
    pub fn sequence_number(&self) -> Option<u32> {
        self.policy_id.strip_prefix(POLICY_ID_PREFIX)?.parse().ok()
    }
}

/// Zero-padded sequential policy identifier, e.g. `POL-001`.
pub fn format_policy_id(sequence: u32) -> String {
    format!("{}{:03}", POLICY_ID_PREFIX, sequence)
}

/// Generate the Policies table. Errors if the client table is empty,
/// since every policy must reference an owner.
pub fn generate_policies(
    count: usize,
    clients: &[ClientRecord],
    config: &GeneratorConfig,
    rng: &mut TableRng,
) -> DatasetResult<Vec<PolicyRecord>> {
    if clients.is_empty() {
        return Err(DatasetError::EmptyClientTable);
    }

    let window_start = config.today - Duration::days(config.policy_start_window_days);
    let mut policies = Vec::with_capacity(count);

    for i in 1..=count {
        let start_date = rng.date_between(window_start, config.today);
        policies.push(PolicyRecord {
            policy_id: format_policy_id(i as u32),
            // Client IDs are contiguous from 1, so a uniform draw over
            // the closed range can never dangle.
            client_id: rng.int_between(1, clients.len() as u32),
            product_type: rng.pick(&config.product_types).clone(),
            insured_amount: rng.amount_between(MIN_INSURED_AMOUNT, MAX_INSURED_AMOUNT),
            monthly_premium: rng.amount_between(MIN_MONTHLY_PREMIUM, MAX_MONTHLY_PREMIUM),
            start_date,
            expiration_date: start_date + Duration::days(config.policy_term_days),
            status: *rng.weighted(&config.policy_status_weights),
            agent: NameGenerator::full_name(rng),
        });
    }
    Ok(policies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clients::generate_clients,
        rng::{RngBank, TableSlot},
    };

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            clients: 50,
            policies: 200,
            today: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            ..GeneratorConfig::default()
        }
    }

    fn generate(config: &GeneratorConfig) -> Vec<PolicyRecord> {
        let bank = RngBank::new(config.seed);
        let clients = generate_clients(config, &mut bank.for_table(TableSlot::Clients));
        generate_policies(
            config.policies,
            &clients,
            config,
            &mut bank.for_table(TableSlot::Policies),
        )
        .unwrap()
    }

    #[test]
    fn empty_client_table_is_a_configuration_error() {
        let config = test_config();
        let mut rng = RngBank::new(config.seed).for_table(TableSlot::Policies);
        let result = generate_policies(10, &[], &config, &mut rng);
        assert!(matches!(result, Err(DatasetError::EmptyClientTable)));
    }

    #[test]
    fn ids_are_formatted_and_parseable() {
        let config = test_config();
        let policies = generate(&config);
        assert_eq!(policies[0].policy_id, "POL-001");
        assert_eq!(policies[199].policy_id, "POL-200");
        for (i, p) in policies.iter().enumerate() {
            assert_eq!(p.sequence_number(), Some((i + 1) as u32));
        }
    }

    #[test]
    fn expiration_follows_start_by_the_term() {
        let config = test_config();
        for p in generate(&config) {
            assert!(p.expiration_date > p.start_date);
            assert_eq!(
                p.expiration_date - p.start_date,
                Duration::days(config.policy_term_days)
            );
        }
    }

    #[test]
    fn owners_stay_inside_the_client_range() {
        let config = test_config();
        for p in generate(&config) {
            assert!(p.client_id >= 1 && p.client_id <= config.clients as u32);
        }
    }

    #[test]
    fn amounts_are_inside_the_product_bounds() {
        let config = test_config();
        for p in generate(&config) {
            assert!((MIN_INSURED_AMOUNT..=MAX_INSURED_AMOUNT).contains(&p.insured_amount));
            assert!((MIN_MONTHLY_PREMIUM..=MAX_MONTHLY_PREMIUM).contains(&p.monthly_premium));
        }
    }
}
