//! Run orchestration — the heart of the dataset generator.
//!
//! GENERATION ORDER (fixed, documented, never reordered):
//!   1. Clients
//!   2. Policies   (needs the completed client table)
//!   3. Claims     (needs the completed policy table)
//!   4. Payments   (needs the completed policy table)
//!
//! RULES:
//!   - Each table draws from its own RNG stream via the RngBank, so
//!     the relative order of Claims and Payments cannot change the
//!     output of either.
//!   - A run either returns four mutually consistent tables or fails
//!     with a configuration error; there is no partial output.
//!   - Tables are immutable once generated.

use crate::{
    claims::{generate_claims, ClaimRecord},
    clients::{generate_clients, ClientRecord},
    config::GeneratorConfig,
    error::DatasetResult,
    payments::{generate_payments, PaymentRecord},
    policies::{generate_policies, PolicyRecord},
    rng::{RngBank, TableSlot},
};

/// The four related tables produced by one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub clients: Vec<ClientRecord>,
    pub policies: Vec<PolicyRecord>,
    pub claims: Vec<ClaimRecord>,
    pub payments: Vec<PaymentRecord>,
}

impl Dataset {
    /// Run the full generation pipeline. Deterministic: identical
    /// config (seed and anchor date included) reproduces the tables
    /// byte for byte.
    pub fn generate(config: &GeneratorConfig) -> DatasetResult<Dataset> {
        let bank = RngBank::new(config.seed);

        let clients = generate_clients(config, &mut bank.for_table(TableSlot::Clients));
        log::info!("generated {} clients", clients.len());

        let policies = generate_policies(
            config.policies,
            &clients,
            config,
            &mut bank.for_table(TableSlot::Policies),
        )?;
        log::info!("generated {} policies", policies.len());

        let claims = generate_claims(
            config.claims,
            &policies,
            config,
            &mut bank.for_table(TableSlot::Claims),
        )?;
        log::info!("generated {} claims", claims.len());

        let payments =
            generate_payments(&policies, config, &mut bank.for_table(TableSlot::Payments));
        log::info!("generated {} payments", payments.len());

        Ok(Dataset {
            clients,
            policies,
            claims,
            payments,
        })
    }
}
