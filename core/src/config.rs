//! Generation configuration: record counts, master seed, temporal
//! anchor, and the categorical catalogs every table draws from.
//!
//! `Default` reproduces the reference dataset shape: 500 clients,
//! 800 policies, 250 claims, Salvadoran geography, a 365-day policy
//! term and a 30-day payment interval.

use crate::{
    claims::ClaimStatus, clients::ClientSegment, payments::PaymentStatus, policies::PolicyStatus,
    types::Seed,
};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Municipality used when a department has no curated list.
pub const FALLBACK_MUNICIPALITY: &str = "Municipio Principal";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub clients: usize,
    pub policies: usize,
    pub claims: usize,
    pub seed: Seed,

    /// Temporal anchor for every bounded historical window. All dates
    /// drawn by the generator are relative to this day, never to the
    /// wall clock, so a fixed anchor plus a fixed seed reproduces a
    /// run exactly.
    pub today: NaiveDate,

    pub departments: Vec<String>,
    pub municipalities: HashMap<String, Vec<String>>,
    pub product_types: Vec<String>,
    pub claim_types: Vec<String>,
    pub payment_methods: Vec<String>,

    pub segment_weights: Vec<(ClientSegment, f64)>,
    pub policy_status_weights: Vec<(PolicyStatus, f64)>,
    pub claim_status_weights: Vec<(ClaimStatus, f64)>,
    pub payment_status_weights: Vec<(PaymentStatus, f64)>,

    /// Client registration window: [today - N days, today].
    pub registration_window_days: i64,
    /// Policy start window: [today - N days, today].
    pub policy_start_window_days: i64,
    /// Policy coverage term in days (expiration = start + term).
    pub policy_term_days: i64,
    /// Nominal month between premium installments.
    pub payment_interval_days: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let departments: Vec<String> = [
            "San Salvador", "Santa Ana", "San Miguel", "La Libertad", "Usulutan",
            "Sonsonate", "La Paz", "Chalatenango", "Cuscatlan", "Ahuachapan",
            "Morazan", "La Union", "Cabanas", "San Vicente",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let mut municipalities = HashMap::new();
        municipalities.insert(
            "San Salvador".to_string(),
            vec!["San Salvador", "Soyapango", "Apopa", "Mejicanos", "Delgado"],
        );
        municipalities.insert(
            "Santa Ana".to_string(),
            vec!["Santa Ana", "Chalchuapa", "Metapan"],
        );
        municipalities.insert(
            "San Miguel".to_string(),
            vec!["San Miguel", "Chinameca", "Nueva Guadalupe"],
        );
        municipalities.insert(
            "La Libertad".to_string(),
            vec!["Santa Tecla", "Antiguo Cuscatlan", "Zaragoza"],
        );
        let municipalities = municipalities
            .into_iter()
            .map(|(k, v)| (k, v.into_iter().map(String::from).collect()))
            .collect();

        Self {
            clients: 500,
            policies: 800,
            claims: 250,
            seed: 42,
            today: Local::now().date_naive(),
            departments,
            municipalities,
            product_types: ["Auto", "Life", "Health", "Home", "Business", "Agricultural"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            claim_types: ["Collision", "Theft", "Fire", "Hospitalization", "Death"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            payment_methods: ["Transfer", "Card", "Cash"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            segment_weights: vec![
                (ClientSegment::Individual, 0.6),
                (ClientSegment::Business, 0.3),
                (ClientSegment::Premium, 0.1),
            ],
            policy_status_weights: vec![
                (PolicyStatus::Active, 0.8),
                (PolicyStatus::Expired, 0.15),
                (PolicyStatus::Cancelled, 0.05),
            ],
            claim_status_weights: vec![
                (ClaimStatus::Paid, 0.7),
                (ClaimStatus::Rejected, 0.2),
                (ClaimStatus::InProgress, 0.1),
            ],
            payment_status_weights: vec![
                (PaymentStatus::Completed, 0.9),
                (PaymentStatus::Pending, 0.1),
            ],
            registration_window_days: 3 * 365,
            policy_start_window_days: 2 * 365,
            policy_term_days: 365,
            payment_interval_days: 30,
        }
    }
}

impl GeneratorConfig {
    /// Municipality catalog for a department, falling back to the
    /// generic name for departments without a curated list.
    pub fn municipalities_for(&self, department: &str) -> Vec<String> {
        self.municipalities
            .get(department)
            .cloned()
            .unwrap_or_else(|| vec![FALLBACK_MUNICIPALITY.to_string()])
    }
}
