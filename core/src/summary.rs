//! Aggregate statistics over a generated dataset, for run summaries.

use crate::generator::Dataset;
use crate::rng::round_cents;
use std::collections::HashMap;

/// How many departments the summary ranks.
pub const TOP_DEPARTMENTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub clients: usize,
    pub policies: usize,
    pub claims: usize,
    pub payments: usize,
    pub total_monthly_premium: f64,
    pub total_claims_paid: f64,
    /// Departments by client count, descending, ties broken by name.
    pub top_departments: Vec<(String, usize)>,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let total_monthly_premium =
            round_cents(dataset.policies.iter().map(|p| p.monthly_premium).sum());
        let total_claims_paid =
            round_cents(dataset.claims.iter().map(|c| c.amount_paid).sum());

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for client in &dataset.clients {
            *counts.entry(client.department.as_str()).or_default() += 1;
        }
        let mut top: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(dept, n)| (dept.to_string(), n))
            .collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top.truncate(TOP_DEPARTMENTS);

        Self {
            clients: dataset.clients.len(),
            policies: dataset.policies.len(),
            claims: dataset.claims.len(),
            payments: dataset.payments.len(),
            total_monthly_premium,
            total_claims_paid,
            top_departments: top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use chrono::NaiveDate;

    #[test]
    fn summary_totals_match_the_tables() {
        let config = GeneratorConfig {
            clients: 60,
            policies: 90,
            claims: 30,
            today: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            ..GeneratorConfig::default()
        };
        let dataset = Dataset::generate(&config).unwrap();
        let summary = DatasetSummary::from_dataset(&dataset);

        assert_eq!(summary.clients, 60);
        assert_eq!(summary.policies, 90);
        assert_eq!(summary.claims, 30);
        assert_eq!(summary.payments, dataset.payments.len());
        assert!(summary.total_monthly_premium > 0.0);
        assert!(summary.total_claims_paid > 0.0);

        assert!(!summary.top_departments.is_empty());
        assert!(summary.top_departments.len() <= TOP_DEPARTMENTS);
        let counted: usize = summary.top_departments.iter().map(|(_, n)| n).sum();
        assert!(counted <= 60);
        for pair in summary.top_departments.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "ranking must be descending");
        }
    }
}
