//! Clients table generation.
//!
//! Clients are the root of the dependency chain: every other table
//! references them directly (policies) or transitively (claims,
//! payments). IDs are contiguous from 1 so a policy can draw an owner
//! uniformly from a closed range with no referential check needed.

use crate::{
    config::GeneratorConfig, name_generator::NameGenerator, rng::TableRng, types::ClientId,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientSegment {
    Individual,
    Business,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_id: ClientId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub department: String,
    pub municipality: String,
    pub email: String,
    pub phone: String,
    pub registration_date: NaiveDate,
    pub segment: ClientSegment,
}

/// Generate the Clients table. Pure function of config and stream
/// position; cannot fail.
pub fn generate_clients(config: &GeneratorConfig, rng: &mut TableRng) -> Vec<ClientRecord> {
    let window_start = config.today - Duration::days(config.registration_window_days);
    let mut clients = Vec::with_capacity(config.clients);

    for i in 1..=config.clients {
        let first = NameGenerator::first_name(rng);
        let last = NameGenerator::last_name(rng);
        let email = NameGenerator::email_for(first, last, rng);
        let department = rng.pick(&config.departments).clone();
        let municipality = rng.pick(&config.municipalities_for(&department)).clone();

        clients.push(ClientRecord {
            client_id: i as ClientId,
            name: format!("{} {}", first, last),
            age: rng.int_between(MIN_AGE, MAX_AGE),
            gender: if rng.chance(0.5) { Gender::M } else { Gender::F },
            department,
            municipality,
            email,
            phone: NameGenerator::phone(rng),
            registration_date: rng.date_between(window_start, config.today),
            segment: *rng.weighted(&config.segment_weights),
        });
    }
    clients
}
