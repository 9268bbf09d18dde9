//! Deterministic identity-field generation using curated name lists.
//!
//! Provides plausible Salvadoran client and agent names plus derived
//! contact fields (email, phone). All generation is deterministic
//! (same RNG stream position = same identity).

use crate::rng::TableRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically.
    pub fn full_name(rng: &mut TableRng) -> String {
        let first = Self::first_name(rng);
        let last = Self::last_name(rng);
        format!("{} {}", first, last)
    }

    pub fn first_name(rng: &mut TableRng) -> &'static str {
        *rng.pick(Self::first_names())
    }

    pub fn last_name(rng: &mut TableRng) -> &'static str {
        *rng.pick(Self::last_names())
    }

    /// Email derived from a drawn name, with an occasional numeric
    /// suffix so heavy name collisions still look realistic.
    pub fn email_for(first: &str, last: &str, rng: &mut TableRng) -> String {
        let domain = rng.pick(Self::email_domains());
        if rng.chance(0.3) {
            let n = rng.int_between(1, 99);
            format!("{}.{}{}@{}", first.to_lowercase(), last.to_lowercase(), n, domain)
        } else {
            format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), domain)
        }
    }

    /// Salvadoran mobile number: leading 7 plus seven digits.
    pub fn phone(rng: &mut TableRng) -> String {
        format!("7{:07}", rng.next_u64_below(10_000_000))
    }

    /// Curated first names (Central American, ASCII-folded).
    fn first_names() -> &'static [&'static str] {
        &[
            "Carlos", "Jose", "Luis", "Juan", "Miguel", "Oscar", "Mario", "Roberto",
            "Francisco", "Ricardo", "Fernando", "Jorge", "Manuel", "Rafael", "Hector",
            "Salvador", "Mauricio", "Nelson", "Edgar", "Julio", "Diego", "Andres",
            "Ernesto", "Guillermo", "Alejandro", "Rodrigo", "Javier", "Daniel",
            "Gerardo", "Walter",
            "Maria", "Ana", "Carmen", "Rosa", "Sandra", "Claudia", "Patricia",
            "Gloria", "Silvia", "Marta", "Lorena", "Veronica", "Gabriela", "Cecilia",
            "Beatriz", "Karla", "Daniela", "Alejandra", "Sofia", "Elena", "Raquel",
            "Julia", "Teresa", "Isabel", "Monica", "Adriana", "Leticia", "Paola",
            "Susana", "Ivonne",
        ]
    }

    /// Curated last names.
    fn last_names() -> &'static [&'static str] {
        &[
            "Hernandez", "Martinez", "Lopez", "Garcia", "Rodriguez", "Gonzalez",
            "Perez", "Sanchez", "Ramirez", "Flores", "Rivera", "Gomez", "Diaz",
            "Reyes", "Cruz", "Morales", "Ortiz", "Gutierrez", "Chavez", "Ramos",
            "Mendoza", "Ruiz", "Alvarez", "Castillo", "Romero", "Vasquez", "Aguilar",
            "Medina", "Castro", "Vargas", "Guzman", "Mendez", "Salazar", "Orellana",
            "Portillo", "Escobar", "Quintanilla", "Menjivar", "Ayala", "Campos",
            "Figueroa", "Serrano", "Carranza", "Pineda", "Bonilla", "Zelaya",
            "Argueta", "Molina", "Navarro", "Alas",
        ]
    }

    fn email_domains() -> &'static [&'static str] {
        &["gmail.com", "hotmail.com", "yahoo.com", "outlook.com"]
    }
}
