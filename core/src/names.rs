//! # Name Pool
//!
//! Fixed first/last name pools and the per-run registry that keeps every
//! issued full name unique within one batch.

use std::collections::HashSet;

use rand::Rng;

pub const FIRST_NAMES: [&str; 90] = [
    "John", "Emma", "Noah", "Ava", "Mason", "Olivia", "Sophia", "James", "Mia", "Elijah",
    "Isabella", "Ethan", "Harper", "Logan", "Aria", "Liam", "Charlotte", "Amelia", "Alexander",
    "Evelyn", "Benjamin", "Abigail", "Michael", "Emily", "Daniel", "Elizabeth", "Henry", "Sofia",
    "Jackson", "Avery", "Sebastian", "Ella", "Jack", "Grace", "Owen", "Chloe", "Wyatt",
    "Victoria", "Luke", "Riley", "Jayden", "Zoey", "Gabriel", "Lily", "Carter", "Hannah",
    "Julian", "Layla", "Leo", "Nora", "Isaac", "Scarlett", "Grayson", "Penelope", "Hudson",
    "Lillian", "Levi", "Zoey", "Mateo", "Stella", "David", "Paisley", "Joseph", "Addison",
    "Samuel", "Aurora", "Caleb", "Brooklyn", "Ryan", "Savannah", "Matthew", "Lucy", "Isaiah",
    "Audrey", "Nathan", "Bella", "Dylan", "Claire", "Eli", "Skylar", "Hunter", "Sadie",
    "Lincoln", "Anna", "Anthony", "Hailey", "Andrew", "Allison", "Thomas", "Natalie",
];

pub const LAST_NAMES: [&str; 90] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
    "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris",
    "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
    "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson", "Watson",
    "Brooks", "Chavez", "Wood", "James", "Bennett", "Gray", "Mendoza", "Ruiz", "Hughes",
];

/// How many clean draws to attempt before degrading to a numeric suffix.
const MAX_CLEAN_DRAWS: u32 = 50;

/// Suffixes are drawn below this bound.
const SUFFIX_SPACE: u32 = 100_000;

fn pick<R: Rng>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

/// Set of full names already issued in the current generation run.
///
/// Cleared at the start of each run; never outlives one.
#[derive(Debug, Default)]
pub struct NameRegistry {
    issued: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.issued.clear();
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Draws a full name not issued before in this run.
    ///
    /// Uniform draws from both pools; after [`MAX_CLEAN_DRAWS`] collisions a
    /// random numeric suffix is appended on each further attempt, so the
    /// call terminates even once the pool pairs are exhausted.
    pub fn unique_name<R: Rng>(&mut self, rng: &mut R) -> String {
        let mut draws = 0u32;
        loop {
            let mut name = format!("{} {}", pick(&FIRST_NAMES, rng), pick(&LAST_NAMES, rng));
            draws += 1;
            if draws > MAX_CLEAN_DRAWS {
                name = format!("{name} {}", rng.random_range(0..SUFFIX_SPACE));
            }
            if self.issued.insert(name.clone()) {
                return name;
            }
        }
    }
}
