//! # Contact Generator
//!
//! Orchestrates a generation run: validates the request up front, then
//! pairs a unique name with a synthesized number `count` times.
//!
//! All per-run state (name registry, RNG, loaded prefix table, the last
//! batch) lives on [`Generator`]; a run is a function of the request plus
//! this context, with nothing ambient. Runs never overlap and cannot be
//! cancelled once started.

use contactr_common::contact::Contact;
use contactr_common::country::{CountryId, CountryRule};
use contactr_common::sourcing::SourcingMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::names::NameRegistry;
use crate::prefixes::PrefixTable;
use crate::synth;

/// Inclusive bounds on how many contacts one run may produce.
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 20_000;

/// Batches above this size run off the immediate path so the caller can
/// keep a progress indicator responsive.
pub const DEFER_THRESHOLD: u32 = 2_000;

/// Contacts between progress reports on a deferred run.
const PROGRESS_EVERY: u32 = 250;

/// Invoked with the number of contacts finished so far.
pub type ProgressFn = Box<dyn Fn(u64) + Send>;

/// The two hard validation failures. Everything else about a request is
/// soft-corrected instead of rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("amount must be between {MIN_COUNT} and {MAX_COUNT}, got {given}")]
    InvalidCount { given: u32 },
    #[error("US/Canada need a 3-digit area code (e.g. 806), got \"{given}\"")]
    BadAreaCode { given: String },
}

/// One generation request, as collected from the command line.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub country: CountryId,
    pub area_code: String,
    pub mode: SourcingMode,
    pub count: u32,
    /// Pre-selected central-office code; when absent, NANPA runs draw a
    /// fresh candidate per contact.
    pub prefix: Option<String>,
}

/// A validated request: hard checks passed, soft corrections applied.
struct Plan {
    rule: &'static CountryRule,
    area: String,
    mode: SourcingMode,
    count: u32,
    prefix: Option<String>,
}

impl Plan {
    fn validate(request: &GenerateRequest) -> Result<Self, GenerateError> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&request.count) {
            return Err(GenerateError::InvalidCount {
                given: request.count,
            });
        }

        let rule = request.country.rule();
        let area = if rule.uses_nanpa() {
            let trimmed = request.area_code.trim();
            if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
                return Err(GenerateError::BadAreaCode {
                    given: request.area_code.clone(),
                });
            }
            trimmed.to_string()
        } else {
            let digits: String = request
                .area_code
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if digits.is_empty() {
                rule.default_area.to_string()
            } else {
                digits
            }
        };

        Ok(Self {
            rule,
            area,
            mode: request.mode,
            count: request.count,
            prefix: request.prefix.clone(),
        })
    }
}

/// Owns everything a generation run touches.
pub struct Generator {
    prefixes: PrefixTable,
    names: NameRegistry,
    rng: StdRng,
    batch: Vec<Contact>,
}

impl Generator {
    pub fn new(prefixes: PrefixTable) -> Self {
        Self::with_rng(prefixes, StdRng::from_os_rng())
    }

    /// A fixed seed makes a run reproducible for the same request.
    pub fn seeded(prefixes: PrefixTable, seed: u64) -> Self {
        Self::with_rng(prefixes, StdRng::seed_from_u64(seed))
    }

    fn with_rng(prefixes: PrefixTable, rng: StdRng) -> Self {
        Self {
            prefixes,
            names: NameRegistry::new(),
            rng,
            batch: Vec::new(),
        }
    }

    /// Contacts from the most recent run.
    pub fn batch(&self) -> &[Contact] {
        &self.batch
    }

    pub fn prefix_table(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// Validates and runs a batch synchronously.
    pub fn generate(&mut self, request: &GenerateRequest) -> Result<&[Contact], GenerateError> {
        let plan = Plan::validate(request)?;
        self.fill(&plan, None);
        Ok(&self.batch)
    }

    /// Validates and runs a batch, moving large runs onto a blocking task
    /// so the caller's runtime stays responsive.
    ///
    /// The await is the completion signal; `progress` reports contacts
    /// finished so far. There is no cancellation.
    pub async fn run(
        mut self,
        request: &GenerateRequest,
        progress: Option<ProgressFn>,
    ) -> Result<Self, GenerateError> {
        let plan = Plan::validate(request)?;

        if plan.count > DEFER_THRESHOLD {
            let handle = tokio::task::spawn_blocking(move || {
                self.fill(&plan, progress);
                self
            });
            Ok(handle.await.expect("generation task panicked"))
        } else {
            self.fill(&plan, progress);
            Ok(self)
        }
    }

    fn fill(&mut self, plan: &Plan, progress: Option<ProgressFn>) {
        self.names.clear();
        self.batch.clear();
        self.batch.reserve(plan.count as usize);

        // Resolved once per run; per-contact draws index into this.
        let candidates = if plan.rule.uses_nanpa() && plan.prefix.is_none() {
            self.prefixes.candidates(&plan.area, plan.mode, plan.rule)
        } else {
            Vec::new()
        };

        for finished in 1..=plan.count {
            let full_name = self.names.unique_name(&mut self.rng);
            let prefix = match &plan.prefix {
                Some(prefix) => prefix.as_str(),
                None if !candidates.is_empty() => {
                    candidates[self.rng.random_range(0..candidates.len())].as_str()
                }
                None => "",
            };
            let phone = synth::synthesize(plan.rule, &plan.area, prefix, &mut self.rng);
            self.batch.push(Contact { full_name, phone });

            if let Some(report) = &progress {
                if finished % PROGRESS_EVERY == 0 || finished == plan.count {
                    report(u64::from(finished));
                }
            }
        }
    }
}
