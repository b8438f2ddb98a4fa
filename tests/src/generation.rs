#![cfg(test)]
use std::collections::HashSet;

use contactr_common::contact::Contact;
use contactr_common::country::CountryId;
use contactr_common::sourcing::SourcingMode;
use contactr_core::generator::{GenerateError, GenerateRequest, Generator, MAX_COUNT};
use contactr_core::prefixes::PrefixTable;

fn request(country: CountryId, area_code: &str, count: u32) -> GenerateRequest {
    GenerateRequest {
        country,
        area_code: area_code.to_string(),
        mode: SourcingMode::Hybrid,
        count,
        prefix: None,
    }
}

fn generate(req: &GenerateRequest) -> Result<Vec<Contact>, GenerateError> {
    let mut generator = Generator::seeded(PrefixTable::empty(), 2026);
    generator.generate(req).map(<[Contact]>::to_vec)
}

/// Every supported country produces exactly `count` contacts whose numbers
/// carry that country's dial code.
#[test]
fn every_country_generates_well_formed_batches() {
    for country in CountryId::ALL {
        let rule = country.rule();
        let contacts = generate(&request(country, rule.default_area, 25)).unwrap();

        assert_eq!(contacts.len(), 25, "{country}");
        for contact in &contacts {
            assert!(!contact.full_name.is_empty());
            assert!(
                contact.phone.starts_with(rule.dial_code),
                "{country}: {} should start with {}",
                contact.phone,
                rule.dial_code
            );
            assert!(
                contact.phone[rule.dial_code.len()..]
                    .chars()
                    .all(|c| c.is_ascii_digit()),
                "{country}: {}",
                contact.phone
            );
        }
    }
}

/// Stripped of the dial code, every number has the digit count its
/// country's formatting rule mandates.
#[test]
fn digit_lengths_match_each_rule() {
    let cases = [
        // NANPA: 3 area + 3 prefix + 4 line.
        (CountryId::Us, "806", 10),
        (CountryId::Ca, "416", 10),
        // UK landline: area + (9 - area_len) digits.
        (CountryId::Uk, "20", 9),
        // UK mobile: area + 8 digits, trunk "0" dropped.
        (CountryId::Uk, "07911", 12),
        // AU: area forced onto "4", padded toward 8 digits.
        (CountryId::Au, "4", 8),
        // DE: area + exactly 7 digits.
        (CountryId::De, "30", 9),
    ];

    for (country, area, expected_digits) in cases {
        let contacts = generate(&request(country, area, 10)).unwrap();
        let dial_code = country.rule().dial_code;
        for contact in &contacts {
            let digits = contact.phone.len() - dial_code.len();
            assert_eq!(
                digits, expected_digits,
                "{country} area {area}: {}",
                contact.phone
            );
        }
    }
}

#[test]
fn count_limits_are_enforced_inclusively() {
    assert!(matches!(
        generate(&request(CountryId::Us, "806", 0)),
        Err(GenerateError::InvalidCount { .. })
    ));
    assert!(matches!(
        generate(&request(CountryId::Us, "806", MAX_COUNT + 1)),
        Err(GenerateError::InvalidCount { .. })
    ));

    assert_eq!(generate(&request(CountryId::Us, "806", 1)).unwrap().len(), 1);
    assert_eq!(
        generate(&request(CountryId::Us, "806", MAX_COUNT))
            .unwrap()
            .len(),
        MAX_COUNT as usize
    );
}

#[test]
fn nanpa_rejects_malformed_area_codes() {
    for bad in ["80", "abcd"] {
        assert!(matches!(
            generate(&request(CountryId::Us, bad, 5)),
            Err(GenerateError::BadAreaCode { .. })
        ));
        assert!(matches!(
            generate(&request(CountryId::Ca, bad, 5)),
            Err(GenerateError::BadAreaCode { .. })
        ));
    }

    assert!(generate(&request(CountryId::Us, "806", 5)).is_ok());
}

#[test]
fn non_nanpa_area_codes_are_corrected_not_rejected() {
    let contacts = generate(&request(CountryId::Uk, "not-a-code", 5)).unwrap();
    // Unusable input falls back to the London default.
    assert!(contacts.iter().all(|c| c.phone.starts_with("+4420")));
}

/// Names stay unique within one run even past the 90 * 90 clean pairs.
#[test]
fn names_are_unique_within_a_run() {
    let contacts = generate(&request(CountryId::De, "30", 9_000)).unwrap();

    let mut seen = HashSet::new();
    for contact in &contacts {
        assert!(
            seen.insert(contact.full_name.as_str()),
            "duplicate name: {}",
            contact.full_name
        );
    }
}

/// The deferred path produces the same result shape as the inline one and
/// drives its progress callback through to the final contact.
#[tokio::test]
async fn large_batches_run_deferred_with_progress() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    let req = request(CountryId::Us, "806", 3_000);
    let last = Arc::new(AtomicU64::new(0));
    let sink = Arc::clone(&last);

    let generator = Generator::seeded(PrefixTable::empty(), 5);
    let generator = generator
        .run(&req, Some(Box::new(move |done| sink.store(done, Ordering::Relaxed))))
        .await
        .unwrap();

    assert_eq!(generator.batch().len(), 3_000);
    assert_eq!(last.load(Ordering::Relaxed), 3_000);
}

#[tokio::test]
async fn deferred_validation_still_fails_fast() {
    let generator = Generator::seeded(PrefixTable::empty(), 5);
    let result = generator
        .run(&request(CountryId::Us, "80", 5_000), None)
        .await;

    assert!(matches!(result, Err(GenerateError::BadAreaCode { .. })));
}

#[test]
fn same_seed_same_batch() {
    let req = request(CountryId::Us, "806", 200);

    let mut first = Generator::seeded(PrefixTable::empty(), 99);
    let mut second = Generator::seeded(PrefixTable::empty(), 99);

    assert_eq!(
        first.generate(&req).unwrap(),
        second.generate(&req).unwrap()
    );
}
