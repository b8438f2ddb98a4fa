//! # Number Synthesizer
//!
//! Per-country assembly of phone number strings. Numbers are well-formed
//! by construction for their rule; nothing here validates against a real
//! numbering plan.

use contactr_common::country::{CountryRule, NumberFormat};
use rand::Rng;

/// UK local parts pad the national number toward this many digits...
const UK_NATIONAL_DIGITS: usize = 9;
/// ...but never fewer than this many are appended.
const UK_MIN_LOCAL_DIGITS: usize = 5;
/// Digits following a UK mobile ("7...") area code.
const UK_MOBILE_LOCAL_DIGITS: usize = 8;
/// AU numbers aim for this many digits after the dial code...
const AU_NATIONAL_DIGITS: usize = 8;
/// ...with at least this many appended.
const AU_MIN_LOCAL_DIGITS: usize = 6;
/// DE local parts are a fixed length.
const DE_LOCAL_DIGITS: usize = 7;

/// Assembles a number for `rule` from the area input.
///
/// NANPA rules trust `area_input` to be 3 digits (checked upstream) and use
/// `prefix` as the central-office code; the other formats ignore `prefix`
/// and normalize the area input themselves, stripping non-digits and
/// substituting the rule default when what remains is too short.
pub fn synthesize<R: Rng>(
    rule: &CountryRule,
    area_input: &str,
    prefix: &str,
    rng: &mut R,
) -> String {
    match rule.format {
        NumberFormat::Nanpa => nanpa(rule, area_input, prefix, rng),
        NumberFormat::Uk => uk(rule, area_input, rng),
        NumberFormat::Au => au(rule, area_input, rng),
        NumberFormat::De => de(rule, area_input, rng),
    }
}

fn nanpa<R: Rng>(rule: &CountryRule, area: &str, prefix: &str, rng: &mut R) -> String {
    let line = rng.random_range(1..=9999u16);
    format!("{}{}{}{:04}", rule.dial_code, area, prefix, line)
}

fn uk<R: Rng>(rule: &CountryRule, area_input: &str, rng: &mut R) -> String {
    let mut area = strip_non_digits(area_input);
    if area.len() < 2 {
        area = rule.default_area.to_string();
    }
    // National significant numbers drop the leading trunk "0".
    if let Some(rest) = area.strip_prefix('0') {
        area = rest.to_string();
    }

    let local_len = if area.starts_with('7') {
        UK_MOBILE_LOCAL_DIGITS
    } else {
        UK_NATIONAL_DIGITS
            .saturating_sub(area.len())
            .max(UK_MIN_LOCAL_DIGITS)
    };
    format!("{}{}{}", rule.dial_code, area, random_digits(local_len, rng))
}

fn au<R: Rng>(rule: &CountryRule, area_input: &str, rng: &mut R) -> String {
    let mut area = strip_non_digits(area_input);
    if !area.starts_with('4') {
        area = rule.default_area.to_string();
    }

    let local_len = AU_NATIONAL_DIGITS
        .saturating_sub(area.len())
        .max(AU_MIN_LOCAL_DIGITS);
    format!("{}{}{}", rule.dial_code, area, random_digits(local_len, rng))
}

fn de<R: Rng>(rule: &CountryRule, area_input: &str, rng: &mut R) -> String {
    let mut area = strip_non_digits(area_input);
    if area.len() < 2 {
        area = rule.default_area.to_string();
    }
    format!(
        "{}{}{}",
        rule.dial_code,
        area,
        random_digits(DE_LOCAL_DIGITS, rng)
    )
}

fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn random_digits<R: Rng>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactr_common::country::CountryId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn digits_after(phone: &str, dial_code: &str) -> usize {
        phone.strip_prefix(dial_code).map_or(0, str::len)
    }

    #[test]
    fn nanpa_is_dial_area_prefix_line() {
        let us = CountryId::Us.rule();
        let phone = synthesize(us, "806", "335", &mut rng());

        assert!(phone.starts_with("+1806335"));
        assert_eq!(digits_after(&phone, "+1"), 10);
        assert!(phone["+1".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn nanpa_line_number_is_zero_padded() {
        let ca = CountryId::Ca.rule();
        for _ in 0..50 {
            let phone = synthesize(ca, "416", "555", &mut rng());
            assert_eq!(phone.len(), "+14165550000".len());
        }
    }

    #[test]
    fn uk_mobile_gets_eight_local_digits() {
        let uk = CountryId::Uk.rule();
        let phone = synthesize(uk, "07911", "", &mut rng());

        // Trunk "0" dropped, "7911" kept, eight digits appended.
        assert!(phone.starts_with("+447911"));
        assert_eq!(digits_after(&phone, "+44"), 4 + 8);
    }

    #[test]
    fn uk_landline_pads_toward_nine_digits() {
        let uk = CountryId::Uk.rule();

        let london = synthesize(uk, "20", "", &mut rng());
        assert_eq!(digits_after(&london, "+44"), 9);

        // A four-digit area still gets the five-digit floor.
        let long_area = synthesize(uk, "1632", "", &mut rng());
        assert_eq!(digits_after(&long_area, "+44"), 4 + 5);
    }

    #[test]
    fn uk_unusable_input_falls_back_to_the_default_area() {
        let uk = CountryId::Uk.rule();
        let phone = synthesize(uk, "x", "", &mut rng());

        assert!(phone.starts_with("+4420"));
        assert_eq!(digits_after(&phone, "+44"), 9);
    }

    #[test]
    fn au_forces_the_mobile_area() {
        let au = CountryId::Au.rule();

        let defaulted = synthesize(au, "99", "", &mut rng());
        assert!(defaulted.starts_with("+614"));
        assert_eq!(digits_after(&defaulted, "+61"), 8);

        let kept = synthesize(au, "41", "", &mut rng());
        assert!(kept.starts_with("+6141"));
        assert_eq!(digits_after(&kept, "+61"), 8);
    }

    #[test]
    fn au_long_area_keeps_the_local_floor() {
        let au = CountryId::Au.rule();
        let phone = synthesize(au, "412", "", &mut rng());

        // 3 area digits + the 6-digit floor.
        assert_eq!(digits_after(&phone, "+61"), 9);
    }

    #[test]
    fn de_appends_exactly_seven_digits() {
        let de = CountryId::De.rule();

        let berlin = synthesize(de, "30", "", &mut rng());
        assert_eq!(digits_after(&berlin, "+49"), 2 + 7);

        let defaulted = synthesize(de, "", "", &mut rng());
        assert!(defaulted.starts_with("+4930"));

        let munich = synthesize(de, "(89)", "", &mut rng());
        assert!(munich.starts_with("+4989"));
        assert_eq!(digits_after(&munich, "+49"), 2 + 7);
    }
}
