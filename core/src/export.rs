//! # Exporters
//!
//! Pure serialization of a batch to CSV or vCard 3.0 text. Deterministic:
//! the same batch always yields identical bytes.

use std::fmt::Write;

use contactr_common::contact::Contact;

/// CSV with a `Name,Phone` header row.
///
/// Names are written as-is; embedded commas or quotes are not escaped.
pub fn to_csv(contacts: &[Contact]) -> String {
    let mut out = String::from("Name,Phone\n");
    for contact in contacts {
        out.push_str(&contact.full_name);
        out.push(',');
        out.push_str(&contact.phone);
        out.push('\n');
    }
    out
}

/// One vCard 3.0 record per contact, with `FN` and `TEL;TYPE=CELL` fields.
pub fn to_vcf(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        let _ = write!(
            out,
            "BEGIN:VCARD\nVERSION:3.0\nFN:{}\nTEL;TYPE=CELL:{}\nEND:VCARD\n",
            contact.full_name, contact.phone
        );
    }
    out
}
