use colored::*;

use contactr_common::config::Config;
use contactr_common::country::CountryId;

use crate::terminal::print;

pub fn countries(cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    for (idx, country) in CountryId::ALL.into_iter().enumerate() {
        let rule = country.rule();
        print::tree_head(idx, &format!("{} ({})", rule.label, rule.id));

        let area_len = if rule.min_area_len == rule.max_area_len {
            rule.min_area_len.to_string()
        } else {
            format!("{}-{}", rule.min_area_len, rule.max_area_len)
        };
        let plan: ColoredString = if rule.uses_nanpa() {
            "NANPA".green()
        } else {
            "national".normal()
        };

        print::as_tree_one_level(vec![
            ("Dial code".to_string(), rule.dial_code.normal()),
            ("Plan".to_string(), plan),
            ("Default area".to_string(), rule.default_area.normal()),
            ("Area length".to_string(), area_len.normal()),
        ]);

        if idx + 1 != CountryId::ALL.len() {
            print::blank();
        }
    }
}
