use contactr_common::config::Config;
use contactr_common::settings::PersistedSettings;
use contactr_common::{success, warn};

use super::{PrefixesArgs, load_prefix_table};
use crate::terminal::print;

/// Candidates shown without `--all`.
const LISTED: usize = 30;
const PER_ROW: usize = 10;

pub async fn prefixes(
    args: PrefixesArgs,
    settings: &PersistedSettings,
    cfg: &Config,
) -> anyhow::Result<()> {
    let country = args.country.unwrap_or(settings.country);
    let rule = country.rule();

    if !rule.uses_nanpa() {
        warn!(
            "{} is outside the North American Numbering Plan; prefixes don't apply",
            rule.label
        );
        return Ok(());
    }

    let area_code = args
        .area_code
        .or_else(|| (!settings.area_code.is_empty()).then(|| settings.area_code.clone()))
        .unwrap_or_else(|| rule.default_area.to_string());
    let mode = args.mode.unwrap_or(settings.mode);

    let table = load_prefix_table(args.prefix_file, cfg).await;
    let candidates = table.candidates(&area_code, mode, rule);

    success!(
        "{} candidate prefixes for area code {} (mode {})",
        candidates.len(),
        area_code,
        mode
    );

    if cfg.quiet >= 2 {
        return Ok(());
    }

    let shown = if args.all {
        candidates.len()
    } else {
        LISTED.min(candidates.len())
    };
    for row in candidates[..shown].chunks(PER_ROW) {
        print::print_status(row.join(" "));
    }
    if shown < candidates.len() {
        print::print_status(format!(
            "… and {} more (pass --all to list every candidate)",
            candidates.len() - shown
        ));
    }

    Ok(())
}
