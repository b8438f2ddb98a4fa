use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::info_span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use contactr_common::config::Config;
use contactr_common::contact::Contact;
use contactr_common::settings::PersistedSettings;
use contactr_common::{success, warn};
use contactr_core::export;
use contactr_core::generator::{DEFER_THRESHOLD, GenerateRequest, Generator, ProgressFn};
use contactr_core::prefixes::PrefixTable;

use super::{ExportFormat, GenerateArgs, load_prefix_table};
use crate::terminal::{colors, print, progress};

pub async fn generate(
    args: GenerateArgs,
    settings: PersistedSettings,
    settings_path: Option<PathBuf>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let country = args.country.unwrap_or(settings.country);
    let rule = country.rule();
    let mode = args.mode.unwrap_or(settings.mode);
    let count = args.count.unwrap_or(settings.count);
    // The persisted area code sticks across runs; the rule default only
    // fills a blank.
    let area_code = args
        .area_code
        .or_else(|| (!settings.area_code.is_empty()).then(|| settings.area_code.clone()))
        .unwrap_or_else(|| rule.default_area.to_string());

    let request = GenerateRequest {
        country,
        area_code,
        mode,
        count,
        prefix: args.prefix,
    };

    let table = if rule.uses_nanpa() {
        load_prefix_table(args.prefix_file, cfg).await
    } else {
        PrefixTable::empty()
    };
    let generator = match args.seed {
        Some(seed) => Generator::seeded(table, seed),
        None => Generator::new(table),
    };

    let start_time: Instant = Instant::now();
    let generator = run_with_progress(generator, &request, cfg).await?;
    let contacts = generator.batch();

    write_output(contacts, args.format, args.output, cfg)?;
    print_summary(contacts.len(), start_time.elapsed(), cfg);

    let settings = PersistedSettings {
        country,
        mode,
        area_code: request.area_code.clone(),
        count,
        theme: cfg.theme,
    };
    if let Some(path) = settings_path {
        if let Err(err) = settings.save(&path) {
            warn!("Couldn't persist settings: {err:#}");
        }
    }

    Ok(())
}

/// Large batches get a progress bar driven by the generator's callback;
/// everything else runs straight through.
async fn run_with_progress(
    generator: Generator,
    request: &GenerateRequest,
    cfg: &Config,
) -> anyhow::Result<Generator> {
    if request.count <= DEFER_THRESHOLD || cfg.quiet > 0 {
        return Ok(generator.run(request, None).await?);
    }

    let span = info_span!("generation", indicatif.pb_show = true);
    span.pb_set_style(&progress::batch_style());
    span.pb_set_length(u64::from(request.count));
    span.pb_set_message(&format!("Generating {} numbers…", request.count));

    let reporter = span.clone();
    let report: ProgressFn = Box::new(move |done| reporter.pb_set_position(done));

    let guard = span.enter();
    let generator = generator.run(request, Some(report)).await?;
    drop(guard);

    Ok(generator)
}

fn write_output(
    contacts: &[Contact],
    format: ExportFormat,
    output: Option<PathBuf>,
    cfg: &Config,
) -> anyhow::Result<()> {
    match format {
        ExportFormat::Plain => match output {
            Some(path) => {
                let mut listing = String::new();
                for contact in contacts {
                    listing.push_str(&contact.full_name);
                    listing.push_str(" — ");
                    listing.push_str(&contact.phone);
                    listing.push('\n');
                }
                write_file(listing, path)
            }
            None => {
                print_listing(contacts, cfg);
                Ok(())
            }
        },
        ExportFormat::Csv => write_file(
            export::to_csv(contacts),
            output.unwrap_or_else(|| PathBuf::from("contacts.csv")),
        ),
        ExportFormat::Vcf => write_file(
            export::to_vcf(contacts),
            output.unwrap_or_else(|| PathBuf::from("contacts.vcf")),
        ),
    }
}

fn write_file(text: String, path: PathBuf) -> anyhow::Result<()> {
    std::fs::write(&path, text).with_context(|| format!("couldn't write {}", path.display()))?;
    success!("Wrote {}", path.display());
    Ok(())
}

fn print_listing(contacts: &[Contact], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for contact in contacts {
        print::contact_line(&contact.full_name, &contact.phone);
    }
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let contacts: ColoredString = format!("{count} contacts").bold().green();
    let took: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let line = format!("Generation complete: {contacts} in {took}")
        .color(colors::palette().text_default);

    print::fat_separator();
    print::centerln(&line.to_string());
}
