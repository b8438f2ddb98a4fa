mod commands;
mod terminal;

use commands::{CommandLine, Commands, countries, generate, prefixes};
use contactr_common::config::Config;
use contactr_common::settings::PersistedSettings;
use terminal::{colors, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let settings_path = commands
        .settings_file
        .clone()
        .or_else(PersistedSettings::default_path);
    let settings = settings_path
        .as_deref()
        .and_then(PersistedSettings::load)
        .unwrap_or_default();

    let theme = commands.theme.unwrap_or(settings.theme);
    colors::init(theme);

    let cfg = Config {
        quiet: commands.quiet,
        theme,
    };

    print::banner(cfg.quiet);

    match commands.command {
        Commands::Generate(args) => {
            print::header("generating contacts", cfg.quiet);
            generate::generate(args, settings, settings_path, &cfg).await
        }
        Commands::Countries => {
            print::header("country rules", cfg.quiet);
            Ok(countries::countries(&cfg))
        }
        Commands::Prefixes(args) => {
            print::header("prefix candidates", cfg.quiet);
            prefixes::prefixes(args, &settings, &cfg).await
        }
    }
}
