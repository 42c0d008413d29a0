use anyhow::Result;

use crate::cli::{Cli, Commands};

mod commands;
mod logging;
mod settings;

pub fn run(cli: Cli) -> Result<()> {
    let settings = settings::load_settings(cli.config.as_deref());
    logging::init(cli.verbose, &settings.log.level);

    match cli.command {
        Commands::Show { sheet, length } => commands::show(&sheet, length),
        Commands::Render { sheet, length } => commands::render(&sheet, length),
        Commands::Split {
            sheet,
            at,
            length,
            output,
        } => commands::split(&sheet, &at, length, output.as_deref()),
        Commands::Create {
            output,
            media,
            length,
            at,
            title,
            performer,
        } => commands::create(&output, &media, length, &at, title, performer),
        Commands::Set {
            sheet,
            track,
            fields,
        } => commands::set(&sheet, &track, fields, &settings),
        Commands::Scan { dir } => commands::scan(&dir, &settings),
        Commands::Config => commands::config(&settings),
    }
}
