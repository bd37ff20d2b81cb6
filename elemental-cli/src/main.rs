use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use elemental::{
    config::{load_table, ConfigElementTable, LoadedTable},
    periodic_table, EnergyReport, LabelStyle, ModelConstants,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: ElementalCommand,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum ElementalCommand {
    /// Print the electron energies of every element in a table
    #[command(name = "report")]
    Report {
        /// A json element table to use instead of the built-in human body elements
        #[arg(long, short)]
        table: Option<PathBuf>,
        /// Orbital radius of every electron in meters. Overrides the radius of the table
        #[arg(long, short, allow_negative_numbers = true)]
        radius: Option<f64>,
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Label every element with the same generic placeholder instead of its name
        #[arg(long, action = ArgAction::SetTrue)]
        placeholder_names: bool,
    },
    /// Write the built-in element table as json, to use as a starting point for custom tables
    #[command(name = "export-table")]
    ExportTable {
        /// Where to write the table. Defaults to stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args: Args = Args::parse();

    match args.command {
        ElementalCommand::Report {
            table,
            radius,
            format,
            placeholder_names,
        } => {
            let LoadedTable { table, constants } = match table {
                Some(path) => load_table(&path)
                    .with_context(|| format!("could not load {}", path.display()))?,
                None => LoadedTable {
                    table: periodic_table::human_body(),
                    constants: ModelConstants::default(),
                },
            };

            let constants = match radius {
                Some(radius) => {
                    log::info!("using orbital radius {radius:e} m");
                    constants.with_orbital_radius(radius)
                }
                None => constants,
            };

            let report = EnergyReport::compute(&table, &constants)?;

            let mut stdout = BufWriter::new(io::stdout().lock());
            match format {
                OutputFormat::Text => {
                    let style = if placeholder_names {
                        LabelStyle::Placeholder
                    } else {
                        LabelStyle::Names
                    };
                    report.write_text(&mut stdout, style)?;
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut stdout, &report)?;
                    writeln!(stdout)?;
                }
            }
            stdout.flush()?;
        }

        ElementalCommand::ExportTable { output } => {
            let config =
                ConfigElementTable::new(&periodic_table::human_body(), &ModelConstants::default());

            match output {
                Some(path) => {
                    let file = File::options()
                        .create(true)
                        .write(true)
                        .truncate(true)
                        .open(&path)
                        .with_context(|| format!("could not create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    serde_json::to_writer_pretty(&mut writer, &config)?;
                    writer.flush()?;
                    log::info!(
                        "wrote {} elements to {}",
                        config.elements.len(),
                        path.display()
                    );
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    serde_json::to_writer_pretty(&mut stdout, &config)?;
                    writeln!(stdout)?;
                }
            }
        }
    }

    Ok(())
}
