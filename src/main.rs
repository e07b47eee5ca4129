use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tempconv::cli;
use tempconv::config::Config;
use tempconv::temperature::{Converter, Unit};

#[derive(Parser)]
#[command(name = "tempconv")]
#[command(about = "Celsius/Fahrenheit temperature converter", long_about = None)]
struct Cli {
    /// Config file (default: ./tempconv.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single temperature
    Convert {
        /// Temperature to convert (e.g., "100", "-40", "36.6")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit the value is given in (celsius or fahrenheit)
        #[arg(short, long)]
        unit: Option<Unit>,

        /// Print the conversion as JSON instead of display text
        #[arg(long)]
        json: bool,
    },

    /// Read one temperature per line from stdin ("<value> [unit]")
    Interactive {
        /// Unit for lines that don't name one
        #[arg(short, long)]
        unit: Option<Unit>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Convert { value, unit, json } => {
            convert_value(&config, &value, unit.unwrap_or(config.default_unit), json)
        }
        Commands::Interactive { unit } => {
            run_interactive(&config, unit.unwrap_or(config.default_unit))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn convert_value(
    config: &Config,
    value: &str,
    unit: Unit,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::from_config(config);

    if json {
        // Invalid input is still reported as the display message, not an error
        match converter.try_convert(value, unit) {
            Ok(conversion) => println!("{}", serde_json::to_string_pretty(&conversion)?),
            Err(_) => println!("{}", converter.convert(value, unit)),
        }
    } else {
        println!("{}", converter.convert(value, unit));
    }

    Ok(())
}

fn run_interactive(config: &Config, unit: Unit) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::from_config(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    cli::run_interactive(
        &converter,
        unit,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    Ok(())
}
