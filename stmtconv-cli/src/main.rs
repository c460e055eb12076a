use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use stmtconv_finance::{category_summary, vat_summary};
use stmtconv_ingest::profiles::known_formats;
use stmtconv_ingest::{convert, convert_as, detect_format, render, ConversionResult, OutputFormat, Summary};
use tracing::info;

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(name = "stmtconv", version, about = "Bank statement text to CSV/JSON converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert statement text into CSV or JSON
    Convert {
        /// Statement text file (`-` for stdin)
        input: PathBuf,

        /// Output format: csv or json (default from config)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Output path (`-` for stdout, default converted_YYYYMMDD.<ext>)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Parse with this format id instead of detecting it
        #[arg(long)]
        bank: Option<String>,

        /// IANA timezone for the conversion timestamp
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Print totals, category breakdown and VAT for a statement
    Summary {
        /// Statement text file (`-` for stdin)
        input: PathBuf,

        #[arg(long)]
        bank: Option<String>,
    },

    /// Print the detected format id
    Detect {
        /// Statement text file (`-` for stdin)
        input: PathBuf,
    },

    /// List format ids with a dedicated layout
    Formats,

    /// Manage ~/.stmtconv/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config (no-op if it exists)
    Init,
    /// Print the effective config
    Show,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            input,
            format,
            output,
            bank,
            timezone,
        } => {
            let cfg = config::load_config()?;
            let format = format.unwrap_or(cfg.output.format);
            let tz = config::parse_timezone(&timezone.unwrap_or(cfg.output.timezone))?;
            let bank = bank.or(cfg.parse.bank);

            let text = state::read_input(&input)?;
            let res = run_conversion(&text, bank.as_deref(), &input)?;

            let local = Utc::now().with_timezone(&tz);
            let now: DateTime<FixedOffset> = local.with_timezone(&local.offset().fix());
            let bytes = render(&res.transactions, format, &now)?;

            let dest = output.unwrap_or_else(|| default_output_path(now.date_naive(), format));
            if dest.as_os_str() == "-" {
                std::io::stdout().write_all(&bytes).context("write to stdout")?;
            } else {
                std::fs::write(&dest, &bytes).with_context(|| format!("write {}", dest.display()))?;
                eprintln!("Wrote {}", dest.display());
            }
            info!(format = %format, count = res.summary.count, "converted statement");

            eprintln!("Format: {}", res.format);
            print_summary(&res.summary, &mut std::io::stderr())?;
        }

        Command::Summary { input, bank } => {
            let cfg = config::load_config()?;
            let bank = bank.or(cfg.parse.bank);
            let text = state::read_input(&input)?;
            let res = run_conversion(&text, bank.as_deref(), &input)?;

            let mut out = std::io::stdout();
            writeln!(out, "Format: {}", res.format)?;
            print_summary(&res.summary, &mut out)?;

            writeln!(out, "\nBy category:")?;
            for c in category_summary(&res.transactions) {
                writeln!(
                    out,
                    "  {:<18} count={:<4} total={:>10.2} ({:.1}%)",
                    c.category.name(),
                    c.count,
                    c.total,
                    c.share
                )?;
            }

            writeln!(out, "\nVAT in expenses:")?;
            for v in vat_summary(&res.transactions) {
                writeln!(out, "  {:>2}%  base={:>10.2}  vat={:>8.2}", v.rate, v.total, v.vat_amount)?;
            }
        }

        Command::Detect { input } => {
            let text = state::read_input(&input)?;
            println!("{}", detect_format(&text));
        }

        Command::Formats => {
            for id in known_formats() {
                println!("{id}");
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn run_conversion(text: &str, bank: Option<&str>, input: &Path) -> Result<ConversionResult> {
    let res = match bank {
        Some(id) => convert_as(text, id),
        None => convert(text),
    };
    res.with_context(|| format!("converting {}", input.display()))
}

fn default_output_path(date: NaiveDate, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("converted_{}.{}", date.format("%Y%m%d"), format.extension()))
}

fn print_summary(s: &Summary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Transactions: {}", s.count)?;
    writeln!(out, "Income:       {:.2}", s.total_income)?;
    writeln!(out, "Expenses:     {:.2}", s.total_expense)?;
    writeln!(out, "Net:          {:.2}", s.net)?;
    if let (Some(first), Some(last)) = (&s.first_date, &s.last_date) {
        writeln!(out, "Dates:        {first} .. {last}")?;
    }
    Ok(())
}
