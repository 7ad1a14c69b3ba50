//! Thummar CLI
//!
//! Command-line access to the demo dashboard:
//! - Render the dashboard for any view
//! - List KPIs or orders
//! - Export orders or a dataset snapshot
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use thummar::config::{generate_default_config, Config};
use thummar::export::{write_orders_csv, write_snapshot_json};
use thummar::logging;
use thummar::store::{DateRange, StdRandom, Store, User, View};
use thummar::view::{self, text::{kpi_line, order_line}};

#[derive(Parser)]
#[command(name = "thummar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Thummar Analytics demo dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed for reproducible data (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Reporting window (7d, 30d, 90d, 1y)
    #[arg(long, global = true)]
    pub range: Option<DateRange>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard
    Dashboard {
        /// View to open (dashboard, sales, customers, inventory, users)
        #[arg(short, long, default_value = "dashboard")]
        view: View,
        /// Filter orders by customer
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// List KPI cards
    Kpis,

    /// List orders
    Orders {
        /// Filter orders by customer
        #[arg(short, long, default_value = "")]
        search: String,
        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Export data
    Export {
        /// Filter orders by customer
        #[arg(short, long, default_value = "")]
        search: String,
        /// Export a full JSON snapshot instead of the orders CSV
        #[arg(long)]
        snapshot: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();

    logging::init(&config.logging)?;

    let mut prefs = config.ui.preferences();
    if let Some(range) = cli.range {
        prefs.date_range = range;
    }
    let rng = StdRandom::from_seed_option(cli.seed.or(config.demo.seed));
    let mut store = Store::with_source(rng).with_preferences(prefs);
    logging::log_store_events(&mut store);

    if !matches!(cli.command, Commands::Config { .. }) {
        store.login(User::demo());
        store.refresh_if_pending();
    }

    match cli.command {
        Commands::Dashboard { view, search } => {
            store.set_view(view);
            store.refresh_if_pending();
            store.set_search(search);
            print!("{}", view::render(&store));
        }

        Commands::Kpis => {
            for kpi in store.kpis() {
                println!("{}", kpi_line(kpi));
            }
        }

        Commands::Orders { search, format } => {
            store.set_search(search);
            let rows = store.filtered_orders();
            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                "csv" => {
                    write_orders_csv(std::io::stdout().lock(), rows)?;
                }
                _ => {
                    if rows.is_empty() {
                        println!("No orders match \"{}\"", store.search_query());
                    }
                    for row in rows {
                        println!("{}", order_line(row));
                    }
                }
            }
        }

        Commands::Export {
            search,
            snapshot,
            output,
        } => {
            store.set_search(search);
            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    std::fs::File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?,
                ),
                None => Box::new(std::io::stdout().lock()),
            };

            if snapshot {
                write_snapshot_json(writer, &store)?;
            } else {
                write_orders_csv(writer, store.filtered_orders())?;
            }

            if let Some(path) = output {
                eprintln!("Exported to {}", path.display());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
