use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use eu5data::{load_reference_data, ReferenceData};
use eu5values_core::{overview, FilterState, SortMode, ValueView, ViewerConfig};

mod report;

#[derive(Parser)]
#[command(name = "eu5values")]
#[command(about = "Browse the value movers of EU5's societal values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding values.json, movers.json and the other tables
    #[arg(long, global = true, env = "EU5_VALUES_DATA")]
    data_dir: Option<PathBuf>,

    /// Viewer settings (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the movers pushing one value pair, left and right
    Show {
        /// Value pair id (e.g. centralization_vs_decentralization)
        value: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Free-text search over name, type, category and source
        #[arg(short, long)]
        search: Option<String>,

        /// by-category, strength-desc, strength-asc or by-name
        #[arg(long)]
        sort: Option<SortMode>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every value pair with matching mover counts
    Values {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the ids and names of one reference table
    List {
        table: Table,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show table sizes and movers per type
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Tables whose ids the filter flags accept.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum Table {
    Ages,
    Governments,
    Religions,
    Countries,
    Estates,
    Cultures,
}

impl Table {
    fn title(self) -> &'static str {
        match self {
            Table::Ages => "Ages",
            Table::Governments => "Governments",
            Table::Religions => "Religions",
            Table::Countries => "Countries",
            Table::Estates => "Estates",
            Table::Cultures => "Cultures",
        }
    }

    fn entries(self, data: &ReferenceData) -> Vec<report::Entry> {
        use report::Entry;
        match self {
            Table::Ages => data
                .ages()
                .into_iter()
                .map(|a| Entry::new(&a.id, &a.name).with_detail(a.year.to_string()))
                .collect(),
            Table::Governments => data
                .governments()
                .into_iter()
                .map(|g| Entry::new(&g.id, &g.name))
                .collect(),
            Table::Religions => data
                .religions()
                .into_iter()
                .map(|r| Entry::new(&r.id, &r.name).with_detail(r.group.clone()))
                .collect(),
            Table::Countries => data
                .countries()
                .into_iter()
                .map(|c| {
                    let entry = Entry::new(&c.tag, &c.name);
                    match &c.religion {
                        Some(religion) => entry.with_detail(religion.clone()),
                        None => entry,
                    }
                })
                .collect(),
            Table::Estates => data
                .estates()
                .into_iter()
                .map(|e| Entry::new(&e.id, &e.name))
                .collect(),
            Table::Cultures => data
                .cultures()
                .iter()
                .map(|id| Entry::new(id, &eu5data::prettify_id(id)))
                .collect(),
        }
    }
}

#[derive(Args)]
struct FilterArgs {
    /// Age id; hides movers that unlock in a later age
    #[arg(long)]
    age: Option<String>,

    #[arg(long)]
    government: Option<String>,

    /// Religion id; defaults to the country's religion when --country is set
    #[arg(long)]
    religion: Option<String>,

    /// Country tag (e.g. FRA)
    #[arg(long)]
    country: Option<String>,

    /// Estate id; keeps only that estate's privileges
    #[arg(long)]
    estate: Option<String>,

    #[arg(long)]
    culture: Option<String>,
}

impl FilterArgs {
    fn to_state(&self, data: &ReferenceData) -> FilterState {
        let mut state = FilterState::new();
        if let Some(age) = &self.age {
            state = state.with_age(age);
        }
        if let Some(government) = &self.government {
            state = state.with_government(government);
        }
        if let Some(religion) = &self.religion {
            state = state.with_religion(religion);
        }
        if let Some(tag) = &self.country {
            state = state.select_country(&tag.to_uppercase(), data);
        }
        if let Some(estate) = &self.estate {
            state = state.with_estate(estate);
        }
        if let Some(culture) = &self.culture {
            state = state.with_culture(culture);
        }
        state
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    match eu5data::path::detect_data_path() {
        Some(dir) => Ok(dir),
        None => bail!("No data directory found; pass --data-dir or set EU5_VALUES_DATA"),
    }
}

fn load(data_dir: &Path) -> Result<ReferenceData> {
    log::info!("Loading reference data from {}", data_dir.display());
    let data = load_reference_data(data_dir)
        .with_context(|| format!("Failed to load data from {}", data_dir.display()))?;

    let stats = data.stats();
    log::info!(
        "Loaded {} value pairs, {} movers, {} countries",
        stats.values,
        stats.movers,
        stats.countries
    );
    data.validate();

    Ok(data)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let data_dir = resolve_data_dir(cli.data_dir)?;
    let data = load(&data_dir)?;
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Show {
            value,
            filters,
            search,
            sort,
            json,
        } => {
            let state = filters
                .to_state(&data)
                .with_search(search.unwrap_or_default())
                .with_sort(sort.unwrap_or(config.default_sort));

            let Some(view) = ValueView::build(&data, &value, &state, &config) else {
                let known: Vec<&str> = data.values().map(|p| p.id.as_str()).collect();
                bail!(
                    "Unknown value pair '{}' (known: {})",
                    value,
                    known.join(", ")
                );
            };

            if json {
                println!("{}", report::json_report(&view)?);
            } else {
                report::print_view(&view, &mut stdout)?;
            }
        }

        Commands::Values { filters, json } => {
            let rows = overview(&data, &filters.to_state(&data));
            if json {
                println!("{}", report::json_report(&rows)?);
            } else {
                report::print_overview(&rows, &mut stdout)?;
            }
        }

        Commands::List { table, json } => {
            let entries = table.entries(&data);
            if json {
                println!("{}", report::json_report(&entries)?);
            } else {
                report::print_entries(table.title(), &entries, &mut stdout)?;
            }
        }

        Commands::Info { json } => {
            let stats = data.stats();
            if json {
                println!("{}", report::json_report(&stats)?);
            } else {
                report::print_stats(&stats, &mut stdout)?;
                let cultures = data.cultures();
                if !cultures.is_empty() {
                    println!("Cultures referenced: {}", cultures.len());
                }
            }
        }
    }

    Ok(())
}
