// Entry point and interactive console flow.
//
// The dataset is loaded and cleaned once at startup. After that every menu
// action edits the session's selection and re-renders the dashboard from the
// shared base table.
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use vgsales_dashboard::config::Config;
use vgsales_dashboard::output;
use vgsales_dashboard::{BaseTable, Dashboard, FilterSelection, Manufacturer, Region, Result};

#[derive(Parser)]
#[command(name = "vgsales_dashboard")]
#[command(about = "Explore video game sales by manufacturer, region and genre")]
#[command(version)]
struct Cli {
    /// TOML config file (defaults to ./dashboard.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Sales CSV to load
    #[arg(long)]
    data: Option<PathBuf>,
    /// Directory for exported tables
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Initial region, e.g. "Global Sales", "EU_Sales" or "jp"
    #[arg(long)]
    region: Option<String>,
    /// Initially selected manufacturer (repeatable)
    #[arg(long = "manufacturer")]
    manufacturers: Vec<String>,
    /// Render and export the initial selection, then exit
    #[arg(long)]
    once: bool,
    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Per-session state owned by the menu loop.
struct AppState {
    dashboard: Dashboard,
    selection: FilterSelection,
    output_dir: PathBuf,
}

/// Print `prompt` and read one trimmed line. `None` on end of input.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn handle_region(state: &mut AppState, input: &mut impl BufRead) {
    println!("Filter by region:");
    for (i, r) in Region::ALL.iter().enumerate() {
        let mark = if *r == state.selection.region { "*" } else { " " };
        println!("[{}]{} {}", i + 1, mark, r);
    }
    let Some(choice) = read_line(input, "Enter choice: ") else { return };
    match choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| Region::ALL.get(i)) {
        Some(region) => {
            state.selection.set_region(*region);
            println!("Region set to {region}.\n");
        }
        None => println!("Invalid choice. Please enter 1 to {}.\n", Region::ALL.len()),
    }
}

fn handle_manufacturers(state: &mut AppState, input: &mut impl BufRead) {
    loop {
        println!("Filter by company:");
        for (i, m) in Manufacturer::ALL.iter().enumerate() {
            let mark = if state.selection.is_selected(*m) { "x" } else { " " };
            println!("[{:>2}] [{}] {}", i + 1, mark, m);
        }
        println!("[ 0] Done");
        let Some(choice) = read_line(input, "Toggle: ") else { return };
        if choice == "0" || choice.is_empty() {
            println!();
            return;
        }
        match choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| Manufacturer::ALL.get(i)) {
            Some(m) => {
                state.selection.toggle(*m);
            }
            None => println!("Invalid choice. Please enter 0 to {}.", Manufacturer::ALL.len()),
        }
    }
}

fn handle_show(state: &AppState) {
    let view = state.dashboard.view(&state.selection);
    println!("{}", output::render_view(&view));
}

fn handle_export(state: &AppState) {
    let view = state.dashboard.view(&state.selection);
    match output::export_view(&view, &state.output_dir) {
        Ok(paths) => {
            for p in paths {
                println!("Saved {}", p.display());
            }
            println!();
        }
        Err(e) => error!("export failed: {e}"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(dir) = cli.out_dir {
        config.output_dir = dir;
    }
    if let Some(region) = cli.region {
        config.region = region;
    }
    if !cli.manufacturers.is_empty() {
        config.manufacturers = cli.manufacturers;
    }
    let selection = config.selection()?;

    let (base, report) = BaseTable::load(&config.data_path)?;
    println!("{}", output::header_text());
    println!("{}", output::load_summary(&report));

    let mut state = AppState {
        dashboard: Dashboard::new(base),
        selection,
        output_dir: config.output_dir,
    };

    if cli.once {
        handle_show(&state);
        handle_export(&state);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        println!("[1] Choose region ({})", state.selection.region);
        println!("[2] Choose companies ({} selected)", state.selection.manufacturers.len());
        println!("[3] Show dashboard");
        println!("[4] Export dashboard to {}", state.output_dir.display());
        println!("[0] Exit\n");
        let Some(choice) = read_line(&mut input, "Enter choice: ") else { break };
        match choice.as_str() {
            "1" => handle_region(&mut state, &mut input),
            "2" => handle_manufacturers(&mut state, &mut input),
            "3" => handle_show(&state),
            "4" => handle_export(&state),
            "0" => break,
            _ => println!("Invalid choice. Please enter 0 to 4.\n"),
        }
    }
    println!("Exiting the program.");
    info!("session ended");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    vgsales_dashboard::logging::init(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to start dashboard: {e}");
            ExitCode::FAILURE
        }
    }
}
