use clap::Parser;

use prepdeck::cli::Cli;
use prepdeck::dataset::{self, LoadedDataset};
use prepdeck::filter;
use prepdeck::model::Config;
use prepdeck::state::AppState;
use prepdeck::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(n) = cli.page_size {
        if n == 0 {
            return Err("--page-size must be at least 1".to_string());
        }
        config.page_size = Some(n);
    }

    let source = dataset::resolve_source(cli.source.as_deref());

    if cli.list {
        let loaded = dataset::load_dataset(&source)?;
        print_list(&loaded, &config);
        return Ok(());
    }

    let mut state = AppState::new(&config);
    if let Some(ref category) = cli.category {
        state.select_category(category);
    }

    let load_rx = dataset::spawn_loader(source);
    tui::run_tui(&mut state, &load_rx)?;

    // Diagnostics go to stderr once the terminal is restored.
    if let Some(ref error) = state.load_error {
        eprintln!("Warning: {}", error);
    }
    if state.skipped_records > 0 {
        eprintln!("Warning: skipped {} malformed records", state.skipped_records);
    }

    Ok(())
}

fn print_list(loaded: &LoadedDataset, config: &Config) {
    println!("{}", config.title());
    println!("Questions: {}", loaded.questions.len());
    for category in config.categories() {
        let count = filter::count_in_category(&loaded.questions, &category.id);
        println!("  {}: {}", category.name, count);
    }
    println!();
    for question in &loaded.questions {
        println!(
            "[{}] ({}) {}",
            question.difficulty.label(),
            question.category,
            question.question
        );
    }
    if loaded.skipped > 0 {
        eprintln!("Warning: skipped {} malformed records", loaded.skipped);
    }
}
