use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "prepdeck", version, about = "Terminal interview question browser")]
pub struct Cli {
    /// Path or URL of a questions JSON file [default: bundled set]
    pub source: Option<String>,

    /// Path to a YAML config file [default: prepdeck.yaml if present]
    #[arg(long, value_name = "path")]
    pub config: Option<String>,

    /// Questions per page
    #[arg(long, value_name = "n")]
    pub page_size: Option<usize>,

    /// Start with this category selected
    #[arg(long, value_name = "id")]
    pub category: Option<String>,

    /// Print the question list without entering the TUI
    #[arg(long)]
    pub list: bool,
}
