use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "bulk-replace")]
#[clap(about = "Guided bulk find & replace for remote content stores", long_about = None)]
pub struct Cli {
    /// Overrides the content store URL from the config file
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
