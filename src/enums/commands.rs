use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// List content categories
    Categories,
    /// List entries of a category
    Entries {
        category: String,
    },
    /// Search entries without changing anything
    Scan {
        #[clap(short, long)]
        category: Option<String>,
        #[clap(short, long)]
        search: String,
        /// Entry ids to search; all entries of the category when omitted
        #[clap(short, long)]
        entries: Vec<String>,
    },
    /// Scan, preview, review and apply a replacement
    Run {
        #[clap(short, long)]
        category: Option<String>,
        #[clap(short, long)]
        search: String,
        #[clap(short, long)]
        replace: String,
        #[clap(short, long)]
        entries: Vec<String>,
        /// Ask the content store for smart replacements
        #[clap(long)]
        smart: bool,
        /// Select `entry:field` (or a whole `entry`) on top of the policy defaults
        #[clap(long)]
        include: Vec<String>,
        /// Deselect `entry:field` (or a whole `entry`)
        #[clap(long)]
        exclude: Vec<String>,
        /// Apply without asking for confirmation
        #[clap(short, long)]
        yes: bool,
    },
}
