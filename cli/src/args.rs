use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shared::{FormFields, Month};

#[derive(Parser, Debug)]
#[command(name = "crop-advisor")]
#[command(about = "Ask the crop recommendation service what to plant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Recommendation endpoint, overriding configuration
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// History file, overriding configuration
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Request a recommendation and archive it
    Recommend(RecommendArgs),

    /// Show past recommendations
    History {
        /// Print the stored JSON instead of a list
        #[arg(long)]
        json: bool,
    },
}

/// Form fields; missing values are reported the same way the form does
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendArgs {
    #[arg(long, default_value = "")]
    pub location: String,

    /// Month name, abbreviation or number; anything else is sent as typed
    #[arg(long, default_value = "")]
    pub month: String,

    /// Nitrogen
    #[arg(long = "n", value_name = "N", default_value = "")]
    pub n: String,

    /// Phosphorus
    #[arg(long = "p", value_name = "P", default_value = "")]
    pub p: String,

    /// Potassium
    #[arg(long = "k", value_name = "K", default_value = "")]
    pub k: String,
}

impl From<RecommendArgs> for FormFields {
    fn from(args: RecommendArgs) -> Self {
        FormFields {
            location: args.location,
            month: normalize_month(args.month),
            n: args.n,
            p: args.p,
            k: args.k,
        }
    }
}

/// Full English month name when the input is recognisable as a month
fn normalize_month(value: String) -> String {
    value
        .parse::<Month>()
        .map(|month| month.to_string())
        .unwrap_or(value)
}
