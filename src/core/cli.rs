use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "decoy-gen")]
#[command(about = "Synthetic decoy identity generator", long_about = None)]
pub struct Cli {
    /// Path to the first-name list file (one name per line, # for comments)
    #[arg(long, value_name = "FILE")]
    pub first: Option<String>,

    /// Path to the last-name list file (one name per line, # for comments)
    #[arg(long, value_name = "FILE")]
    pub last: Option<String>,

    /// Number of identities to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write logs to a daily rolling file under logs/
    #[arg(long, default_value = "false")]
    pub log_file: bool,
}
