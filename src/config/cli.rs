use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "lead-relay")]
#[command(about = "Validates course leads and relays them to an operator chat")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "lead-relay.toml")]
    pub config: String,

    /// Override the messaging API base URL from config
    #[arg(long)]
    pub api_base: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate a lead and send it to the configured chat
    Submit(SubmitArgs),
    /// Load and validate the configuration, then exit
    CheckConfig,
    /// Show or record the cookie consent decision
    Consent {
        #[arg(value_enum, default_value = "status")]
        action: ConsentAction,
    },
    /// Time left until the course starts
    Countdown,
    /// Reviews visible after a number of "load more" clicks
    Reviews {
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
}

impl Command {
    /// Whether the command needs the messaging endpoint and credentials.
    pub fn uses_messaging(&self) -> bool {
        matches!(self, Command::Submit(_) | Command::CheckConfig)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentAction {
    Status,
    Accept,
    Decline,
}

/// Missing values are left empty so the form validator reports them.
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Tariff key: start, build, pro or business
    #[arg(long)]
    pub tariff: String,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub country: String,

    #[arg(long, default_value = "")]
    pub experience: String,

    #[arg(long, default_value = "")]
    pub motivation: String,
}
