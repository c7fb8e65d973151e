//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the Twilio REST API
#[derive(Parser, Debug)]
#[command(name = "twilio-rest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); `TWILIO_*` variables fill unset fields
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Account to operate on instead of the configured one
    #[arg(short, long, global = true)]
    pub account: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream records across pages
    List {
        /// Resource to read
        resource: ResourceKind,

        /// Maximum number of records
        #[arg(short, long)]
        limit: Option<u64>,

        /// Records requested per page
        #[arg(long)]
        page_size: Option<u64>,

        /// Room SID, required for room participants
        #[arg(long)]
        room: Option<String>,
    },

    /// Fetch a single page
    Page {
        /// Resource to read
        resource: ResourceKind,

        /// Records requested per page
        #[arg(long)]
        page_size: Option<u64>,

        /// Page index
        #[arg(long)]
        page_number: Option<u64>,

        /// Page token from a previous page
        #[arg(long)]
        page_token: Option<String>,

        /// Absolute page URL; overrides the other page options
        #[arg(long)]
        url: Option<String>,

        /// Room SID, required for room participants
        #[arg(long)]
        room: Option<String>,
    },

    /// Fetch one record
    Fetch {
        /// Resource to read
        resource: ResourceKind,

        /// Record identifier (SID, or the number for phone numbers)
        id: String,

        /// Room SID, required for room participants
        #[arg(long)]
        room: Option<String>,
    },

    /// Delete one record
    Remove {
        /// Resource to delete from
        resource: ResourceKind,

        /// Record SID
        id: String,
    },
}

/// Resources reachable from the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ResourceKind {
    /// Calls of the account
    Calls,
    /// Addresses of the account
    Addresses,
    /// Monthly usage records of the account
    UsageMonthly,
    /// Verification services
    VerifyServices,
    /// Participants of a video room
    RoomParticipants,
    /// Inbound routing of phone numbers
    PhoneNumbers,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
