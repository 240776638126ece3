//! CLI command definitions

use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "datahub")]
#[command(about = "Personal record manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Simulated delay before auth operations, in milliseconds
        #[arg(long, default_value_t = 0)]
        latency_ms: u64,

        /// Allow any signed-in user to edit or delete any entry by id
        #[arg(long)]
        no_ownership_check: bool,
    },

    /// Create an account
    Register { email: String, password: String },

    /// Sign in
    Login { email: String, password: String },

    /// Sign out
    Logout,

    /// Overwrite the password of an existing account
    ResetPassword { email: String, new_password: String },

    /// Show the signed-in account
    Whoami,

    /// List your entries, newest first
    List,

    /// Create an entry
    Add {
        title: String,

        #[arg(default_value = "")]
        content: String,
    },

    /// Show one entry
    Show { id: String },

    /// Change the title and/or content of an entry
    #[command(group(
        ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["title", "content"])
    ))]
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete an entry
    Delete { id: String },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
