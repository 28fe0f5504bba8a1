//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::session::Role;

/// Run command arguments.
#[derive(Debug, Default, Args)]
pub struct RunCommand {
    /// Skip the main menu and open this menu directly
    #[arg(short, long, value_enum)]
    pub role: Option<RoleArg>,
}

impl RunCommand {
    /// The menu the session should start in.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role.map_or(Role::Any, Role::from)
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Menu to open directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Catalogue administration
    Admin,
    /// Planet search and contributions
    Researcher,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Self::Admin,
            RoleArg::Researcher => Self::Researcher,
        }
    }
}
