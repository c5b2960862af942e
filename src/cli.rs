//! Command-line interface parsing and validation
//!
//! This module handles CLI argument parsing using clap and validates
//! user inputs for correctness.

use crate::constants::{MAX_HIDE_DELAY_MS, MIN_HIDE_DELAY_MS};
use crate::types::NavbarPolicy;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "shoal")]
#[command(version = "0.0.1")]
#[command(about = "Browse your single-page site from the comfort of your terminal", long_about = None)]
pub struct Cli {
    /// Navbar visibility policy: auto-hide or always-visible
    #[arg(short = 'p', long, value_name = "POLICY")]
    pub policy: Option<String>,

    /// Navbar inactivity timeout in milliseconds (500-60000)
    #[arg(short = 'd', long, value_name = "MS")]
    pub hide_delay: Option<u64>,

    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<String>,
}

impl Cli {
    /// Validate CLI arguments
    /// Returns error if the policy name is unknown or hide_delay is out of bounds
    pub fn validate(&self) -> Result<(), String> {
        if let Some(policy) = &self.policy {
            if NavbarPolicy::from_name(policy).is_none() {
                return Err(format!(
                    "Unknown policy '{}' (expected auto-hide or always-visible)",
                    policy
                ));
            }
        }
        if let Some(delay) = self.hide_delay {
            if delay < MIN_HIDE_DELAY_MS {
                return Err(format!("Hide delay too small (minimum {})", MIN_HIDE_DELAY_MS));
            }
            if delay > MAX_HIDE_DELAY_MS {
                return Err(format!("Hide delay too large (maximum {})", MAX_HIDE_DELAY_MS));
            }
        }
        Ok(())
    }

    /// Navbar policy override, if one was given on the command line
    pub fn navbar_policy(&self) -> Option<NavbarPolicy> {
        self.policy.as_deref().and_then(NavbarPolicy::from_name)
    }
}
