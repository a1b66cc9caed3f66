//! Terminal UI helpers

mod spinner;

pub use spinner::spinner;

use crate::error::{Result, TabError};

/// Ask the user to confirm a destructive action
///
/// Batch mode answers yes without prompting, for cron and CI use.
pub fn confirm(prompt: &str, batch: bool) -> Result<bool> {
    if batch {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| TabError::Config(format!("confirmation prompt failed: {}", e)))
}
