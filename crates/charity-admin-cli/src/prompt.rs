//! Interactive prompts

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Password};

/// Asks a yes/no question on the terminal; the default answer is no
pub fn confirm(message: &str) -> Result<bool> {
	Confirm::new()
		.with_prompt(message)
		.default(false)
		.interact()
		.context("failed to read confirmation")
}

/// Reads the password without echoing it
pub fn password() -> Result<String> {
	Password::new()
		.with_prompt("Password")
		.validate_with(|input: &String| non_empty(input))
		.interact()
		.context("failed to read password")
}

fn non_empty(input: &str) -> Result<(), &'static str> {
	if input.trim().is_empty() {
		Err("Password must not be empty")
	} else {
		Ok(())
	}
}
