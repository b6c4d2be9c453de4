//! `cookbook parse <text>`

use anyhow::{bail, Result};
use clap::Args;

use cookbook_core::normalize;

/// Print the normalized form of a handwritten name.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Free text to normalize (quote it if it contains spaces).
    pub text: String,
}

impl ParseArgs {
    pub fn run(self) -> Result<()> {
        match normalize(&self.text) {
            Some(name) => {
                println!("{name}");
                Ok(())
            }
            None => bail!("'{}' has no usable letters", self.text),
        }
    }
}
