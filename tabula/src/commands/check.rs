use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tabula_config::{ConfigFile, DEFAULT_CONFIG};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(&file)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
