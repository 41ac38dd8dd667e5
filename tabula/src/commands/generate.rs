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
pub struct GenerateCommand {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = ops::generate(&file, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
