use std::error::Error;

use clap::Parser;

use fractal_viewer::{ExplorerArgs, RunGuiCommand};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExplorerArgs::parse().to_config()?;

    RunGuiCommand::new(config).execute()
}
