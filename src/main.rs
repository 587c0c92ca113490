mod chart;
mod error;
mod models;
mod report;
mod run;
mod sheet;
mod util;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    run::as_cli(&args)
}
