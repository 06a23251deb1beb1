mod config;
mod error;
mod runner;
mod signals;
mod utils;

use error::Error;
use runner::{Runner, ThreadPause};
use signals::OsDisposition;
use std::env;
use std::io;
use std::process;

fn main() {
    // Logs go to stderr; stdout belongs to the harness.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config = match config::parse_args(&args) {
        Ok(config) => config,
        Err(Error::Usage) => {
            utils::print_usage();
            process::exit(1);
        }
        Err(err) => {
            utils::error(&err.to_string());
            process::exit(1);
        }
    };
    log::debug!("starting with {:?}", config);

    let mut runner = Runner::new(io::stdout(), OsDisposition, ThreadPause);
    match runner.run(&config) {
        Ok(code) => {
            log::debug!("{:?}, exiting with {}", runner.state(), code);
            process::exit(code);
        }
        Err(err) => {
            utils::error(&err.to_string());
            process::exit(1);
        }
    }
}
