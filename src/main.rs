use std::process::ExitCode;

use clap::Parser;
use haf_tools::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match haf_tools::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            println!("{:#}", err);
            ExitStatus::Error.into()
        }
    }
}
