use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};
use whenqa::{run, Cli};

fn main() -> Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output.render(cli.json)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<whenqa_core::Error>() {
            Some(e) if e.is_configuration() => {
                eprintln!("error: {e}");
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}
