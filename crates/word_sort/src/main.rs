use std::process::ExitCode;

use log::{LevelFilter, error};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use word_sort::{Invocation, LOG_ENV, USAGE, run};

fn initialize_logging(level: LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    if let Err(err) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logging disabled: {err}");
    }
}

fn main() -> ExitCode {
    let env_level = std::env::var(LOG_ENV).ok();
    let config = match Invocation::parse(std::env::args().skip(1), env_level.as_deref()) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    initialize_logging(config.log_level);

    match run(&config) {
        Ok(_) => {
            println!(
                "Processing completed. Sorted list written to {}.",
                config.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
