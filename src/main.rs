use std::process::ExitCode;

use casemap_gen::logging::{log_disable, log_set_stderr};
use casemap_gen::{CaseMapGenerator, GeneratorConfig, GeneratorStatus, LogLevel};
use log::LevelFilter;

fn main() -> ExitCode {
    let config = match GeneratorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log_set_stderr(LogLevel::Error);
            log::error!("{err}");
            return exit_code(err.status());
        }
    };
    if config.log_level == LogLevel::Off {
        log_disable();
    } else {
        log_set_stderr(config.log_level);
    }

    match CaseMapGenerator::new(config).run() {
        Ok(_) => exit_code(GeneratorStatus::Ok),
        Err(err) => {
            if log::max_level() == LevelFilter::Off {
                log_set_stderr(LogLevel::Error);
            }
            log::error!("{err}");
            exit_code(err.status())
        }
    }
}

fn exit_code(status: GeneratorStatus) -> ExitCode {
    ExitCode::from(status.exit_code() as u8)
}
