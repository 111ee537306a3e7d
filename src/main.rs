use std::process::ExitCode;

mod artwork;
mod config;
mod library;
mod pipeline;
mod runtime;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
