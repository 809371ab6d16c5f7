use std::process::ExitCode;

fn main() -> ExitCode {
    match ringq::cli::run() {
        Ok(()) => ExitCode::from(ringq::errors::EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(ringq::errors::get_exit_code(&e))
        }
    }
}
