use std::process::ExitCode;

fn main() -> ExitCode {
    match growth_sds::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("growth: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
