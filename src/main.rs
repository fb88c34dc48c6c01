use http_to_curl::cli;
use http_to_curl::status::ExitStatus;

/// Entry point
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    cli::run(args)
}
