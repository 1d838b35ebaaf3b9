//! `docs_site` binary: validate the site descriptor and emit the docs-tool modules.

use std::env;
use std::io;
use std::process::ExitCode;

use docs_site::cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(cli::log_filter(env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(io::stderr)
        .init();

    let invocation = match cli::parse(env::args().skip(1).collect()) {
        Ok(invocation) => invocation,
        Err(err) => {
            let status = cli::report_failure(&err, &mut io::stderr());
            cli::print_usage();
            return ExitCode::from(status);
        }
    };

    let root = match env::current_dir() {
        Ok(root) => root,
        Err(err) => {
            eprintln!("error: failed to resolve working directory: {err}");
            return ExitCode::from(1);
        }
    };

    match cli::run(&root, &invocation, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(cli::report_failure(&err, &mut io::stderr())),
    }
}
