use console::style;
use git_authors::cli::Cli;
use git_authors::AuthorsError;
use std::process::ExitCode;

fn init_logging() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match Cli::parse().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").for_stderr().red().bold());
            let code = err
                .downcast_ref::<AuthorsError>()
                .map_or(1, AuthorsError::exit_code);
            ExitCode::from(code)
        }
    }
}
