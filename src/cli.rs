use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser)]
#[command(name = "git-authors")]
#[command(about = "Per-author line statistics from git history, as an aligned table")]
#[command(version)]
pub struct Cli {
    #[arg(
        value_name = "GIT_LOG_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Extra arguments appended to `git log` (revisions, --since, paths, ...)"
    )]
    pub git_args: Vec<String>,
}

impl Cli {
    pub fn parse() -> Self {
        Self::try_parse_raw(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// clap still answers `--help`/`--version`, but the git arguments are
    /// taken from the raw argv so a `--` separator survives.
    pub fn try_parse_raw<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut cli = <Self as Parser>::try_parse_from(args.clone())?;
        cli.git_args = args
            .iter()
            .skip(1)
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        Ok(cli)
    }

    pub fn execute(self) -> Result<()> {
        crate::stats::exec(&self.git_args)
    }
}
