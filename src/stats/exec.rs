use super::{aggregate, parse_log, render, GitLog};
use anyhow::Context;
use console::style;

/// Runs the whole fetch, parse, aggregate and render pipeline.
pub fn report_lines(git: &GitLog, git_args: &[String]) -> anyhow::Result<Vec<String>> {
    let lines = git.fetch(git_args).context("Failed to read git history")?;
    let authors = parse_log(&lines).context("Failed to parse git log output")?;
    Ok(render(&aggregate(authors)))
}

pub fn exec(git_args: &[String]) -> anyhow::Result<()> {
    let lines = report_lines(&GitLog::new(), git_args)?;

    let mut lines = lines.into_iter();
    if let Some(header) = lines.next() {
        println!("{}", style(header).bold());
    }
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
