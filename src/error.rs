use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthorsError>;

#[derive(Error, Debug)]
pub enum AuthorsError {
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("git log exited with {}: {stderr}", describe_exit(.code))]
    GitFailed { code: Option<i32>, stderr: String },
    #[error("Malformed commit header on line {line_number}: {line:?}")]
    MalformedHeader { line_number: usize, line: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

impl AuthorsError {
    /// Process exit status to report for this error.
    ///
    /// A failing git keeps its own status; everything else maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AuthorsError::GitFailed { code: Some(code), .. } => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }
}
