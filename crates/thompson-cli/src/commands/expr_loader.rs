use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the expression comes from, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl ExprInput {
    pub fn new(text: Option<String>, file: Option<PathBuf>) -> Self {
        Self { text, file }
    }

    pub fn is_stdin(&self) -> bool {
        self.text.is_none() && self.file.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}

/// A loaded expression and the name to show in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprSource {
    pub text: String,
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("expression is required: use a positional argument or -f/--file")]
    Missing,
    #[error("expression given twice: use either a positional argument or -f/--file")]
    Conflict,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_expression(input: &ExprInput) -> Result<ExprSource, LoadError> {
    match (&input.text, &input.file) {
        (Some(_), Some(_)) => Err(LoadError::Conflict),
        (Some(text), None) => Ok(ExprSource {
            text: text.clone(),
            path: None,
        }),
        (None, Some(path)) if path.as_os_str() == "-" => load_stdin(),
        (None, Some(path)) => load_file(path),
        (None, None) => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<ExprSource, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(ExprSource {
        text: strip_line_ending(&buf).to_owned(),
        path: Some("<stdin>".to_owned()),
    })
}

fn load_file(path: &Path) -> Result<ExprSource, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_owned(),
        source,
    })?;
    Ok(ExprSource {
        text: strip_line_ending(&content).to_owned(),
        path: Some(path.to_string_lossy().into_owned()),
    })
}

/// Drop one trailing `\n` or `\r\n`. Any other whitespace is a literal.
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}
