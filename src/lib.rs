pub mod bindings;
pub mod config;
pub mod executor;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod shell;
pub mod substitution;

use std::io;
use std::path::PathBuf;

pub const SIGIL: char = '$';
pub const SET_KEYWORD: &str = "set";

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("unable to open init source {}: {source}", .path.display())]
    InitSourceUnavailable { path: PathBuf, source: io::Error },
    #[error("too many tokens, at most {max} allowed")]
    TooManyTokens { max: usize },
    #[error("too many bindings, at most {max} allowed")]
    TooManyBindings { max: usize },
    #[error("invalid set statement: {0}")]
    SetSyntax(#[from] parser::SetSyntax),
    #[error("{program}: {source}")]
    Spawn { program: String, source: io::Error },
}
