use std::borrow::Cow;
use std::path::PathBuf;

pub const INIT_FILE: &str = ".shell_init.txt";
pub const MAX_TOKENS: usize = 9;
pub const MAX_BINDINGS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub init_path: PathBuf,
    pub max_tokens: usize,
    pub max_bindings: usize,
}

impl Config {
    pub fn with_init_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.init_path = path.into();
        self
    }

    pub fn init_name(&self) -> Cow<'_, str> {
        self.init_path
            .file_stem()
            .unwrap_or(self.init_path.as_os_str())
            .to_string_lossy()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            init_path: PathBuf::from(INIT_FILE),
            max_tokens: MAX_TOKENS,
            max_bindings: MAX_BINDINGS,
        }
    }
}
