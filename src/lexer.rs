use crate::ShellError;

pub struct Lexer {
    max_tokens: usize,
}

impl Lexer {
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    /// Tokenizes `line` into `tokens`, replacing whatever the vector held before.
    ///
    /// Returns the number of tokens produced. On overflow the vector is left
    /// empty so no partial command can reach the executor.
    pub fn lex(&self, line: &str, tokens: &mut Vec<String>) -> Result<usize, ShellError> {
        tokens.clear();

        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        for word in line.split_whitespace() {
            if tokens.len() == self.max_tokens {
                tokens.clear();
                return Err(ShellError::TooManyTokens {
                    max: self.max_tokens,
                });
            }

            tokens.push(word.to_owned());
        }

        Ok(tokens.len())
    }
}
