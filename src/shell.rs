use crate::bindings::BindingTable;
use crate::config::Config;
use crate::executor::Executor;
use crate::lexer::Lexer;
use crate::parser::parse_set;
use crate::substitution::substitute;
use crate::{SET_KEYWORD, ShellError, print_to};
use anyhow::Context;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::slice;

const PROMPT: &str = ">";
const INVALID_COMMAND: &str = "Invalid command";
const SET_USAGE: &str = "Usage: set $variablename=value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Init,
    Preloading,
    Running,
    Terminated,
}

pub struct Shell<E> {
    config: Config,
    lexer: Lexer,
    bindings: BindingTable,
    tokens: Vec<String>,
    executor: E,
    state: State,
}

impl<E: Executor> Shell<E> {
    pub fn new(config: Config, executor: E) -> Self {
        Self {
            lexer: Lexer::new(config.max_tokens),
            bindings: BindingTable::new(config.max_bindings),
            tokens: Vec::with_capacity(config.max_tokens),
            config,
            executor,
            state: State::Init,
        }
    }

    /// Opens the init source, preloads it and then serves `input` until it ends.
    ///
    /// Failing to open the init source is the only fatal error; the returned
    /// error wraps [`ShellError::InitSourceUnavailable`] and `input` is never read.
    pub fn start<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        let init = match File::open(&self.config.init_path) {
            Ok(file) => BufReader::new(file),
            Err(source) => {
                print_to!(out, "\n\nUnable to open {}\n\n\n", self.config.init_name());
                out.flush()?;
                self.state = State::Terminated;

                return Err(ShellError::InitSourceUnavailable {
                    path: self.config.init_path.clone(),
                    source,
                }
                .into());
            }
        };

        print_to!(out, "\n\nProcessing {}\n\n\n", self.config.init_name());
        self.preload(init, out)?;
        self.repl(input, out)
    }

    // Lines here are only ever `set` statements; the autorun uses values, not names.
    pub fn preload<R: BufRead, W: Write>(&mut self, mut init: R, out: &mut W) -> anyhow::Result<()> {
        self.state = State::Preloading;
        let mut buf = Vec::new();

        while let Some(line) = read_line(&mut init, &mut buf).context("read init source")? {
            let line = line.trim_end_matches(['\r', '\n']);
            print_to!(out, "preloading command: {line}\n");

            let result = self
                .lexer
                .lex(line, &mut self.tokens)
                .and_then(|_| self.bind());
            if let Err(err) = result {
                reject(&err, out)?;
            }
        }

        for binding in &self.bindings {
            print_to!(out, "\n\nexecuted command: {}\n", binding.name);
            run(&mut self.executor, slice::from_ref(&binding.value), out)?;
        }

        print_to!(out, "\nCompleted executing commands. Control given to user.\n");
        self.state = State::Running;

        Ok(())
    }

    pub fn repl<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> anyhow::Result<()> {
        self.state = State::Running;
        let mut buf = Vec::new();

        loop {
            print_to!(out, "{PROMPT}");
            out.flush()?;

            let Some(line) = read_line(&mut input, &mut buf).context("read command")? else {
                break;
            };

            self.eval(&line, out)?;
        }

        self.state = State::Terminated;
        Ok(())
    }

    pub fn eval<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        let count = match self.lexer.lex(line, &mut self.tokens) {
            Ok(count) => count,
            Err(err) => return reject(&err, out),
        };

        if count == 0 {
            return Ok(());
        }

        let is_set = self.tokens[0] == SET_KEYWORD;
        if is_set && count == 1 {
            print_to!(out, "{SET_USAGE}\n");
        } else if is_set {
            if let Err(err) = self.bind() {
                reject(&err, out)?;
            }
        } else {
            let replaced = substitute(&mut self.tokens, &self.bindings);
            log::debug!("substituted {replaced} token(s): {:?}", self.tokens);
            run(&mut self.executor, &self.tokens, out)?;
        }

        Ok(())
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn bind(&mut self) -> Result<(), ShellError> {
        let binding = parse_set(&self.tokens)?;
        log::debug!("binding {} to {}", binding.name, binding.value);

        self.bindings.push(binding)
    }
}

/// Reads up to the next newline. Bytes that are not UTF-8 become U+FFFD, so a
/// mangled line is still a line. Returns `None` at end of input.
fn read_line<'a, R: BufRead>(input: &mut R, buf: &'a mut Vec<u8>) -> io::Result<Option<Cow<'a, str>>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(buf)))
}

fn run<E: Executor, W: Write>(executor: &mut E, argv: &[String], out: &mut W) -> io::Result<()> {
    out.flush()?;

    if let Err(err) = executor.execute(argv) {
        if argv.first().is_some_and(|program| program == SET_KEYWORD) {
            log::warn!("{err}");
        } else {
            reject(&err, out)?;
        }
    }

    Ok(())
}

fn reject<W: Write>(err: &ShellError, out: &mut W) -> io::Result<()> {
    log::warn!("{err}");
    print_to!(out, "{INVALID_COMMAND}\n");

    Ok(())
}
