use crate::ShellError;
use std::process;

pub trait Executor {
    /// `argv[0]` names the program, the rest are its arguments. Returns once
    /// the program has exited; an empty `argv` does nothing.
    fn execute(&mut self, argv: &[String]) -> Result<(), ShellError>;
}

#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&mut self, argv: &[String]) -> Result<(), ShellError> {
        let Some((program, args)) = argv.split_first() else {
            return Ok(());
        };

        let status = process::Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ShellError::Spawn {
                program: program.clone(),
                source,
            })?;
        log::debug!("{program} exited with {status}");

        Ok(())
    }
}
