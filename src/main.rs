use bindsh::config::Config;
use bindsh::executor::ProcessExecutor;
use bindsh::shell::Shell;
use std::io;
use std::process::exit;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let mut shell = Shell::new(Config::default(), ProcessExecutor);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(err) = shell.start(stdin.lock(), &mut stdout) {
        log::error!("{err:#}");
        exit(1);
    }
}
