use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workdir(init: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(init) = init {
        fs::write(dir.path().join(".shell_init.txt"), init).unwrap();
    }
    dir
}

fn bindsh(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bindsh").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn missing_init_file_is_fatal() {
    let dir = workdir(None);

    bindsh(&dir)
        .write_stdin("echo never\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unable to open .shell_init"))
        .stdout(predicate::str::contains("never").not())
        .stdout(predicate::str::contains(">").not());
}

#[test]
fn preload_runs_bindings_in_order() {
    let dir = workdir(Some("set $x=true\nset $y=false\n"));

    bindsh(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing .shell_init"))
        .stdout(predicate::str::contains(
            "\n\nexecuted command: $x\n\n\nexecuted command: $y\n",
        ))
        .stdout(predicate::str::ends_with(
            "Completed executing commands. Control given to user.\n>",
        ));
}

#[test]
fn bound_name_runs_program_with_arguments() {
    let dir = workdir(Some("set $t=true\n"));

    bindsh(&dir)
        .write_stdin("set $e=echo\n$e hello world\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(">>hello world\n>"));
}

#[test]
fn preload_output_comes_from_child() {
    let dir = workdir(Some("set $p=pwd\n"));
    let cwd = dir.path().canonicalize().unwrap();

    bindsh(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "executed command: $p\n{}\n",
            cwd.display()
        )));
}

#[test]
fn bad_input_is_reported_and_session_continues() {
    let dir = workdir(Some("not a set line\n"));

    bindsh(&dir)
        .write_stdin("set\nset $x\nno-such-program-here\necho still here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("preloading command: not a set line\nInvalid command\n"))
        .stdout(predicate::str::contains("Usage: set $variablename=value\n"))
        .stdout(predicate::str::contains("Invalid command\n").count(3))
        .stdout(predicate::str::contains("still here\n"));
}

#[test]
fn non_utf8_lines_do_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".shell_init.txt"),
        b"set $a=true\nset $b=caf\xe9\nset $c=pwd\n",
    )
    .unwrap();

    bindsh(&dir)
        .write_stdin(&b"echo caf\xe9\necho still here\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("executed command: $c\n"))
        .stdout(predicate::str::contains("still here\n"));
}
