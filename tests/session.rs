// Mon Oct 19 2026 - Alex

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn assistant() -> Command {
    let mut cmd = Command::cargo_bin("contact-assistant").expect("binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn add_then_lookup_normalizes_phone() {
    assistant()
        .write_stdin("add Alice +1-234-567\nphone Alice\nshow all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact successfully added.\n"))
        .stdout(predicate::str::contains("Enter command: +1234567\n"))
        .stdout(predicate::str::contains("Enter command: Alice: +1234567\n"))
        .stdout(predicate::str::ends_with("Enter command: Good bye!\n"));
}

#[test]
fn exit_stops_reading_input() {
    assistant()
        .write_stdin("exit\nhello\n")
        .assert()
        .success()
        .stdout("Enter command: Good bye!\n");
}

#[test]
fn errors_are_reported_as_text() {
    assistant()
        .write_stdin("change Bob 555\nunknown foo\nadd A B C D\nphone\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact not found.\n"))
        .stdout(predicate::str::contains("Unknown command.\n"))
        .stdout(predicate::str::contains("Too many arguments.\n"))
        .stdout(predicate::str::contains("Specify a name please.\n"));
}

#[test]
fn closed_input_says_good_bye() {
    assistant()
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout("Enter command: How can I help you?\nEnter command: \nGood bye!\n");
}

#[test]
fn logs_go_to_stderr() {
    assistant()
        .args(["--log-level", "debug"])
        .write_stdin("add Ann 1\ngoodbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("Adding contact Ann"));
}

#[test]
fn rejects_unknown_log_level() {
    assistant()
        .args(["--log-level", "loud"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown log level"));
}

#[test]
fn exit_with_extra_arguments_keeps_session_open() {
    assistant()
        .write_stdin("exit now\nhello\nexit\n")
        .assert()
        .success()
        .stdout(
            "Enter command: Extra arguments discarded.\nGood bye!\n\
             Enter command: How can I help you?\n\
             Enter command: Good bye!\n",
        );
}

#[cfg(unix)]
#[test]
#[allow(deprecated)]
fn interrupt_while_waiting_says_good_bye() {
    use std::io::Read;
    use std::process::{Command as StdCommand, Stdio};

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("contact-assistant"))
        .arg("--no-color")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn binary");

    // The Ctrl-C handler is installed before the first prompt is written.
    let mut stdout = child.stdout.take().expect("stdout pipe");
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !seen.ends_with(b"Enter command: ") {
        let n = stdout.read(&mut byte).expect("read prompt");
        assert!(n > 0, "exited before prompting: {:?}", String::from_utf8_lossy(&seen));
        seen.push(byte[0]);
    }

    let killed = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("run kill");
    assert!(killed.success());

    // Stdin is still open here, so only the interrupt can end the session.
    let mut rest = String::new();
    stdout.read_to_string(&mut rest).expect("read remaining output");
    let status = child.wait().expect("wait for binary");

    assert_eq!(rest, "\nGood bye!\n");
    assert_eq!(status.code(), Some(0));
}
