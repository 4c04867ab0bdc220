//! 두 실행 파일이 설정 오류를 종료 코드로 알리는지 확인한다.
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

const BAD_PORT: &str = "[server]\nport = \"x\"\n";

fn run_cli(dir: &std::path::Path, stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_electrical_network_toolbox_cli"))
        .current_dir(dir)
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // 자식이 stdin을 읽기 전에 종료하면 BrokenPipe가 날 수 있다.
    if let Err(e) = child.stdin.take().unwrap().write_all(stdin.as_bytes()) {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "{e}");
    }
    child.wait_with_output().unwrap()
}

#[test]
fn cli_exits_with_failure_on_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), BAD_PORT).unwrap();

    let output = run_cli(dir.path(), "0\n");
    assert!(!output.status.success(), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("오류"));
}

#[test]
fn cli_exits_cleanly_without_config() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_cli(dir.path(), "0\n");
    assert!(output.status.success(), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("프로그램을 종료합니다."));
}

#[test]
fn web_exits_with_failure_on_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, BAD_PORT).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_electrical_network_toolbox"))
        .arg("--config")
        .arg(&path)
        .env("RUST_LOG", "error")
        .output()
        .unwrap();
    assert!(!output.status.success(), "{output:?}");
}
