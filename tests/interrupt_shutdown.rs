#![cfg(unix)]

use reqwest::StatusCode;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{ChildStdout, Command};
use tokio::time::timeout;

const LISTENING: &str = "Server listening on ";

async fn next_line(lines: &mut Lines<BufReader<ChildStdout>>) -> Option<String> {
    timeout(Duration::from_secs(10), lines.next_line())
        .await
        .expect("timed out waiting for server output")
        .unwrap()
}

/// Starts `binary` on an ephemeral loopback port, checks it answers `path`,
/// interrupts it and returns everything it logged.
async fn run_until_interrupted(binary: &str, prefix: &str, path: &str) -> String {
    let mut child = Command::new(binary)
        .env(format!("{prefix}_HOST"), "127.0.0.1")
        .env(format!("{prefix}_PORT"), "0")
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .unwrap();

    let mut lines = BufReader::new(child.stdout.take().unwrap()).lines();
    let mut output = String::new();

    let addr = loop {
        let line = next_line(&mut lines)
            .await
            .expect("server exited before listening");
        output.push_str(&line);
        output.push('\n');
        if let Some(rest) = line.split(LISTENING).nth(1) {
            break rest.trim().to_string();
        }
    };

    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.bytes().await.unwrap();

    let pid = child.id().unwrap() as libc::pid_t;
    assert_eq!(unsafe { libc::kill(pid, libc::SIGINT) }, 0);

    while let Some(line) = next_line(&mut lines).await {
        output.push_str(&line);
        output.push('\n');
    }

    let status = timeout(Duration::from_secs(10), child.wait())
        .await
        .expect("server did not exit after SIGINT")
        .unwrap();
    assert!(status.success(), "exit status {status}\n{output}");

    output
}

#[tokio::test]
async fn status_server_stops_on_sigint() {
    let output = run_until_interrupted(
        env!("CARGO_BIN_EXE_status-server"),
        "STATUS_SERVER",
        "/",
    )
    .await;

    assert!(output.contains("Received Ctrl+C"), "{output}");
    assert!(output.contains("Server stopped"), "{output}");
}

#[tokio::test]
async fn chunked_server_stops_on_sigint() {
    let output = run_until_interrupted(
        env!("CARGO_BIN_EXE_chunked-server"),
        "CHUNKED_SERVER",
        "/chunked.html",
    )
    .await;

    assert!(output.contains("Received Ctrl+C"), "{output}");
    assert!(output.contains("Server stopped"), "{output}");
}
