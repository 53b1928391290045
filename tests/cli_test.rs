// Integration tests for the command-line variants of the benchmark server
// These tests exercise the compiled binaries the way the benchmark driver does.
// Everything touching the fixed port lives in a single test so concurrent
// test threads never race for the address.

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::Duration;

const FIXED_ADDR: &str = "http://127.0.0.1:7080/";

// Server process handle for proper cleanup
struct ServerHandle {
    process: Child,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        // Terminate the process forcefully
        if let Err(e) = self.process.kill() {
            println!("Error during process termination: {}", e);
        }

        // Wait for the process to completely terminate
        if let Err(e) = self.process.wait() {
            println!("Error waiting for process to finish: {}", e);
        }

        // Wait for the port to be freed
        thread::sleep(Duration::from_secs(1));
    }
}

fn flag_variant() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hello_bench"))
}

fn fixed_variant() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hello_bench_fixed"))
}

fn probe(url: &str) -> Result<reqwest::blocking::Response, reqwest::Error> {
    reqwest::blocking::Client::new()
        .get(url)
        .timeout(Duration::from_secs(2))
        .send()
}

#[test]
fn test_missing_worker_count_is_rejected() {
    let output = flag_variant()
        .output()
        .expect("Failed to run server binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("worker_count"), "stderr was: {}", stderr);
}

#[test]
fn test_server_lifecycle_on_fixed_address() {
    // Invalid counts must terminate before any listener is bound
    for bad in ["0", "-3"] {
        let output = flag_variant()
            .args(["--worker_count", bad])
            .output()
            .expect("Failed to run server binary");

        assert!(!output.status.success(), "worker_count={} was accepted", bad);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("positive integer"), "stderr was: {}", stderr);
    }

    // No server came up on the fixed address
    assert!(probe(FIXED_ADDR).is_err());

    // A valid count is announced on stdout before serving starts
    let mut process = flag_variant()
        .args(["--worker_count", "2"])
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to start server");
    let stdout = process.stdout.take().expect("Failed to capture stdout");
    let server = ServerHandle { process };

    let mut announcement = String::new();
    BufReader::new(stdout)
        .read_line(&mut announcement)
        .expect("Failed to read stdout");
    assert!(
        announcement.contains("2 workers"),
        "stdout was: {}",
        announcement
    );

    // Allow time for the listener to come up
    thread::sleep(Duration::from_millis(500));

    let response = probe(FIXED_ADDR).expect("Server did not answer");
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["server"], "Rust");
    assert_eq!(response.headers()["content-type"], "text/plain");
    assert_eq!(response.text().expect("Failed to read body"), "Hello World!");

    // A second instance on the same address must fail with a bind error
    let second = flag_variant()
        .args(["--worker_count", "2"])
        .output()
        .expect("Failed to run second server instance");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("bind"), "stderr was: {}", stderr);

    // The first instance keeps serving after the failed bind
    let response = probe(FIXED_ADDR).expect("First server stopped serving");
    assert_eq!(response.status(), 200);

    // Release the fixed port before starting the other variant
    drop(server);

    // The fixed variant serves without any flags
    let process = fixed_variant().spawn().expect("Failed to start server");
    let _server = ServerHandle { process };

    thread::sleep(Duration::from_millis(500));

    let response = probe(FIXED_ADDR).expect("Fixed variant did not answer");
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().expect("Failed to read body"), "Hello World!");
}
