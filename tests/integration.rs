//! End-to-end tests for the snippet binaries
//!
//! Each test runs a built binary with an isolated config directory
//! (XDG_CONFIG_HOME) and checks stdout, stderr, and the exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Test context with an isolated config directory
struct TestContext {
    /// Removed on drop
    temp_dir: tempfile::TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn config_home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the default config file the binaries look for
    fn create_config(&self, content: &str) -> PathBuf {
        let config_path = self.config_home().join("arith-snippets").join("config.toml");
        fs::create_dir_all(config_path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&config_path, content).expect("Failed to write config");
        config_path
    }

    /// Run a binary with the given arguments
    fn run(&self, bin: &str, args: &[&str]) -> RunOutput {
        let output = Command::new(bin)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run binary");

        RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            code: output.status.code(),
        }
    }

    /// Run a binary expecting success
    fn run_ok(&self, bin: &str, args: &[&str]) -> String {
        let output = self.run(bin, args);
        assert_eq!(
            output.code,
            Some(0),
            "{bin} {args:?} failed:\nstdout: {}\nstderr: {}",
            output.stdout,
            output.stderr
        );
        output.stdout
    }
}

/// Output from a binary run
#[derive(Debug)]
struct RunOutput {
    stdout: String,
    stderr: String,
    code: Option<i32>,
}

const FIBONACCI: &str = env!("CARGO_BIN_EXE_fibonacci");
const SIMPLE_INTEREST: &str = env!("CARGO_BIN_EXE_simple-interest");
const SNIPPETS: &str = env!("CARGO_BIN_EXE_snippets");

const DEFAULT_INTEREST: &str =
    "Principal: 5000.00\nRate: 5.50%\nTime: 2.00 years\nSimple Interest: 550.00\n";

#[test]
fn test_fibonacci_defaults() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.run_ok(FIBONACCI, &[]),
        "Fibonacci Series up to 10 terms: 0, 1, 1, 2, 3, 5, 8, 13, 21, 34\n"
    );
}

#[test]
fn test_simple_interest_defaults() {
    let ctx = TestContext::new();
    assert_eq!(ctx.run_ok(SIMPLE_INTEREST, &[]), DEFAULT_INTEREST);
}

#[test]
fn test_fibonacci_terms_flag() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.run_ok(FIBONACCI, &["--terms", "3"]),
        "Fibonacci Series up to 3 terms: 0, 1, 1\n"
    );
    assert_eq!(
        ctx.run_ok(FIBONACCI, &["-n", "0"]),
        "Fibonacci Series up to 0 terms: \n"
    );
}

#[test]
fn test_fibonacci_negative_terms_rejected() {
    let ctx = TestContext::new();
    let output = ctx.run(FIBONACCI, &["--terms=-1"]);
    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_fibonacci_overflow_reports_error() {
    let ctx = TestContext::new();
    let output = ctx.run(FIBONACCI, &["--terms", "100"]);
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Error: Cannot compute 100 Fibonacci terms"));
}

#[test]
fn test_simple_interest_flags() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(
        SIMPLE_INTEREST,
        &["--principal", "1000", "--rate", "5", "--time", "-1"],
    );
    assert_eq!(
        stdout,
        "Principal: 1000.00\nRate: 5.00%\nTime: -1.00 years\nSimple Interest: -50.00\n"
    );
}

#[test]
fn test_simple_interest_nan_rejected() {
    let ctx = TestContext::new();
    let output = ctx.run(SIMPLE_INTEREST, &["--rate", "NaN"]);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Non-finite value for rate"));
}

#[test]
fn test_default_config_file_applies() {
    let ctx = TestContext::new();
    ctx.create_config("[fibonacci]\nterms = 5\n\n[interest]\ntime = 4.0\n");

    assert_eq!(
        ctx.run_ok(FIBONACCI, &[]),
        "Fibonacci Series up to 5 terms: 0, 1, 1, 2, 3\n"
    );
    assert!(ctx
        .run_ok(SIMPLE_INTEREST, &[])
        .ends_with("Simple Interest: 1100.00\n"));
    // Flags win over the config file
    assert_eq!(
        ctx.run_ok(FIBONACCI, &["--terms", "2"]),
        "Fibonacci Series up to 2 terms: 0, 1\n"
    );
}

#[test]
fn test_invalid_config_reports_error() {
    let ctx = TestContext::new();
    ctx.create_config("[fibonacci]\nterms = \"ten\"\n");

    let output = ctx.run(FIBONACCI, &[]);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Invalid configuration file"));
}

#[test]
fn test_explicit_config_path() {
    let ctx = TestContext::new();
    let path = ctx.config_home().join("custom.toml");
    fs::write(&path, "[interest]\nprincipal = 200.0\n").unwrap();

    let stdout = ctx.run_ok(SIMPLE_INTEREST, &["--config", path.to_str().unwrap()]);
    assert!(stdout.starts_with("Principal: 200.00\n"));
    assert!(stdout.ends_with("Simple Interest: 22.00\n"));
}

#[test]
fn test_json_format() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.run_ok(FIBONACCI, &["--terms", "4", "--format", "json"]),
        "{\"terms\":4,\"values\":[0,1,1,2]}\n"
    );
}

#[test]
fn test_umbrella_subcommands() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.run_ok(SNIPPETS, &["fibonacci"]),
        "Fibonacci Series up to 10 terms: 0, 1, 1, 2, 3, 5, 8, 13, 21, 34\n"
    );
    assert_eq!(ctx.run_ok(SNIPPETS, &["interest"]), DEFAULT_INTEREST);
    assert_eq!(ctx.run_ok(SNIPPETS, &["si"]), DEFAULT_INTEREST);
}
