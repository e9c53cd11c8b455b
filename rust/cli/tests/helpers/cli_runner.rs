use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Variables the binary reads; cleared for every run so the host environment
/// cannot leak into a test.
const CLEARED_ENV: &[&str] = &[
    "SIXMAX_CONFIG",
    "SIXMAX_STACK",
    "SIXMAX_HERO",
    "SIXMAX_LOG",
    "RUST_LOG",
];

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    workdir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new(workdir: &Path) -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_sixmax")),
            workdir: workdir.to_path_buf(),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in CLEARED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn sixmax binary");
        if let Some(mut stdin) = child.stdin.take() {
            // dropping stdin right away gives `play` an EOF
            if let Some(payload) = input {
                let _ = stdin.write_all(payload.as_bytes());
            }
        }
        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
