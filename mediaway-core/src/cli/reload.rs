use anyhow::{Context, Result};
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::fs;
use std::path::Path;

/// Send SIGHUP to a running media server via its pid file.
pub fn run<P: AsRef<Path>>(pid_file: P) -> Result<()> {
    let pid_file = pid_file.as_ref();

    let contents = fs::read_to_string(pid_file)
        .with_context(|| format!("failed to read pid file {}", pid_file.display()))?;

    let pid = parse_pid(&contents)?;

    kill(pid, Signal::SIGHUP).with_context(|| format!("failed to send SIGHUP to pid {}", pid))?;

    println!("Sent SIGHUP to mediaway (pid {})", pid);

    Ok(())
}

fn parse_pid(contents: &str) -> Result<Pid> {
    let pid: i32 = contents
        .trim()
        .parse()
        .context("invalid pid file contents")?;

    anyhow::ensure!(pid > 0, "pid file holds a non-positive pid {pid}");

    Ok(Pid::from_raw(pid))
}
