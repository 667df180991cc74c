#![allow(dead_code)]
use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hv() -> Command {
    Command::cargo_bin("healthviz").unwrap()
}

/// Create a unique temp path for a config file and remove any leftover.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_healthviz.conf"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file pointing at an address nothing listens on
/// (127.0.0.1:9, the discard port) and return its path.
pub fn unreachable_config(name: &str) -> String {
    let p = temp_config(name);
    let yaml = "host: 127.0.0.1\nport: 9\nuser: nobody\npassword: \"\"\ndatabase: deaths\n";
    fs::write(&p, yaml).expect("write test config");
    p
}

/// Create a temporary output file path and ensure it's removed.
pub fn temp_out(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.html"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
