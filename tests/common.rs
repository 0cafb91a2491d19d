#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rintertrack::Intervention;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's configuration directory.
pub fn rit(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rintertrack");
    cmd.env("RINTERTRACK_CONFIG_DIR", config_dir(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Per-test configuration directory inside the system temp dir
pub fn config_dir(name: &str) -> PathBuf {
    env::temp_dir().join(format!("rintertrack_{}_conf", name))
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rintertrack_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small snapshot shared by most tests: two technicians, one unassigned
/// record, a missing city and a missing date.
pub fn sample_records() -> Vec<Intervention> {
    vec![
        Intervention {
            inter_id: 1,
            client: Some("Acme".into()),
            ville: Some("Lyon".into()),
            km: Some(12.5),
            technician_fn: Some("Jean".into()),
            technician_ln: Some("Dupont".into()),
            technician_id: Some(10),
            date: Some("2024-03-05".into()),
            start_time: Some("08:00".into()),
            finish_time: Some("09:00".into()),
            duration: Some("1h".into()),
            inter_url: Some("https://cdn.example/photos/1.jpg".into()),
        },
        Intervention {
            inter_id: 2,
            client: Some("Beta".into()),
            ville: None,
            km: Some(40.0),
            technician_fn: Some("Marie".into()),
            technician_ln: Some("Curie".into()),
            technician_id: Some(20),
            date: Some("2024-03-06".into()),
            start_time: Some("10:00".into()),
            finish_time: Some("10:45".into()),
            duration: Some("45m".into()),
            inter_url: None,
        },
        Intervention {
            inter_id: 3,
            client: Some("Gamma".into()),
            ville: Some("Évry".into()),
            km: None,
            technician_fn: None,
            technician_ln: None,
            technician_id: None,
            date: None,
            start_time: None,
            finish_time: None,
            duration: Some("2h30m".into()),
            inter_url: None,
        },
        Intervention {
            inter_id: 4,
            client: Some("acme services".into()),
            ville: Some("Paris".into()),
            km: Some(3.0),
            technician_fn: Some("Jean".into()),
            technician_ln: Some("Dupont".into()),
            technician_id: Some(10),
            date: Some("2024-02-28".into()),
            start_time: Some("14:00".into()),
            finish_time: Some("14:20".into()),
            duration: Some("20m".into()),
            inter_url: None,
        },
    ]
}

/// Writes the sample snapshot as JSON and returns its path.
pub fn write_sample_json(name: &str) -> String {
    let path = env::temp_dir().join(format!("rintertrack_{}_data.json", name));
    let json = serde_json::to_string_pretty(&sample_records()).expect("serialize sample");
    fs::write(&path, json).expect("write sample data");
    path.to_string_lossy().to_string()
}
