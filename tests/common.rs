#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use triplog::models::RawRow;

pub const LOG_HEADER: &str = "Session Time,GPS Fix Quality,Number of Satellites,Latitude (deg),Longitude (deg),GPS Altitude (feet),Hobbs Time,GPS Date & Time";

pub const WAYPOINTS_CSV: &str = "\
Latitude,Longitude,Short Name
37.0,-122.0,A
38.0,-121.0,B
";

/// Two sessions: the clock restarts at row 2, whose fix quality is 0.
pub const TWO_SESSION_LOG: &str = "\
Session Time,GPS Fix Quality,Number of Satellites,Latitude (deg),Longitude (deg),GPS Altitude (feet),Hobbs Time,GPS Date & Time
10,1,6,37.0005,-122.0,1000,100.1,2024-05-01 10:00:00
20,1,6,37.2,-122.3,3000,100.2,2024-05-01 10:10:00
5,0,6,38.0,-121.0,1000,100.3,2024-05-01 11:00:00
15,1,7,38.0002,-121.0,900,100.4,2024-05-01 11:20:00
";

pub fn tlg() -> Command {
    cargo_bin_cmd!("triplog")
}

/// Write `content` to a unique file inside the system temp dir
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_triplog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp file");
    p
}

/// Temp path that does not exist yet
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A fully valid row; tests override single fields.
pub fn good_row(date_time: &str) -> RawRow {
    RawRow {
        fix_quality: Some("1".into()),
        satellites: Some("6".into()),
        session_time: None,
        date_time: Some(date_time.into()),
        latitude: Some("37.0".into()),
        longitude: Some("-122.0".into()),
        altitude_ft: Some("1000".into()),
        hobbs: Some("100.0".into()),
    }
}

/// Build a data log body: one CSV line per entry, header prepended.
pub fn log_csv(lines: &[&str]) -> String {
    let mut out = String::from(LOG_HEADER);
    out.push('\n');
    for l in lines {
        out.push_str(l);
        out.push('\n');
    }
    out
}
