//! Startup configuration.
//!
//! Values come from `ROOMS_*` environment variables (bad values fall back to
//! the defaults) and can be overridden by command-line flags (bad values are
//! an error).

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, ensure, Result};

use crate::core::{DoorPolicy, RoomGenerator};
use crate::types::{MAP_FACTOR, ROOM_COUNT, ROOM_MAX, STATUS_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed RNG seed; time-derived when unset
    pub seed: Option<u32>,
    pub room_count: u32,
    pub room_max: i32,
    pub map_factor: u16,
    pub door_policy: DoorPolicy,
    /// JSON-lines event log; disabled when unset
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            room_count: ROOM_COUNT,
            room_max: ROOM_MAX,
            map_factor: MAP_FACTOR,
            door_policy: DoorPolicy::default(),
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = parse_var(&lookup, "ROOMS_SEED");
        let room_count = parse_var(&lookup, "ROOMS_COUNT").unwrap_or(defaults.room_count);
        let room_max = parse_var(&lookup, "ROOMS_ROOM_MAX")
            .filter(|&m: &i32| m >= 1)
            .unwrap_or(defaults.room_max);
        let map_factor = parse_var(&lookup, "ROOMS_MAP_FACTOR")
            .filter(|&f: &u16| f >= 1)
            .unwrap_or(defaults.map_factor);
        let door_policy = lookup("ROOMS_DOORS")
            .and_then(|s| DoorPolicy::from_str(s.trim()))
            .unwrap_or(defaults.door_policy);
        let log_path = lookup("ROOMS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            room_count,
            room_max,
            map_factor,
            door_policy,
            log_path,
        }
    }

    /// Apply command-line flags on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--seed" => {
                    let v = value()?;
                    self.seed = Some(
                        v.parse()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--rooms" => {
                    let v = value()?;
                    self.room_count = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --rooms value: {}", v))?;
                }
                "--map-factor" => {
                    let v = value()?;
                    let factor: u16 = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --map-factor value: {}", v))?;
                    ensure!(factor >= 1, "--map-factor must be at least 1");
                    self.map_factor = factor;
                }
                "--doors" => {
                    let v = value()?;
                    self.door_policy = DoorPolicy::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --doors value: {} (expected all|legacy)", v))?;
                }
                "--log" => {
                    self.log_path = Some(value()?.clone());
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 2;
        }
        Ok(())
    }

    pub fn generator(&self) -> RoomGenerator {
        RoomGenerator::new(self.room_count, self.room_max, self.door_policy)
    }

    /// Seed to use for this session.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(time_seed)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

/// Check that the display can hold at least one map row plus the status line.
pub fn check_display(columns: u16, rows: u16) -> Result<()> {
    ensure!(
        columns >= 1 && rows > STATUS_ROWS,
        "terminal too small: {}x{} (need at least 1x{})",
        columns,
        rows,
        STATUS_ROWS + 1
    );
    Ok(())
}

/// Seed derived from the wall clock.
pub fn time_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
