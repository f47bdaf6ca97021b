//! JSON-lines event log.
//!
//! The terminal is in raw mode while the session runs, so nothing is printed;
//! instead, when a log path is configured, every session event is appended to
//! that file as one JSON object per line. A failed write disables the log and
//! the session carries on.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{DoorPolicy, MoveOutcome, Session};
use crate::types::{Command, Point};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LogRecord {
    Start {
        seed: u32,
        grid: [u16; 2],
        viewport: [u16; 2],
        rooms: usize,
        doors: &'static str,
    },
    Move {
        command: &'static str,
        offset: [i32; 2],
        player: [i32; 2],
    },
    Collision {
        command: &'static str,
        target: [i32; 2],
        kind: &'static str,
        offset: [i32; 2],
    },
    Quit {
        ticks: u64,
    },
}

fn xy(p: Point) -> [i32; 2] {
    [p.x, p.y]
}

impl LogRecord {
    pub fn start(seed: u32, session: &Session, doors: DoorPolicy) -> Self {
        let grid = session.grid();
        let viewport = session.camera().viewport();
        LogRecord::Start {
            seed,
            grid: [grid.width(), grid.height()],
            viewport: [viewport.width(), viewport.height()],
            rooms: session.rooms().len(),
            doors: doors.as_str(),
        }
    }

    /// Record for a movement command, taken after the session applied it.
    pub fn movement(command: Command, outcome: MoveOutcome, session: &Session) -> Self {
        let offset = xy(session.camera().viewport().offset());
        match outcome {
            MoveOutcome::Moved(player) => LogRecord::Move {
                command: command.as_str(),
                offset,
                player: xy(player),
            },
            MoveOutcome::Collision { target, kind } => LogRecord::Collision {
                command: command.as_str(),
                target: xy(target),
                kind: kind.as_str(),
                offset,
            },
        }
    }
}

/// Append-only sink for [`LogRecord`]s; a no-op when disabled.
pub struct EventLog {
    sink: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, or return a disabled log for `None`.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path))?;
        Ok(Self {
            sink: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if sink.write_all(&self.buf).and_then(|_| sink.flush()).is_err() {
            self.sink = None;
        }
    }
}
