// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Frames become counter (`"C"`) events so the cycle factor, rotation and
/// number of moving dots plot as tracks. Playback transitions and layout
/// passes become global instant events.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Frame(e) => {
                events.push(json!({
                    "ph": "C",
                    "name": "Cycle",
                    "cat": "Frame",
                    "ts": ms_to_us(e.now.millis()),
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "factor": e.factor,
                        "rotation": e.rotation_degrees,
                    }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": "MovingDots",
                    "cat": "Frame",
                    "ts": ms_to_us(e.now.millis()),
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "moving": e.moving_dots,
                    }
                }));
            }
            RecordedEvent::Playback(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.transition),
                    "cat": "Playback",
                    "ts": ms_to_us(e.at.millis()),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "elapsed_ms": e.elapsed.millis(),
                    }
                }));
            }
            RecordedEvent::Layout(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Layout",
                    "cat": "Layout",
                    "ts": ms_to_us(e.at.millis()),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "view_size": e.view_size,
                        "radius_factor": e.radius_factor,
                        "ring_radius": e.ring_radius,
                        "dot_radius": e.dot_radius,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ms_to_us(ms: u64) -> u64 {
    ms.saturating_mul(1000)
}
