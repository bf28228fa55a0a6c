// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated redraw loop that exercises the ring and the diagnostics pipeline.
//!
//! Plays a [`ProgressRing`] for a little over one cycle at ~60 Hz, pauses,
//! resumes, shrinks the ring with a size factor and finally resets it. Events
//! go to both a [`PrettyPrintSink`] and a [`RecorderSink`]; the recording is
//! then exported as a Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use dotring_core::backend::Host;
use dotring_core::config::Config;
use dotring_core::engine::ProgressRing;
use dotring_core::time::HostTime;
use dotring_core::trace::{FrameEvent, LayoutEvent, PlaybackEvent, TraceSink, Tracer};

use dotring_debug::canvas::RecordingSurface;
use dotring_debug::pretty::PrettyPrintSink;
use dotring_debug::recorder::RecorderSink;

/// Frame interval in milliseconds (≈60 Hz).
const FRAME_INTERVAL_MS: u64 = 16;
/// Frames played before the pause; a bit more than one 3.6 s cycle.
const FIRST_RUN_FRAMES: u64 = 240;
/// Frames played after each later transition.
const SHORT_RUN_FRAMES: u64 = 60;
/// Length of the simulated pause.
const PAUSE_MS: u64 = 500;

/// Forwards every event to both sinks.
struct Fanout {
    pretty: PrettyPrintSink,
    recorder: RecorderSink,
}

impl TraceSink for Fanout {
    fn on_frame(&mut self, e: &FrameEvent) {
        self.pretty.on_frame(e);
        self.recorder.on_frame(e);
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.pretty.on_playback(e);
        self.recorder.on_playback(e);
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        self.pretty.on_layout(e);
        self.recorder.on_layout(e);
    }
}

/// A host whose clock only moves when the loop advances it.
struct SimHost {
    now_ms: u64,
    redraw_requested: bool,
    sinks: Fanout,
}

impl Host for SimHost {
    fn now(&self) -> HostTime {
        HostTime(self.now_ms)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::new(&mut self.sinks)
    }
}

/// Delivers pending redraws for up to `frames` frame intervals.
fn run_frames(
    ring: &mut ProgressRing,
    host: &mut SimHost,
    surface: &mut RecordingSurface,
    frames: u64,
) -> u64 {
    let mut drawn = 0;
    for _ in 0..frames {
        host.now_ms += FRAME_INTERVAL_MS;
        if !host.redraw_requested {
            continue;
        }
        host.redraw_requested = false;
        surface.clear();
        ring.on_redraw_requested(host, surface);
        drawn += 1;
    }
    drawn
}

fn main() {
    // -- host --------------------------------------------------------------
    let mut host = SimHost {
        now_ms: 1_000, // start at 1s
        redraw_requested: false,
        sinks: Fanout {
            pretty: PrettyPrintSink::new(Box::new(std::io::stdout())).every_nth_frame(30),
            recorder: RecorderSink::new(),
        },
    };
    let mut surface = RecordingSurface::new();

    // -- ring --------------------------------------------------------------
    let mut ring = ProgressRing::new(Config::default()).expect("default config is valid");
    let side = ring.layout(Some(320.0), Some(480.0));
    println!("Laid out a {side}x{side} ring");

    // -- simulated loop ----------------------------------------------------
    let mut total = 0;

    ring.start(&mut host);
    total += run_frames(&mut ring, &mut host, &mut surface, FIRST_RUN_FRAMES);

    ring.stop(&mut host);
    // The redraw already in flight renders one frozen frame, then the chain
    // ends.
    total += run_frames(&mut ring, &mut host, &mut surface, PAUSE_MS / FRAME_INTERVAL_MS);

    ring.start(&mut host);
    total += run_frames(&mut ring, &mut host, &mut surface, SHORT_RUN_FRAMES);

    ring.set_size_factor(&mut host, 0.5).expect("0.5 is a valid radius factor");
    total += run_frames(&mut ring, &mut host, &mut surface, SHORT_RUN_FRAMES);

    ring.reset(&mut host);
    total += run_frames(&mut ring, &mut host, &mut surface, SHORT_RUN_FRAMES);

    println!(
        "Last frame drew {} dots; playing={}",
        surface.circles().len(),
        ring.is_playing()
    );

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    dotring_debug::chrome::export(host.sinks.recorder.as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({total} frames)");
}
