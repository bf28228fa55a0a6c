// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`]. Floats are stored as their IEEE-754
//! bit patterns, so decoding is lossless.

use dotring_core::time::{Duration, HostTime};
use dotring_core::trace::{FrameEvent, LayoutEvent, PlaybackEvent, TraceSink, Transition};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_FRAME: u8 = 1;
const TAG_PLAYBACK: u8 = 2;
const TAG_LAYOUT: u8 = 3;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_transition(&mut self, t: Transition) {
        self.write_u8(match t {
            Transition::Start => 0,
            Transition::Stop => 1,
            Transition::Reset => 2,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_frame(&mut self, e: &FrameEvent) {
        self.write_u8(TAG_FRAME);
        self.write_u64(e.frame_index);
        self.write_u64(e.now.millis());
        self.write_u64(e.elapsed.millis());
        self.write_f64(e.factor);
        self.write_f64(e.rotation_degrees);
        self.write_u8(e.moving_dots);
        self.write_u8(u8::from(e.playing));
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.write_u8(TAG_PLAYBACK);
        self.write_u64(e.at.millis());
        self.write_transition(e.transition);
        self.write_u64(e.elapsed.millis());
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        self.write_u8(TAG_LAYOUT);
        self.write_u64(e.at.millis());
        self.write_f64(e.view_size);
        self.write_f64(e.radius_factor);
        self.write_f64(e.ring_radius);
        self.write_f64(e.dot_radius);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`FrameEvent`].
    Frame(FrameEvent),
    /// A [`PlaybackEvent`].
    Playback(PlaybackEvent),
    /// A [`LayoutEvent`].
    Layout(LayoutEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_transition(&mut self) -> Option<Transition> {
        Some(match self.read_u8()? {
            0 => Transition::Start,
            1 => Transition::Stop,
            _ => Transition::Reset,
        })
    }

    fn decode_frame(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Frame(FrameEvent {
            frame_index: self.read_u64()?,
            now: HostTime(self.read_u64()?),
            elapsed: Duration(self.read_u64()?),
            factor: self.read_f64()?,
            rotation_degrees: self.read_f64()?,
            moving_dots: self.read_u8()?,
            playing: self.read_u8()? != 0,
        }))
    }

    fn decode_playback(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Playback(PlaybackEvent {
            at: HostTime(self.read_u64()?),
            transition: self.read_transition()?,
            elapsed: Duration(self.read_u64()?),
        }))
    }

    fn decode_layout(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Layout(LayoutEvent {
            at: HostTime(self.read_u64()?),
            view_size: self.read_f64()?,
            radius_factor: self.read_f64()?,
            ring_radius: self.read_f64()?,
            dot_radius: self.read_f64()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_FRAME => self.decode_frame(),
            TAG_PLAYBACK => self.decode_playback(),
            TAG_LAYOUT => self.decode_layout(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> FrameEvent {
        FrameEvent {
            frame_index: 7,
            now: HostTime(10_600),
            elapsed: Duration(600),
            factor: 1.0 / 6.0,
            rotation_degrees: 6.0,
            moving_dots: 4,
            playing: true,
        }
    }

    fn sample_layout() -> LayoutEvent {
        LayoutEvent {
            at: HostTime(10_000),
            view_size: 300.0,
            radius_factor: 1.0,
            ring_radius: 100.0,
            dot_radius: 8.0,
        }
    }

    #[test]
    fn frame_is_stored_losslessly() {
        let mut rec = RecorderSink::new();
        let orig = sample_frame();
        rec.on_frame(&orig);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events, vec![RecordedEvent::Frame(orig)]);
    }

    #[test]
    fn mixed_stream_keeps_order() {
        let mut rec = RecorderSink::new();
        rec.on_playback(&PlaybackEvent {
            at: HostTime(10_000),
            transition: Transition::Start,
            elapsed: Duration::ZERO,
        });
        rec.on_layout(&sample_layout());
        rec.on_frame(&sample_frame());
        rec.on_playback(&PlaybackEvent {
            at: HostTime(11_000),
            transition: Transition::Reset,
            elapsed: Duration::ZERO,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            RecordedEvent::Playback(PlaybackEvent {
                transition: Transition::Start,
                ..
            })
        ));
        assert_eq!(events[1], RecordedEvent::Layout(sample_layout()));
        assert!(matches!(events[2], RecordedEvent::Frame(_)));
        assert!(matches!(
            events[3],
            RecordedEvent::Playback(PlaybackEvent {
                transition: Transition::Reset,
                at: HostTime(11_000),
                ..
            })
        ));
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_frame(&sample_frame());
        rec.on_frame(&sample_frame());
        let bytes = rec.into_bytes();
        let cut = &bytes[..bytes.len() - 3];
        assert_eq!(decode(cut).count(), 1);
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn unknown_tag_stops_decoding() {
        assert_eq!(decode(&[0xEE, 1, 2, 3]).count(), 0);
    }
}
