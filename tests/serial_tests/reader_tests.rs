//! Tests for the Line Reader
//!
//! These tests verify:
//! - Exact delivery of lines shorter than the buffer
//! - Truncation, overrun flag, and true length for long lines
//! - Scratch state does not leak between lines
//! - Polling through "no data yet" and stopping on a closed source

use std::collections::VecDeque;
use std::io::{self, Cursor, ErrorKind, Read};
use std::time::Duration;

use serialcmd::serial::{ByteSource, LineReader, Poll, StreamSource};
use serialcmd::{Config, SerialError};

// =============================================================================
// Helper Functions
// =============================================================================

/// Replays a fixed sequence of polls, then reports the source closed
struct ScriptedSource {
    events: VecDeque<Poll>,
    polls: usize,
}

impl ScriptedSource {
    fn bytes(data: &[u8]) -> Self {
        Self::events(data.iter().map(|&b| Poll::Byte(b)).collect())
    }

    fn events(events: Vec<Poll>) -> Self {
        Self {
            events: events.into(),
            polls: 0,
        }
    }
}

impl ByteSource for ScriptedSource {
    fn poll_byte(&mut self) -> io::Result<Poll> {
        self.polls += 1;
        Ok(self.events.pop_front().unwrap_or(Poll::Closed))
    }
}

fn reader_for(data: &[u8], capacity: usize) -> LineReader<ScriptedSource> {
    LineReader::with_capacity(ScriptedSource::bytes(data), capacity, Duration::ZERO)
}

fn line_of(byte: u8, len: usize) -> Vec<u8> {
    let mut line = vec![byte; len];
    line.push(b'\n');
    line
}

// =============================================================================
// Basic Reading Tests
// =============================================================================

#[test]
fn test_read_short_line() {
    let mut reader = reader_for(b"hello\n", 128);

    let line = reader.read_line().unwrap();

    assert_eq!(line.bytes(), b"hello");
    assert_eq!(line.text(), "hello");
    assert_eq!(line.count(), 5);
    assert!(!line.is_overrun());
    assert!(!line.is_empty());
}

#[test]
fn test_read_empty_line() {
    let mut reader = reader_for(b"\n", 128);

    let line = reader.read_line().unwrap();

    assert!(line.is_empty());
    assert_eq!(line.count(), 0);
    assert!(line.bytes().is_empty());
    assert!(!line.is_overrun());
}

#[test]
fn test_read_multiple_lines_in_order() {
    let mut reader = reader_for(b"mac\nid\n\nstatus\n", 128);

    assert_eq!(reader.read_line().unwrap().text(), "mac");
    assert_eq!(reader.read_line().unwrap().text(), "id");
    assert!(reader.read_line().unwrap().is_empty());
    assert_eq!(reader.read_line().unwrap().text(), "status");
}

#[test]
fn test_carriage_return_is_kept_literally() {
    let mut reader = reader_for(b"id\r\n", 128);

    let line = reader.read_line().unwrap();

    assert_eq!(line.bytes(), b"id\r");
    assert_eq!(line.count(), 3);
}

#[test]
fn test_control_bytes_are_stored() {
    let mut reader = reader_for(b"a\x00b\x1bc\n", 128);

    let line = reader.read_line().unwrap();

    assert_eq!(line.bytes(), b"a\x00b\x1bc");
}

// =============================================================================
// Overrun Tests
// =============================================================================

#[test]
fn test_line_of_capacity_minus_one_fits() {
    let mut reader = reader_for(&line_of(b'a', 127), 128);

    let line = reader.read_line().unwrap();

    assert!(!line.is_overrun());
    assert_eq!(line.bytes().len(), 127);
    assert_eq!(line.count(), 127);
}

#[test]
fn test_line_of_capacity_overruns() {
    let mut reader = reader_for(&line_of(b'a', 128), 128);

    let line = reader.read_line().unwrap();

    assert!(line.is_overrun());
    assert_eq!(line.bytes().len(), 127);
    assert_eq!(line.count(), 128);
}

#[test]
fn test_overrun_reports_true_length() {
    let mut input = b"dec ".to_vec();
    input.extend(line_of(b'7', 296));
    let mut reader = reader_for(&input, 128);

    let line = reader.read_line().unwrap();

    assert!(line.is_overrun());
    assert_eq!(line.count(), 300);
    assert_eq!(line.bytes().len(), 127);
    assert!(line.bytes().starts_with(b"dec 777"));
}

#[test]
fn test_overrun_does_not_leak_into_next_line() {
    let mut input = line_of(b'x', 200);
    input.extend_from_slice(b"ok\n");
    let mut reader = reader_for(&input, 128);

    let first = reader.read_line().unwrap();
    let second = reader.read_line().unwrap();

    assert!(first.is_overrun());
    assert_eq!(second.bytes(), b"ok");
    assert_eq!(second.count(), 2);
    assert!(!second.is_overrun());
}

#[test]
fn test_consecutive_overruns_hold_only_their_own_bytes() {
    let mut input = line_of(b'x', 200);
    input.extend(line_of(b'y', 150));
    let mut reader = reader_for(&input, 128);

    let _ = reader.read_line().unwrap();
    let second = reader.read_line().unwrap();

    assert!(second.is_overrun());
    assert_eq!(second.count(), 150);
    assert!(second.bytes().iter().all(|&b| b == b'y'));
}

#[test]
fn test_small_capacity_bounds() {
    let mut reader = reader_for(b"abcdef\nab\nabc\n", 4);

    let long = reader.read_line().unwrap();
    assert!(long.is_overrun());
    assert_eq!(long.bytes(), b"abc");
    assert_eq!(long.count(), 6);

    let short = reader.read_line().unwrap();
    assert!(!short.is_overrun());
    assert_eq!(short.bytes(), b"ab");

    let exact = reader.read_line().unwrap();
    assert!(!exact.is_overrun());
    assert_eq!(exact.bytes(), b"abc");
}

#[test]
fn test_length_invariants_across_sizes() {
    let capacity = 32;
    for len in 0..100 {
        let mut reader = reader_for(&line_of(b'z', len), capacity);
        let line = reader.read_line().unwrap();

        assert_eq!(line.count(), len, "len {}", len);
        assert_eq!(line.is_overrun(), len > capacity - 1, "len {}", len);
        assert_eq!(line.bytes().len(), len.min(capacity - 1), "len {}", len);
    }
}

// =============================================================================
// Polling Tests
// =============================================================================

#[test]
fn test_pending_is_retried_until_newline() {
    let source = ScriptedSource::events(vec![
        Poll::Pending,
        Poll::Byte(b'h'),
        Poll::Pending,
        Poll::Pending,
        Poll::Byte(b'i'),
        Poll::Byte(b'\n'),
    ]);
    let mut reader = LineReader::with_capacity(source, 128, Duration::ZERO);

    let line = reader.read_line().unwrap();

    assert_eq!(line.bytes(), b"hi");
    assert_eq!(reader.source_mut().polls, 6);
}

#[test]
fn test_closed_source_disconnects() {
    let mut reader = reader_for(b"partial", 128);

    let result = reader.read_line();

    assert!(matches!(result, Err(SerialError::Disconnected)));
}

#[test]
fn test_closed_after_complete_line() {
    let mut reader = reader_for(b"id\n", 128);

    assert_eq!(reader.read_line().unwrap().text(), "id");
    assert!(matches!(reader.read_line(), Err(SerialError::Disconnected)));
}

// =============================================================================
// Stream Source Tests
// =============================================================================

/// Reader that reports a timeout before every byte
struct TimeoutReader {
    data: VecDeque<u8>,
    timed_out: bool,
}

impl Read for TimeoutReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.timed_out {
            self.timed_out = true;
            return Err(io::Error::new(ErrorKind::TimedOut, "no data"));
        }
        self.timed_out = false;
        match self.data.pop_front() {
            Some(byte) => {
                buf[0] = byte;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[test]
fn test_stream_source_reads_cursor() {
    let config = Config::builder().read_retry_delay_ms(0).build().unwrap();
    let source = StreamSource::new(Cursor::new(b"mac\nstatus\n".to_vec()));
    let mut reader = LineReader::new(source, &config);

    assert_eq!(reader.capacity(), 128);
    assert_eq!(reader.read_line().unwrap().text(), "mac");
    assert_eq!(reader.read_line().unwrap().text(), "status");
    assert!(matches!(reader.read_line(), Err(SerialError::Disconnected)));
}

#[test]
fn test_stream_source_maps_timeouts_to_pending() {
    let mut source = StreamSource::new(TimeoutReader {
        data: b"a".iter().copied().collect(),
        timed_out: false,
    });

    assert_eq!(source.poll_byte().unwrap(), Poll::Pending);
    assert_eq!(source.poll_byte().unwrap(), Poll::Byte(b'a'));
    assert_eq!(source.poll_byte().unwrap(), Poll::Pending);
    assert_eq!(source.poll_byte().unwrap(), Poll::Closed);
}

#[test]
fn test_reader_polls_through_timeouts() {
    let source = StreamSource::new(TimeoutReader {
        data: b"dec 5\n".iter().copied().collect(),
        timed_out: false,
    });
    let mut reader = LineReader::with_capacity(source, 128, Duration::ZERO);

    assert_eq!(reader.read_line().unwrap().text(), "dec 5");
}

#[test]
fn test_stream_source_propagates_hard_errors() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "gone"))
        }
    }

    let mut reader = LineReader::with_capacity(StreamSource::new(Broken), 128, Duration::ZERO);

    assert!(matches!(reader.read_line(), Err(SerialError::Io(_))));
}
