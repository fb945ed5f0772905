// LogLens - platform/fs.rs
//
// Streaming line reader for log files.
// At most `max_line_length + 1` bytes of a line are buffered; the rest of an
// over-long line is skipped in place. The file handle lives inside the
// iterator and is closed when the iterator is dropped.

use crate::core::model::SourceLine;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Lazy, single-pass sequence of trimmed lines from one file.
///
/// Yields `io::Result<SourceLine>` so a read failure part-way through reaches
/// the consumer instead of silently ending the sequence. Invalid UTF-8 is
/// replaced lossily rather than treated as an error.
#[derive(Debug)]
pub struct LineSource<R = File> {
    reader: BufReader<R>,
    path: PathBuf,
    max_line_length: usize,
    buf: Vec<u8>,
    failed: bool,
}

/// Open `path` for line-by-line reading with the given length cap.
///
/// Fails immediately if the file does not exist or cannot be opened.
pub fn read_lines(path: &Path, max_line_length: usize) -> io::Result<LineSource> {
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), max_line_length, "Opened log file");
    Ok(LineSource::from_reader(file, path, max_line_length))
}

impl<R: Read> LineSource<R> {
    /// Wrap any reader. `path` is only used for diagnostics.
    pub fn from_reader(reader: R, path: &Path, max_line_length: usize) -> Self {
        Self {
            reader: BufReader::new(reader),
            path: path.to_path_buf(),
            max_line_length,
            buf: Vec::new(),
            failed: false,
        }
    }

    /// Read one line, buffering no more than the cap plus one byte.
    fn read_line(&mut self) -> io::Result<Option<SourceLine>> {
        self.buf.clear();
        let limit = (self.max_line_length as u64).saturating_add(1);
        let read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)?;

        if read == 0 {
            return Ok(None);
        }

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated || (read as u64) < limit {
            let line = String::from_utf8_lossy(&self.buf);
            return Ok(Some(SourceLine::Text(line.trim().to_string())));
        }

        let skipped = self.skip_rest_of_line()?;
        self.buf.clear();
        self.buf.shrink_to_fit();
        Ok(Some(SourceLine::Oversized {
            bytes: read as u64 + skipped,
        }))
    }

    /// Consume bytes up to and including the next `\n` (or EOF) without
    /// keeping them. Returns the number of bytes before the terminator.
    fn skip_rest_of_line(&mut self) -> io::Result<u64> {
        let mut skipped = 0u64;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(skipped);
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.reader.consume(pos + 1);
                    return Ok(skipped + pos as u64);
                }
                None => {
                    let len = available.len();
                    self.reader.consume(len);
                    skipped += len as u64;
                }
            }
        }
    }
}

impl<R: Read> Iterator for LineSource<R> {
    type Item = io::Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        // A failed reader is not retried; the error has already been handed out.
        if self.failed {
            return None;
        }

        match self.read_line() {
            Ok(line) => line.map(Ok),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Read failed");
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::DEFAULT_MAX_LINE_LENGTH;
    use std::io::Cursor;

    fn source(input: &[u8], max: usize) -> LineSource<Cursor<Vec<u8>>> {
        LineSource::from_reader(Cursor::new(input.to_vec()), Path::new("mem.log"), max)
    }

    fn collect(input: &[u8]) -> Vec<SourceLine> {
        source(input, DEFAULT_MAX_LINE_LENGTH)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    fn text(lines: &[&str]) -> Vec<SourceLine> {
        lines.iter().map(|l| SourceLine::Text(l.to_string())).collect()
    }

    #[test]
    fn test_lines_are_trimmed() {
        assert_eq!(
            collect(b"  first  \r\n\tsecond\nthird"),
            text(&["first", "second", "third"])
        );
    }

    #[test]
    fn test_blank_lines_are_kept_as_empty() {
        assert_eq!(collect(b"a\n\n   \nb\n"), text(&["a", "", "", "b"]));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(
            collect(b"[t] INFO - caf\xe9\n"),
            text(&["[t] INFO - caf\u{FFFD}"])
        );
    }

    #[test]
    fn test_line_at_cap_is_kept() {
        let lines: Vec<SourceLine> = source(b"12345678\n12345678", 8)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, text(&["12345678", "12345678"]));
    }

    #[test]
    fn test_line_over_cap_is_reported_and_next_line_survives() {
        let lines: Vec<SourceLine> = source(b"123456789\nok\n123456789", 8)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(
            lines,
            vec![
                SourceLine::Oversized { bytes: 9 },
                SourceLine::Text("ok".to_string()),
                SourceLine::Oversized { bytes: 9 },
            ]
        );
    }

    #[test]
    fn test_multi_megabyte_line_keeps_buffer_bounded() {
        let max = 256;
        let mut input = vec![b'x'; 8 * 1024 * 1024];
        input.push(b'\n');
        input.extend_from_slice(b"[t] INFO - after\n");

        let mut lines = source(&input, max);
        assert_eq!(
            lines.next().unwrap().unwrap(),
            SourceLine::Oversized {
                bytes: 8 * 1024 * 1024
            }
        );
        assert!(
            lines.buf.capacity() <= 2 * (max + 1),
            "buffer grew to {} bytes",
            lines.buf.capacity()
        );
        assert_eq!(
            lines.next().unwrap().unwrap(),
            SourceLine::Text("[t] INFO - after".to_string())
        );
        assert!(lines.buf.capacity() <= 2 * (max + 1));
        assert!(lines.next().is_none());
    }

    struct FailAfterFirstLine {
        sent: bool,
    }

    impl Read for FailAfterFirstLine {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::Other, "device error"));
            }
            self.sent = true;
            let data = b"[t] INFO - ok\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_error_is_yielded_once() {
        let mut source = LineSource::from_reader(
            FailAfterFirstLine { sent: false },
            Path::new("bad.log"),
            DEFAULT_MAX_LINE_LENGTH,
        );
        assert_eq!(
            source.next().unwrap().unwrap(),
            SourceLine::Text("[t] INFO - ok".to_string())
        );
        assert!(source.next().unwrap().is_err());
        assert!(source.next().is_none());
    }

    #[test]
    fn test_missing_file_fails_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("absent.log"), DEFAULT_MAX_LINE_LENGTH).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "one\ntwo\n").unwrap();

        let lines: Vec<SourceLine> = read_lines(&path, DEFAULT_MAX_LINE_LENGTH)
            .unwrap()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, text(&["one", "two"]));
    }
}
