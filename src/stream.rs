//! Chunked repair over a bounded buffer.
//!
//! [`StreamRepairer`] accepts UTF-8 chunks and emits repaired JSON per
//! completed root value. A lightweight boundary tracker (container depth,
//! string/escape state, comment state) finds newlines that sit at the root
//! level; each segment between such newlines goes through the core repair
//! parser. The tracker never interprets content; all repair decisions stay
//! in the parser.

use std::io::Write;
use std::mem;

use crate::error::{RepairError, RepairErrorKind};
use crate::parser;

#[derive(Debug, Clone)]
pub struct StreamOptions {
    /// Maximum number of bytes buffered while waiting for a single root
    /// value to complete. Exceeding it fails with
    /// [`RepairErrorKind::BufferExceeded`].
    pub window_size: usize,
    /// Read granularity for callers that drive a reader in a loop (the CLI
    /// does); it has no effect on repair semantics.
    pub chunk_size: usize,
    /// Wrap all streamed values into a single JSON array instead of
    /// emitting them newline-separated.
    pub aggregate: bool,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            window_size: 65536,
            chunk_size: 65536,
            aggregate: false,
        }
    }
}

/// Incremental repairer. Feed text with [`push`](Self::push), finish with
/// [`flush`](Self::flush).
pub struct StreamRepairer {
    opts: StreamOptions,
    buf: String,
    /// Absolute input offset of `buf[0]`, for error positions.
    consumed: usize,
    /// Scan position inside `buf`; everything before it has been classified.
    scan: usize,
    depth: u32,
    in_string: bool,
    quote: u8,
    escaped: bool,
    in_line_comment: bool,
    in_block_comment: bool,
    block_comment_star: bool,
    emitted_any: bool,
}

impl StreamRepairer {
    pub fn new(opts: StreamOptions) -> Self {
        Self {
            opts,
            buf: String::new(),
            consumed: 0,
            scan: 0,
            depth: 0,
            in_string: false,
            quote: b'"',
            escaped: false,
            in_line_comment: false,
            in_block_comment: false,
            block_comment_star: false,
            emitted_any: false,
        }
    }

    /// Push a chunk and return any output completed by it.
    pub fn push(&mut self, chunk: &str) -> Result<Option<String>, RepairError> {
        self.buf.push_str(chunk);
        let mut out = String::new();
        while let Some(boundary) = self.scan_for_boundary() {
            let segment_start = self.consumed;
            let segment = self.buf[..boundary].to_string();
            self.buf.drain(..=boundary);
            self.consumed += boundary + 1;
            self.scan = 0;
            self.emit_segment(&segment, segment_start, &mut out)?;
        }
        if self.buf.len() > self.opts.window_size {
            return Err(RepairError::new(
                RepairErrorKind::BufferExceeded,
                self.consumed,
            ));
        }
        Ok(if out.is_empty() { None } else { Some(out) })
    }

    /// Repair whatever is still buffered and close the stream.
    pub fn flush(&mut self) -> Result<Option<String>, RepairError> {
        let mut out = String::new();
        let rest = mem::take(&mut self.buf);
        let rest_start = self.consumed;
        self.consumed += rest.len();
        self.scan = 0;
        self.emit_segment(&rest, rest_start, &mut out)?;
        if self.opts.aggregate && self.emitted_any {
            out.push(']');
        }
        // Leave the repairer ready for another stream.
        self.emitted_any = false;
        self.depth = 0;
        self.in_string = false;
        self.escaped = false;
        self.in_line_comment = false;
        self.in_block_comment = false;
        self.block_comment_star = false;
        Ok(if out.is_empty() { None } else { Some(out) })
    }

    /// [`push`](Self::push), but writing straight into `writer`.
    pub fn push_to_writer<W: Write>(&mut self, chunk: &str, writer: &mut W) -> std::io::Result<()> {
        match self.push(chunk) {
            Ok(Some(s)) => writer.write_all(s.as_bytes()),
            Ok(None) => Ok(()),
            Err(e) => Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        }
    }

    /// [`flush`](Self::flush), but writing straight into `writer`.
    pub fn flush_to_writer<W: Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        match self.flush() {
            Ok(Some(s)) => writer.write_all(s.as_bytes()),
            Ok(None) => Ok(()),
            Err(e) => Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        }
    }

    fn emit_segment(
        &mut self,
        segment: &str,
        segment_start: usize,
        out: &mut String,
    ) -> Result<(), RepairError> {
        if segment.trim_matches([' ', '\t', '\r', '\n']).is_empty() {
            return Ok(());
        }
        match parser::repair(segment) {
            Ok(repaired) => {
                if self.opts.aggregate {
                    out.push_str(if self.emitted_any { ",\n" } else { "[" });
                } else if self.emitted_any {
                    out.push('\n');
                }
                out.push_str(&repaired);
                self.emitted_any = true;
                Ok(())
            }
            // A segment holding only comments repairs to nothing; drop it.
            Err(e) if e.kind == RepairErrorKind::UnexpectedEnd => Ok(()),
            Err(e) => Err(RepairError::new(e.kind, segment_start + e.position)),
        }
    }

    /// Advance the boundary tracker and return the byte offset of the next
    /// root-level newline, if one is buffered. All state bytes are ASCII, so
    /// scanning bytes is UTF-8 safe.
    fn scan_for_boundary(&mut self) -> Option<usize> {
        let bytes = self.buf.as_bytes();
        let mut pos = self.scan;
        while pos < bytes.len() {
            let b = bytes[pos];
            if self.in_line_comment {
                if b == b'\n' {
                    self.in_line_comment = false;
                    if self.depth == 0 {
                        return Some(pos);
                    }
                }
                pos += 1;
                continue;
            }
            if self.in_block_comment {
                if self.block_comment_star && b == b'/' {
                    self.in_block_comment = false;
                }
                self.block_comment_star = b == b'*';
                pos += 1;
                continue;
            }
            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if b == b'\\' {
                    self.escaped = true;
                } else if b == self.quote {
                    self.in_string = false;
                }
                pos += 1;
                continue;
            }
            match b {
                b'"' | b'\'' => {
                    self.in_string = true;
                    self.quote = b;
                }
                b'{' | b'[' => self.depth += 1,
                b'}' | b']' => self.depth = self.depth.saturating_sub(1),
                b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                    self.in_line_comment = true;
                    pos += 2;
                    continue;
                }
                b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                    self.in_block_comment = true;
                    self.block_comment_star = false;
                    pos += 2;
                    continue;
                }
                b'\n' if self.depth == 0 => return Some(pos),
                _ => {}
            }
            pos += 1;
        }
        self.scan = pos;
        None
    }
}
