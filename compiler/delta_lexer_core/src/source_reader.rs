//! Two-buffer sentinel reader.
//!
//! # Layout
//!
//! ```text
//! buffer A: [b0, b1, ..., b(N-2), 0x00]     buffer B: [..., 0x00]
//!            ^lexeme_begin   ^forward                          ^
//!                                               sentinel at index `filled`
//! ```
//!
//! Each buffer holds at most `N - 1` input bytes followed by the sentinel.
//! Reading a byte only compares the next byte against the sentinel; the
//! slow path runs when the comparison hits and decides between:
//!
//! - end of input (the sentinel closes a short buffer, or the input is
//!   exhausted and no pushback re-exposed the other buffer),
//! - switching to the other buffer, refilling it unless a pushback had
//!   returned into the current one (its successor then still holds the
//!   bytes that follow).
//!
//! A sentinel byte inside real input is told apart by position: it is
//! only a sentinel at index `filled` of its buffer.
//!
//! # Pushback
//!
//! Pushback can reach every byte still loaded: at least `N - 1` bytes, the
//! whole previous buffer. Going further returns
//! [`ReaderError::PushbackLimit`].

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Byte closing the live part of each buffer.
pub const SENTINEL: u8 = 0x00;

/// Buffer size used when nothing else is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Smallest usable buffer: one input byte plus the sentinel.
pub const MIN_BUFFER_SIZE: usize = 2;

/// Reader configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Size of each of the two buffers, sentinel included.
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ReaderConfig {
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        ReaderConfig { buffer_size }
    }

    pub fn validate(&self) -> Result<(), ReaderError> {
        if self.buffer_size < MIN_BUFFER_SIZE {
            return Err(ReaderError::InvalidBufferSize(self.buffer_size));
        }
        Ok(())
    }
}

/// Failure opening or driving a [`SourceReader`].
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("cannot open `{}`: {source}", path.display())]
    FileInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot map `{}` into memory: {source}", path.display())]
    MapFailed {
        path: PathBuf,
        #[source]
        source: mmap_rs::Error,
    },
    #[error("`{}` does not fit in the address space", path.display())]
    TooLarge { path: PathBuf },
    #[error("buffer size {0} is below the minimum of {MIN_BUFFER_SIZE}")]
    InvalidBufferSize(usize),
    #[error("pushback reached past the oldest loaded byte")]
    PushbackLimit,
}

/// Where the input bytes live.
enum Backing {
    Mapped(mmap_rs::Mmap),
    Owned(Box<[u8]>),
}

impl Backing {
    #[inline]
    fn bytes(&self) -> &[u8] {
        match self {
            Backing::Mapped(map) => map.as_slice(),
            Backing::Owned(bytes) => bytes,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Half {
    A,
    B,
}

impl Half {
    #[inline]
    fn idx(self) -> usize {
        match self {
            Half::A => 0,
            Half::B => 1,
        }
    }

    #[inline]
    fn other(self) -> Half {
        match self {
            Half::A => Half::B,
            Half::B => Half::A,
        }
    }
}

/// A position inside one of the two buffers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Mark {
    half: Half,
    index: usize,
}

/// Byte stream over a file or an in-memory source with bounded pushback.
pub struct SourceReader {
    name: String,
    backing: Backing,
    /// Next input byte to load into a buffer.
    input_pos: usize,
    buffers: [Box<[u8]>; 2],
    /// Number of input bytes in each buffer; the sentinel sits right after.
    filled: [usize; 2],
    buffer_size: usize,
    forward: Mark,
    lexeme_begin: Mark,
    lexeme_len: usize,
    /// Input offset of `forward` and of `lexeme_begin`.
    offset: usize,
    lexeme_offset: usize,
    /// Loaded bytes before `forward` that pushback may re-expose.
    behind: usize,
    /// Set when the buffer holding `lexeme_begin` was refilled.
    lexeme_clobbered: bool,
    /// Set when pushback crossed back into the previous buffer, whose
    /// successor must then not be refilled.
    returned_to_previous: bool,
    eof: bool,
}

impl SourceReader {
    /// Map the file at `path` and prime the first buffer.
    pub fn open(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self, ReaderError> {
        let path = path.as_ref();
        config.validate()?;

        let inaccessible = |source| ReaderError::FileInaccessible {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(inaccessible)?;
        let len = file.metadata().map_err(inaccessible)?.len();
        let len = usize::try_from(len).map_err(|_| ReaderError::TooLarge {
            path: path.to_path_buf(),
        })?;

        let backing = if len == 0 {
            Backing::Owned(Box::default())
        } else {
            Backing::Mapped(map_file(&file, len, path)?)
        };

        debug!(path = %path.display(), len, "opened source file");
        Ok(Self::with_backing(path.display().to_string(), backing, config))
    }

    /// Read `bytes` through the same buffers as a mapped file.
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        config: ReaderConfig,
    ) -> Result<Self, ReaderError> {
        config.validate()?;
        let backing = Backing::Owned(bytes.into().into_boxed_slice());
        Ok(Self::with_backing(name.into(), backing, config))
    }

    fn with_backing(name: String, backing: Backing, config: ReaderConfig) -> Self {
        let n = config.buffer_size;
        let start = Mark {
            half: Half::A,
            index: 0,
        };
        let mut reader = SourceReader {
            name,
            backing,
            input_pos: 0,
            buffers: [
                vec![SENTINEL; n].into_boxed_slice(),
                vec![SENTINEL; n].into_boxed_slice(),
            ],
            filled: [0, 0],
            buffer_size: n,
            forward: start,
            lexeme_begin: start,
            lexeme_len: 0,
            offset: 0,
            lexeme_offset: 0,
            behind: 0,
            lexeme_clobbered: false,
            returned_to_previous: false,
            eof: false,
        };
        reader.fill(Half::A);
        reader.lexeme_clobbered = false;
        reader.eof = reader.filled[0] == 0;
        reader
    }

    /// Load up to `N - 1` input bytes into `half`, then the sentinel.
    fn fill(&mut self, half: Half) {
        let input = self.backing.bytes();
        let count = (self.buffer_size - 1).min(input.len() - self.input_pos);
        let buf = &mut self.buffers[half.idx()];
        buf[..count].copy_from_slice(&input[self.input_pos..self.input_pos + count]);
        buf[count] = SENTINEL;
        self.filled[half.idx()] = count;
        self.input_pos += count;
        self.lexeme_clobbered |= half == self.lexeme_begin.half;
        trace!(source = %self.name, ?half, count, "refilled buffer");
    }

    /// Name of the source (the file path, or the name given to `from_bytes`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Sticky end-of-input flag; cleared only by [`push_back`](Self::push_back).
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Bytes read since the last [`mark_token_start`](Self::mark_token_start).
    #[inline]
    pub fn lexeme_len(&self) -> usize {
        self.lexeme_len
    }

    /// Return the byte under `forward` and advance past it.
    ///
    /// At end of input this returns [`SENTINEL`] and stays put.
    pub fn next_char(&mut self) -> u8 {
        if self.eof {
            return SENTINEL;
        }

        let byte = self.buffers[self.forward.half.idx()][self.forward.index];
        self.forward.index += 1;
        self.offset += 1;
        self.lexeme_len += 1;
        self.behind += 1;

        let Mark { half, index } = self.forward;
        if self.buffers[half.idx()][index] == SENTINEL && index == self.filled[half.idx()] {
            self.cross_sentinel();
        }
        byte
    }

    #[cold]
    fn cross_sentinel(&mut self) {
        let at_buffer_end = self.forward.index == self.buffer_size - 1;
        let input_done = self.input_pos == self.backing.bytes().len();

        if !at_buffer_end || (input_done && !self.returned_to_previous) {
            trace!(source = %self.name, offset = self.offset, "reached end of input");
            self.eof = true;
            return;
        }

        let next = self.forward.half.other();
        if self.returned_to_previous {
            self.returned_to_previous = false;
        } else {
            self.fill(next);
        }
        self.forward = Mark {
            half: next,
            index: 0,
        };
        self.behind = self.buffer_size - 1;
    }

    /// Move `forward` one byte back and clear the end-of-input flag.
    ///
    /// Crossing into the previous buffer lands on its last input byte and
    /// keeps the buffer after it from being refilled.
    pub fn push_back(&mut self) -> Result<(), ReaderError> {
        if self.behind == 0 {
            return Err(ReaderError::PushbackLimit);
        }
        self.behind -= 1;
        self.offset -= 1;
        self.lexeme_len = self.lexeme_len.saturating_sub(1);
        self.eof = false;

        if self.forward.index == 0 {
            self.returned_to_previous = true;
            self.forward = Mark {
                half: self.forward.half.other(),
                index: self.buffer_size - 2,
            };
        } else {
            self.forward.index -= 1;
        }
        Ok(())
    }

    /// Start the next token at `forward`.
    pub fn mark_token_start(&mut self) {
        self.lexeme_begin = self.forward;
        self.lexeme_offset = self.offset;
        self.lexeme_len = 0;
        self.lexeme_clobbered = false;
    }

    /// Copy the bytes from `lexeme_begin` up to (excluding) `forward`.
    ///
    /// The walk jumps from the end of one buffer to the start of the other.
    /// A lexeme whose first buffer was refilled in the meantime is copied
    /// from the source itself.
    pub fn extract_lexeme(&self) -> Vec<u8> {
        if self.lexeme_clobbered {
            debug!(
                source = %self.name,
                len = self.offset - self.lexeme_offset,
                "lexeme outgrew the buffers; copying from the source"
            );
            return self.backing.bytes()[self.lexeme_offset..self.offset].to_vec();
        }

        let mut out = Vec::with_capacity(self.lexeme_len);
        let mut mark = self.lexeme_begin;
        // Two full buffers bound the walk.
        for _ in 0..2 * self.buffer_size {
            if mark == self.forward {
                break;
            }
            if mark.index == self.buffer_size - 1 {
                mark = Mark {
                    half: mark.half.other(),
                    index: 0,
                };
                continue;
            }
            out.push(self.buffers[mark.half.idx()][mark.index]);
            mark.index += 1;
        }
        out
    }

    /// Release the mapping and both buffers.
    pub fn close(self) {
        debug!(source = %self.name, "closed source");
    }
}

impl std::fmt::Debug for SourceReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceReader")
            .field("name", &self.name)
            .field("len", &self.backing.bytes().len())
            .field("offset", &self.offset)
            .field("buffer_size", &self.buffer_size)
            .field("eof", &self.eof)
            .finish_non_exhaustive()
    }
}

#[allow(unsafe_code, reason = "memory-mapping the input file")]
fn map_file(file: &File, len: usize, path: &Path) -> Result<mmap_rs::Mmap, ReaderError> {
    let map_failed = |source| ReaderError::MapFailed {
        path: path.to_path_buf(),
        source,
    };
    // SAFETY: the mapping is read-only, starts at offset 0, spans the length
    // reported by the file's metadata, and never leaves this reader.
    unsafe {
        mmap_rs::MmapOptions::new(len)
            .map_err(map_failed)?
            .with_file(file, 0)
            .map()
            .map_err(map_failed)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
