//! Byte-level I/O collaborators.
//!
//! The VM only talks to the outside world through [`ByteSource`] and
//! [`ByteSink`]. Neither can fail: end of input reads as `0`, which is
//! indistinguishable from a real zero byte.

/// Supplies bytes for the `Input` instruction.
pub trait ByteSource {
    /// Return the next byte, or `0` once the source is exhausted.
    fn read_byte(&mut self) -> u8;
}

/// Receives bytes from the `Output` instruction.
///
/// Implementations must make the byte visible before returning, since a
/// program may interleave output with blocking reads.
pub trait ByteSink {
    fn write_byte(&mut self, byte: u8);
}

impl<F> ByteSource for F
where
    F: FnMut() -> u8,
{
    fn read_byte(&mut self) -> u8 {
        self()
    }
}

impl<F> ByteSink for F
where
    F: FnMut(u8),
{
    fn write_byte(&mut self, byte: u8) {
        self(byte)
    }
}

#[cfg(any(feature = "std", test))]
mod stdio {
    use std::io::{self, ErrorKind, Read, Write};

    use super::{ByteSink, ByteSource};

    /// Adapts any [`Read`] into a [`ByteSource`].
    ///
    /// Read errors other than interruptions are logged and treated as end of
    /// input.
    #[derive(Debug)]
    pub struct ReadSource<R> {
        reader: R,
        exhausted: bool,
    }

    impl<R: Read> ReadSource<R> {
        pub fn new(reader: R) -> Self {
            Self {
                reader,
                exhausted: false,
            }
        }

        pub fn into_inner(self) -> R {
            self.reader
        }
    }

    impl<R: Read> ByteSource for ReadSource<R> {
        fn read_byte(&mut self) -> u8 {
            if self.exhausted {
                return 0;
            }
            let mut buf = [0u8; 1];
            loop {
                match self.reader.read(&mut buf) {
                    Ok(0) => {
                        tracing::debug!("input exhausted");
                        self.exhausted = true;
                        return 0;
                    }
                    Ok(_) => return buf[0],
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "input read failed, treating as end of input");
                        self.exhausted = true;
                        return 0;
                    }
                }
            }
        }
    }

    /// Adapts any [`Write`] into a [`ByteSink`], flushing after every byte.
    ///
    /// The first write error is kept and every later byte is dropped; callers
    /// check [`WriteSink::take_error`] once the run is over.
    #[derive(Debug)]
    pub struct WriteSink<W> {
        writer: W,
        error: Option<io::Error>,
    }

    impl<W: Write> WriteSink<W> {
        pub fn new(writer: W) -> Self {
            Self {
                writer,
                error: None,
            }
        }

        pub fn take_error(&mut self) -> Option<io::Error> {
            self.error.take()
        }

        pub fn into_inner(self) -> W {
            self.writer
        }
    }

    impl<W: Write> ByteSink for WriteSink<W> {
        fn write_byte(&mut self, byte: u8) {
            if self.error.is_some() {
                return;
            }
            let result = self
                .writer
                .write_all(&[byte])
                .and_then(|()| self.writer.flush());
            if let Err(e) = result {
                tracing::warn!(error = %e, "output write failed, dropping further output");
                self.error = Some(e);
            }
        }
    }
}

#[cfg(any(feature = "std", test))]
pub use stdio::{ReadSource, WriteSink};
