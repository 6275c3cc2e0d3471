//! Output Emitter
//!
//! Where printed text goes. The printer only ever appends.

use std::fmt;

/// Sink for printed fragments.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a single character.
    fn emit_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.emit(c.encode_utf8(&mut buf));
    }
}

/// In-memory emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the printed output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    #[inline]
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    #[inline]
    fn emit_char(&mut self, c: char) {
        self.buffer.push(c);
    }
}

/// Adapter that emits into any [`fmt::Write`], e.g. a `Formatter` inside a
/// `Display` impl. The first write error is kept and later writes are dropped.
pub struct FmtEmitter<'a, W: fmt::Write + ?Sized> {
    out: &'a mut W,
    result: fmt::Result,
}

impl<'a, W: fmt::Write + ?Sized> FmtEmitter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        FmtEmitter { out, result: Ok(()) }
    }

    pub fn finish(self) -> fmt::Result {
        self.result
    }
}

impl<W: fmt::Write + ?Sized> Emitter for FmtEmitter<'_, W> {
    fn emit(&mut self, text: &str) {
        if self.result.is_ok() {
            self.result = self.out.write_str(text);
        }
    }
}
