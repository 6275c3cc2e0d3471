//! Literal Value Printing
//!
//! Every literal prints in a form the lexer decodes back to the same width:
//! doubles always carry a `.` or an exponent, floats end in `f`, and longs
//! small enough to pass for an int print as hex longs.
//!
//! The exception is a float NaN. Arithmetic never yields a float, so it has
//! no float spelling and prints as the double NaN expression.

use std::fmt::Write;

use el_ir::Literal;

use super::Printer;
use crate::emitter::Emitter;

impl<E: Emitter> Printer<'_, E> {
    pub(super) fn literal(&mut self, value: &Literal) {
        match value {
            Literal::Null => self.out.emit("null"),
            Literal::Bool(true) => self.out.emit("true"),
            Literal::Bool(false) => self.out.emit("false"),
            Literal::Int(v) => self.display(v),
            Literal::Long(v) => self.long(*v),
            Literal::BigInt(v) => self.display(v),
            Literal::Float(v) => self.float(*v),
            Literal::Double(v) => self.double(*v),
            Literal::Str(s) => self.string(s),
        }
    }

    fn display(&mut self, value: &impl std::fmt::Display) {
        let mut buf = String::new();
        // Writing to a String is infallible
        let _ = write!(buf, "{value}");
        self.out.emit(&buf);
    }

    fn long(&mut self, v: i64) {
        if i32::try_from(v).is_err() {
            self.display(&v);
            return;
        }
        let mut buf = String::new();
        let sign = if v < 0 { "-" } else { "" };
        // Writing to a String is infallible
        let _ = write!(buf, "{sign}0x{:X}L", v.unsigned_abs());
        self.out.emit(&buf);
    }

    fn double(&mut self, v: f64) {
        if v.is_nan() {
            self.out.emit("(0.0 / 0.0)");
        } else if v.is_infinite() {
            self.out.emit(if v > 0.0 { "1e999" } else { "-1e999" });
        } else {
            let mut buf = String::new();
            // Debug keeps a `.0` on integral values and switches to an
            // exponent for very large or small magnitudes.
            let _ = write!(buf, "{v:?}");
            self.out.emit(&buf);
        }
    }

    fn float(&mut self, v: f32) {
        if v.is_nan() {
            self.double(f64::NAN);
        } else if v.is_infinite() {
            self.out.emit(if v > 0.0 { "1e99f" } else { "-1e99f" });
        } else {
            let mut buf = String::new();
            // Writing to a String is infallible
            let _ = write!(buf, "{v:?}f");
            self.out.emit(&buf);
        }
    }

    fn string(&mut self, s: &str) {
        self.out.emit_char('\'');
        for c in s.chars() {
            match c {
                '\'' => self.out.emit("\\'"),
                '\\' => self.out.emit("\\\\"),
                '\n' => self.out.emit("\\n"),
                '\t' => self.out.emit("\\t"),
                '\r' => self.out.emit("\\r"),
                '\u{C}' => self.out.emit("\\f"),
                '\u{8}' => self.out.emit("\\b"),
                c if c.is_control() => {
                    let mut buf = String::new();
                    // Writing to a String is infallible
                    let _ = write!(buf, "\\u{:04X}", u32::from(c));
                    self.out.emit(&buf);
                }
                c => self.out.emit_char(c),
            }
        }
        self.out.emit_char('\'');
    }
}
