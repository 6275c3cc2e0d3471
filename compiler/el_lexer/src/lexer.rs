//! Pull lexer.
//!
//! [`Lexer::next_token`] advances one token; accessors expose the current
//! token's kind, lexeme, position and decoded value. Identifier and keyword
//! text is interned into the lexer's own [`SymbolTable`], which the parser
//! takes over with [`Lexer::into_symbols`] once it is done.

use el_ir::{Literal, Name, Span, SymbolTable, Token, TokenKind};

use crate::cook_escape::{cook_quoted, Quote};
use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::LexError;
use crate::number;

pub struct Lexer<'src> {
    source: &'src str,
    cursor: Cursor<'src>,
    kind: TokenKind,
    start: usize,
    end: usize,
    name: Name,
    /// Cooked text of the current string token. Owned by this lexer only.
    string: String,
    symbols: SymbolTable,
}

impl<'src> Lexer<'src> {
    /// Create a lexer with a fresh symbol table. Call
    /// [`next_token`](Self::next_token) to load the first token.
    pub fn new(source: &'src str) -> Self {
        Self::with_symbols(source, SymbolTable::new())
    }

    pub fn with_symbols(source: &'src str, symbols: SymbolTable) -> Self {
        Lexer {
            source,
            cursor: Cursor::new(source),
            kind: TokenKind::Eof,
            start: 0,
            end: 0,
            name: Name::EMPTY,
            string: String::new(),
            symbols,
        }
    }

    /// Advance to the next token.
    ///
    /// Illegal characters become [`TokenKind::Error`] tokens. Malformed
    /// literals are reported as `Err`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.string.clear();
        self.name = Name::EMPTY;
        self.cursor.eat_while(is_whitespace);

        let start = self.cursor.pos();
        self.start = start;
        let kind = match self.cursor.current() {
            None => TokenKind::Eof,
            Some(c) if is_ident_start(c) => self.scan_ident(start),
            Some(c) if c.is_ascii_digit() => self.scan_number(start)?,
            Some('\'') => {
                self.cursor.bump();
                cook_quoted(&mut self.cursor, Quote::Single, &mut self.string)?;
                TokenKind::String
            }
            Some('"') => {
                self.cursor.bump();
                cook_quoted(&mut self.cursor, Quote::Double, &mut self.string)?;
                TokenKind::Alias
            }
            Some(c) => {
                self.cursor.bump();
                self.scan_operator(c)
            }
        };

        self.kind = kind;
        self.end = self.cursor.pos();
        Ok(self.token())
    }

    fn scan_ident(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        self.name = self.symbols.intern(text);
        keywords::lookup(text).unwrap_or(TokenKind::Ident)
    }

    fn scan_number(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let cursor = &mut self.cursor;

        if cursor.current() == Some('0') && matches!(cursor.peek(), Some('x' | 'X')) {
            cursor.bump();
            cursor.bump();
            let digits = cursor.pos();
            cursor.eat_while(|c| c.is_ascii_hexdigit());
            if cursor.pos() == digits {
                return Err(LexError::malformed_number(
                    span(start, cursor.pos()),
                    cursor.slice_from(start),
                ));
            }
            return Ok(if cursor.eat('L') || cursor.eat('l') {
                TokenKind::HexLong
            } else {
                TokenKind::Hex
            });
        }

        cursor.eat_while(|c| c.is_ascii_digit());
        let mut floating = false;

        // `a[0].b` must stay an index followed by a property, so a dot only
        // starts a fraction when a digit follows it.
        if cursor.current() == Some('.') && cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            cursor.bump();
            cursor.eat_while(|c| c.is_ascii_digit());
            floating = true;
        }

        if matches!(cursor.current(), Some('e' | 'E')) {
            cursor.bump();
            if matches!(cursor.current(), Some('+' | '-')) {
                cursor.bump();
            }
            let digits = cursor.pos();
            cursor.eat_while(|c| c.is_ascii_digit());
            if cursor.pos() == digits {
                return Err(LexError::malformed_number(
                    span(start, cursor.pos()),
                    cursor.slice_from(start),
                ));
            }
            floating = true;
        }

        Ok(if !floating {
            TokenKind::Int
        } else if cursor.eat('f') || cursor.eat('F') {
            TokenKind::Float
        } else {
            TokenKind::Double
        })
    }

    fn scan_operator(&mut self, first: char) -> TokenKind {
        let cursor = &mut self.cursor;
        match first {
            '+' if cursor.eat('=') => TokenKind::PlusEq,
            '+' if cursor.eat('+') => TokenKind::PlusPlus,
            '+' => TokenKind::Plus,
            '-' if cursor.eat('=') => TokenKind::MinusEq,
            '-' if cursor.eat('-') => TokenKind::MinusMinus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '~' => TokenKind::Tilde,
            '?' => TokenKind::Question,
            '&' if cursor.eat('&') => TokenKind::AmpAmp,
            '&' => TokenKind::Amp,
            '|' if cursor.eat('|') => TokenKind::PipePipe,
            '|' => TokenKind::Pipe,
            '=' if cursor.eat('=') => TokenKind::EqEq,
            '=' => TokenKind::Eq,
            '!' if cursor.eat('=') => TokenKind::BangEq,
            '!' => TokenKind::Bang,
            '<' if cursor.eat('=') => {
                if cursor.eat('>') {
                    TokenKind::LtEqGt
                } else {
                    TokenKind::LtEq
                }
            }
            '<' if cursor.eat('>') => TokenKind::LtGt,
            '<' => TokenKind::Lt,
            '>' if cursor.eat('=') => TokenKind::GtEq,
            '>' => TokenKind::Gt,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            _ => TokenKind::Error,
        }
    }

    // === Current token ===

    #[inline]
    pub fn token(&self) -> Token {
        Token::new(self.kind, span(self.start, self.end))
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Raw source text of the current token.
    #[inline]
    pub fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.end]
    }

    /// 0-based byte offset of the current token.
    #[inline]
    pub fn position(&self) -> u32 {
        self.token().span.start
    }

    /// Interned text of the current identifier or keyword.
    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Cooked text of the current string or alias token.
    #[inline]
    pub fn string_value(&self) -> &str {
        &self.string
    }

    /// Value of the current `Int`, `Hex` or `HexLong` token.
    pub fn integer_value(&self) -> Result<Literal, LexError> {
        let text = self.lexeme();
        let decoded = match self.kind {
            TokenKind::Int => number::decode_integer(text),
            TokenKind::Hex => number::decode_hex(&text[2..], false),
            TokenKind::HexLong => {
                let value = number::decode_hex(&text[2..text.len() - 1], true);
                if value.is_none() {
                    return Err(LexError::number_out_of_range(self.token().span, text));
                }
                value
            }
            _ => None,
        };
        decoded.ok_or_else(|| LexError::malformed_number(self.token().span, text))
    }

    pub fn double_value(&self) -> Result<f64, LexError> {
        number::decode_double(self.lexeme())
            .ok_or_else(|| LexError::malformed_number(self.token().span, self.lexeme()))
    }

    pub fn float_value(&self) -> Result<f32, LexError> {
        number::decode_float(self.lexeme())
            .ok_or_else(|| LexError::malformed_number(self.token().span, self.lexeme()))
    }

    /// Decoded value of the current literal token, if it is one.
    pub fn literal_value(&self) -> Result<Option<Literal>, LexError> {
        Ok(Some(match self.kind {
            TokenKind::Int | TokenKind::Hex | TokenKind::HexLong => self.integer_value()?,
            TokenKind::Float => Literal::Float(self.float_value()?),
            TokenKind::Double => Literal::Double(self.double_value()?),
            TokenKind::String | TokenKind::Alias => Literal::Str(self.string.as_str().into()),
            TokenKind::Null => Literal::Null,
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            _ => return Ok(None),
        }))
    }

    // === Symbols ===

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    pub fn source(&self) -> &'src str {
        self.source
    }
}

/// Space, tab, CR, LF, form feed and backspace.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{C}' | '\u{8}')
}

#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

#[inline]
fn span(start: usize, end: usize) -> Span {
    Span::try_from_range(start..end).unwrap_or(Span::DUMMY)
}
