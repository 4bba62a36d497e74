//! Shard table ingestion.
//!
//! A documentation build emits its page search data as per-letter shard
//! tables: rows of nested arrays mapping an escaped key to a display label
//! and one or more links. Two concrete encodings occur in the wild and both
//! decode to the same [`Entry`] records here:
//!
//! - a plain JSON array of rows ([`parse_table`]);
//! - the script file the generator writes next to the HTML, a `var <name>=`
//!   prelude followed by the same arrays with single-quoted strings
//!   ([`parse_script`]).
//!
//! File I/O is the caller's business; both parsers consume text. Table
//! identity carries no meaning beyond sharding: feed any number of parsed
//! shards to one [`IndexBuilder`](crate::search::IndexBuilder) and it merges
//! them by key.

use serde_json::Value;

use crate::error::ShardError;
use crate::search::tokenize::normalize_key;
use crate::types::{Entry, Variant};

/// Parses one shard in JSON form into entries.
pub fn parse_table(text: &str) -> Result<Vec<Entry>, ShardError> {
    let table: Value = serde_json::from_str(text)?;
    entries_from_table(&table)
}

/// Parses one shard in generator script form into entries.
///
/// Accepts the `var <name>= [...]` prelude, single- or double-quoted
/// strings, and an optional trailing `;`.
pub fn parse_script(text: &str) -> Result<Vec<Entry>, ShardError> {
    let table = ScriptScanner::new(text).scan()?;
    entries_from_table(&table)
}

fn entries_from_table(table: &Value) -> Result<Vec<Entry>, ShardError> {
    let rows = table.as_array().ok_or(ShardError::NotATable)?;
    let entries: Vec<Entry> = rows
        .iter()
        .enumerate()
        .map(|(row, value)| entry_from_row(value, row))
        .collect::<Result<_, _>>()?;

    tracing::debug!("Parsed shard: {} rows", entries.len());
    Ok(entries)
}

/// Decodes one `[key, [label, link, ...]]` row.
///
/// The trailing string of a link is overloaded by the generator: with a
/// single link it classifies the page (the variant's group), with several
/// links it titles each sub-entry (the variant's label, under the root
/// group). A row without links decodes to an entry with no variants, left
/// for the builder's malformed-entry policy to judge.
fn entry_from_row(value: &Value, row: usize) -> Result<Entry, ShardError> {
    let malformed = || ShardError::MalformedRow { row };

    let [raw_key, body] = value.as_array().ok_or_else(malformed)?.as_slice() else {
        return Err(malformed());
    };
    let raw_key = raw_key.as_str().ok_or_else(malformed)?;
    let body = body.as_array().ok_or_else(malformed)?;
    let (label, links) = body.split_first().ok_or_else(malformed)?;
    let label = label.as_str().ok_or_else(malformed)?;

    let variants = if let [only] = links {
        let link = decode_link(only, row)?;
        vec![Variant::new(label, link.target, link.trailing.unwrap_or(""))]
    } else {
        links
            .iter()
            .map(|value| {
                let link = decode_link(value, row)?;
                Ok(Variant::new(link.trailing.unwrap_or(label), link.target, ""))
            })
            .collect::<Result<_, ShardError>>()?
    };

    Ok(Entry {
        key: decode_key(raw_key),
        variants,
    })
}

struct Link<'a> {
    target: &'a str,
    /// Last string after the target; interior numeric flags are ignored.
    trailing: Option<&'a str>,
}

fn decode_link(value: &Value, row: usize) -> Result<Link<'_>, ShardError> {
    let parts = value
        .as_array()
        .ok_or(ShardError::MalformedRow { row })?
        .as_slice();
    let (first, rest) = parts
        .split_first()
        .ok_or(ShardError::MissingTarget { row })?;
    let target = first.as_str().ok_or(ShardError::MissingTarget { row })?;
    let trailing = rest.iter().rev().find_map(Value::as_str);

    Ok(Link { target, trailing })
}

/// Decodes a generator-escaped raw key into normalized key form.
///
/// Raw keys look like `eigen_20and_20multi_20threading_2`: a trailing
/// `_<decimal>` ordinal disambiguates repeats within a shard and is
/// stripped; `_xx` (two lowercase hex digits) escapes the character with
/// that code. The decoded text then goes through
/// [`normalize_key`], so escaped whitespace re-joins as `_`.
fn decode_key(raw: &str) -> String {
    let stem = strip_ordinal(raw);
    let chars: Vec<char> = stem.chars().collect();
    let mut decoded = String::with_capacity(stem.len());

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '_'
            && i + 2 < chars.len()
            && let (Some(hi), Some(lo)) = (hex_digit(chars[i + 1]), hex_digit(chars[i + 2]))
            && let Some(c) = char::from_u32(hi * 16 + lo)
        {
            decoded.push(c);
            i += 3;
        } else {
            decoded.push(chars[i]);
            i += 1;
        }
    }

    normalize_key(&decoded)
}

fn strip_ordinal(raw: &str) -> &str {
    match raw.rsplit_once('_') {
        Some((stem, ordinal))
            if !stem.is_empty()
                && !ordinal.is_empty()
                && ordinal.bytes().all(|b| b.is_ascii_digit()) =>
        {
            stem
        }
        _ => raw,
    }
}

/// Escapes are lowercase hex only; `_F0` stays literal.
fn hex_digit(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='f' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

/// Minimal scanner for the script form: nested arrays of strings and
/// integers after a `var <name>=` prelude, optionally ending in `;`.
struct ScriptScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ScriptScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn scan(mut self) -> Result<Value, ShardError> {
        // Everything before the first bracket is the assignment prelude.
        self.pos = self.text.find('[').unwrap_or(self.text.len());

        let table = self.value()?;

        self.skip_whitespace();
        if self.peek() == Some(';') {
            self.advance();
            self.skip_whitespace();
        }
        match self.peek() {
            None => Ok(table),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn value(&mut self) -> Result<Value, ShardError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.ended()),
            Some('[') => self.array(),
            Some('\'' | '"') => self.string(),
            Some(c) if c.is_ascii_digit() || c == '-' => self.number(),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn array(&mut self) -> Result<Value, ShardError> {
        self.advance(); // '['
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.ended()),
                Some(']') => {
                    self.advance();
                    break;
                }
                _ => {}
            }

            items.push(self.value()?);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.ended()),
                Some(',') => self.advance(),
                Some(']') => {
                    self.advance();
                    break;
                }
                Some(c) => return Err(self.unexpected(c)),
            }
        }

        Ok(Value::Array(items))
    }

    fn string(&mut self) -> Result<Value, ShardError> {
        let start = self.pos;
        let quote = self.peek().expect("caller saw the opening quote");
        self.advance();

        let mut text = String::new();
        loop {
            let Some(c) = self.peek() else {
                return Err(ShardError::UnterminatedString { offset: start });
            };
            self.advance();

            if c == quote {
                return Ok(Value::String(text));
            }
            if c != '\\' {
                text.push(c);
                continue;
            }

            let Some(escaped) = self.peek() else {
                return Err(ShardError::UnterminatedString { offset: start });
            };
            self.advance();
            match escaped {
                'n' => text.push('\n'),
                't' => text.push('\t'),
                'r' => text.push('\r'),
                'u' => text.push(self.unicode_escape()?),
                other => text.push(other),
            }
        }
    }

    fn unicode_escape(&mut self) -> Result<char, ShardError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let Some(c) = self.peek() else {
                return Err(self.ended());
            };
            let digit = c.to_digit(16).ok_or_else(|| self.unexpected(c))?;
            self.advance();
            code = code * 16 + digit;
        }
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn number(&mut self) -> Result<Value, ShardError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        let number: i64 = self.text[start..self.pos].parse().map_err(|_| {
            ShardError::Script {
                found: '-',
                offset: start,
            }
        })?;
        Ok(Value::from(number))
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn unexpected(&self, found: char) -> ShardError {
        ShardError::Script {
            found,
            offset: self.pos,
        }
    }

    fn ended(&self) -> ShardError {
        ShardError::UnexpectedEnd { offset: self.pos }
    }
}
