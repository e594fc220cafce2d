// SPDX-License-Identifier: PMPL-1.0-or-later

//! A2ML: the s-expression format content and site manifests are written in.
//!
//! A document is a single list whose head atom names its kind:
//!
//! ```text
//! (toc
//!   (section "news")
//!   (de "Neuigkeiten")
//!   (en "News"))
//! ```
//!
//! `#` starts a comment running to the end of the line. Strings are
//! double-quoted with `\n \r \t \b \f \" \\ \/ \uXXXX` escapes, which is what
//! [`quote`] emits, so anything this module renders parses back unchanged.

mod documents;
mod manifest;

pub use documents::{
    load_document, parse_dictionary, parse_document, parse_news, parse_toc, render_dictionary,
    render_news, render_toc, Document, DocumentKind,
};
pub use manifest::{Manifest, MANIFEST_FILE};

use anyhow::{anyhow, Result};

/// Quotes a string so the A2ML parser reads it back verbatim.
pub fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Sexpr {
    Atom(String),
    String(String),
    List(Vec<Sexpr>),
}

impl Sexpr {
    /// Text of an atom or string; `None` for lists.
    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            Sexpr::Atom(value) | Sexpr::String(value) => Some(value),
            Sexpr::List(_) => None,
        }
    }

    /// Splits `(head rest...)` into its head atom and the remaining items.
    pub(crate) fn as_form(&self) -> Option<(&str, &[Sexpr])> {
        match self {
            Sexpr::List(items) => match items.first() {
                Some(Sexpr::Atom(head)) => Some((head.as_str(), &items[1..])),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Parses a whole document: exactly one top-level expression.
pub(crate) fn parse_sexpr(input: &str) -> Result<Sexpr> {
    let mut parser = Parser::new(input);
    parser.parse_all()
}

/// Groups `(key value...)` forms by key, keeping first-seen key order.
pub(crate) fn gather_entries(entries: &[Sexpr]) -> Vec<(String, Vec<Vec<Sexpr>>)> {
    let mut grouped: Vec<(String, Vec<Vec<Sexpr>>)> = Vec::new();
    for entry in entries {
        if let Some((key, values)) = entry.as_form() {
            let values = values.to_vec();
            if let Some((_, bucket)) = grouped.iter_mut().find(|(existing, _)| existing == key) {
                bucket.push(values);
            } else {
                grouped.push((key.to_string(), vec![values]));
            }
        }
    }
    grouped
}

/// First scalar value of `key`, if present.
pub(crate) fn entry_text<'a>(
    entries: &'a [(String, Vec<Vec<Sexpr>>)],
    key: &str,
) -> Option<&'a str> {
    entries
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, groups)| groups.first())
        .and_then(|values| values.first())
        .and_then(Sexpr::text)
}

/// Every scalar value of the first `key` form, e.g. `(languages de en ru)`.
pub(crate) fn entry_texts<'a>(
    entries: &'a [(String, Vec<Vec<Sexpr>>)],
    key: &str,
) -> Option<Vec<&'a str>> {
    entries
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, groups)| groups.first())
        .map(|values| values.iter().filter_map(Sexpr::text).collect())
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch == Some('\n') {
            self.line += 1;
        }
        ch
    }

    fn error(&self, message: &str) -> anyhow::Error {
        anyhow!("line {}: {}", self.line, message)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.next();
                }
                Some('#') => {
                    while let Some(ch) = self.next() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn parse_all(&mut self) -> Result<Sexpr> {
        self.skip_whitespace();
        let expr = self.parse_expr()?;
        self.skip_whitespace();
        if self.peek().is_some() {
            Err(self.error("extra tokens after document"))
        } else {
            Ok(expr)
        }
    }

    fn parse_expr(&mut self) -> Result<Sexpr> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => self.parse_list(),
            Some('"') => self.parse_string(),
            Some(')') => Err(self.error("unexpected closing parenthesis")),
            Some(_) => self.parse_atom(),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_list(&mut self) -> Result<Sexpr> {
        let opened_at = self.line;
        self.next(); // '('
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(')') => {
                    self.next();
                    break;
                }
                Some(_) => items.push(self.parse_expr()?),
                None => return Err(anyhow!("line {}: unterminated list", opened_at)),
            }
        }
        Ok(Sexpr::List(items))
    }

    fn parse_string(&mut self) -> Result<Sexpr> {
        let opened_at = self.line;
        self.next(); // '"'
        let mut value = String::new();
        while let Some(ch) = self.next() {
            match ch {
                '"' => return Ok(Sexpr::String(value)),
                '\\' => match self.next() {
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some('b') => value.push('\u{8}'),
                    Some('f') => value.push('\u{c}'),
                    Some('u') => value.push(self.parse_unicode_escape()?),
                    Some(ch @ ('"' | '\\' | '/')) => value.push(ch),
                    Some(other) => {
                        return Err(self.error(&format!("unknown escape '\\{}'", other)))
                    }
                    None => break,
                },
                other => value.push(other),
            }
        }
        Err(anyhow!("line {}: unterminated string literal", opened_at))
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        let mut hex = String::with_capacity(4);
        for _ in 0..4 {
            match self.next() {
                Some(ch) if ch.is_ascii_hexdigit() => hex.push(ch),
                _ => return Err(self.error("malformed \\u escape")),
            }
        }
        let code = u32::from_str_radix(&hex, 16).map_err(|_| self.error("malformed \\u escape"))?;
        char::from_u32(code).ok_or_else(|| self.error("\\u escape is not a scalar value"))
    }

    fn parse_atom(&mut self) -> Result<Sexpr> {
        let mut value = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '(' || ch == ')' || ch == '"' {
                break;
            }
            value.push(ch);
            self.next();
        }
        if value.is_empty() {
            Err(self.error("unexpected token"))
        } else {
            Ok(Sexpr::Atom(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_forms_and_comments() {
        let tree = parse_sexpr(
            "# table of contents\n(toc\n  (section \"news\") # top\n  (de \"Neuigkeiten\"))\n",
        )
        .unwrap();
        let (head, items) = tree.as_form().unwrap();
        assert_eq!(head, "toc");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].as_form().unwrap().1[0].text(), Some("Neuigkeiten"));
    }

    #[test]
    fn quote_roundtrips_through_parser() {
        let original = "line one\n\t\"quoted\" \\ backslash \u{1} Новости";
        let parsed = parse_sexpr(&quote(original)).unwrap();
        assert_eq!(parsed, Sexpr::String(original.to_string()));
    }

    #[test]
    fn quote_keeps_backspace_and_form_feed() {
        for original in ["page\u{c}break", "a\u{8}b", "\u{8}\u{c}\r"] {
            let parsed = parse_sexpr(&quote(original)).unwrap();
            assert_eq!(parsed, Sexpr::String(original.to_string()));
        }
    }

    #[test]
    fn unknown_escape_is_rejected() {
        let err = parse_sexpr("(title \"a\\qb\")").unwrap_err();
        assert!(err.to_string().contains("unknown escape '\\q'"), "{}", err);
        assert_eq!(
            parse_sexpr(r#""a\/b""#).unwrap(),
            Sexpr::String("a/b".to_string())
        );
    }

    #[test]
    fn errors_report_line_numbers() {
        let err = parse_sexpr("(toc\n  (section \"news\"\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        let err = parse_sexpr("(a) (b)").unwrap_err();
        assert!(err.to_string().contains("extra tokens"));
        let err = parse_sexpr("(title \"open").unwrap_err();
        assert!(err.to_string().contains("unterminated string"));
    }

    #[test]
    fn gathers_repeated_keys() {
        let tree = parse_sexpr("(site (languages de en) (title x) (languages ru))").unwrap();
        let (_, items) = tree.as_form().unwrap();
        let entries = gather_entries(items);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.len(), 2);
        assert_eq!(entry_texts(&entries, "languages"), Some(vec!["de", "en"]));
        assert_eq!(entry_text(&entries, "title"), Some("x"));
        assert_eq!(entry_text(&entries, "missing"), None);
    }
}
