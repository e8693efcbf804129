use super::{
    comments::strip_comments,
    counts::CategoryCounts,
    error::LexError,
    keywords::{ALL_KEYWORDS, OPERATORS, PUNCTUATION},
    token::{Token, TokenKind, TokenType},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref KEYWORD_REGEX: Regex = keyword_regex(ALL_KEYWORDS).unwrap();
    static ref KEYWORD_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    // Everything after the keyword matcher, in priority order.
    static ref TOKEN_PATTERNS: Vec<(Regex, TokenType)> = vec![
        (
            Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*\b").unwrap(),
            TokenType::Identifier
        ),
        (
            Regex::new(r"^[0-9]+(\.[0-9]*)?").unwrap(),
            TokenType::Number
        ),
        (Regex::new(r#"^"[^"]*""#).unwrap(), TokenType::StringLiteral),
        (char_class(OPERATORS), TokenType::Operator),
        (char_class(PUNCTUATION), TokenType::Punctuation),
        (Regex::new(r"^[ \t]+").unwrap(), TokenType::Whitespace),
        (Regex::new(r"^(\r\n|\r|\n)").unwrap(), TokenType::Newline),
    ];
}

fn keyword_regex<S: AsRef<str>>(keywords: &[S]) -> Result<Regex, LexError> {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|word| regex::escape(word.as_ref()))
        .collect();
    let pattern = format!(r"^({})\b", alternatives.join("|"));
    Regex::new(&pattern).map_err(|e| LexError::Pattern(e.to_string()))
}

fn char_class(chars: &str) -> Regex {
    Regex::new(&format!("^[{}]", regex::escape(chars))).unwrap()
}

/// Result of tokenizing one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The comment-stripped source that token spans refer to.
    pub source: String,
    pub tokens: Vec<Token>,
    pub counts: CategoryCounts,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        self.counts.errors() > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_error())
    }

    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.tokens.iter().map(Token::pair).collect()
    }
}

/// One piece of a scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanned<'a> {
    Matched(TokenType, &'a str),
    /// Remainder of the line from the first unrecognized position.
    Unrecognized(&'a str),
}

impl<'a> Scanned<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Scanned::Matched(_, text) | Scanned::Unrecognized(text) => text,
        }
    }
}

/// Iterator over every piece of a single line, discarded whitespace
/// included. Ends after the first [`Scanned::Unrecognized`].
pub struct LineScanner<'t, 'a> {
    tokenizer: &'t Tokenizer,
    remaining: &'a str,
}

impl<'a> Iterator for LineScanner<'_, 'a> {
    type Item = Scanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        match self.tokenizer.match_prefix(self.remaining) {
            Some((token_type, len)) => {
                let (lexeme, rest) = self.remaining.split_at(len);
                self.remaining = rest;
                Some(Scanned::Matched(token_type, lexeme))
            }
            None => Some(Scanned::Unrecognized(std::mem::take(&mut self.remaining))),
        }
    }
}

/// Ordered matcher table. The first pattern matching a non-empty prefix of
/// the remaining text wins.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    patterns: Vec<(Regex, TokenType)>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        let mut patterns = Vec::with_capacity(TOKEN_PATTERNS.len() + 1);
        patterns.push((KEYWORD_REGEX.clone(), TokenType::Keyword));
        patterns.extend(TOKEN_PATTERNS.iter().cloned());
        Self { patterns }
    }

    /// Builds a tokenizer that reserves `keywords` instead of the default
    /// set. An empty set disables keyword matching.
    pub fn with_keywords<S: AsRef<str>>(keywords: &[S]) -> Result<Self, LexError> {
        let mut patterns = Vec::with_capacity(TOKEN_PATTERNS.len() + 1);
        if !keywords.is_empty() {
            if let Some(bad) = keywords
                .iter()
                .find(|word| !KEYWORD_NAME_REGEX.is_match(word.as_ref()))
            {
                return Err(LexError::InvalidKeyword(bad.as_ref().to_string()));
            }
            patterns.push((keyword_regex(keywords)?, TokenType::Keyword));
        }
        patterns.extend(TOKEN_PATTERNS.iter().cloned());
        Ok(Self { patterns })
    }

    fn match_prefix(&self, remaining: &str) -> Option<(TokenType, usize)> {
        self.patterns.iter().find_map(|(pattern, token_type)| {
            pattern
                .find(remaining)
                .filter(|mat| mat.start() == 0 && mat.end() > 0)
                .map(|mat| (*token_type, mat.end()))
        })
    }

    pub fn scan_line<'a>(&self, line: &'a str) -> LineScanner<'_, 'a> {
        LineScanner {
            tokenizer: self,
            remaining: line,
        }
    }

    pub fn tokenize(&self, source: &str) -> Analysis {
        let stripped = strip_comments(source).into_owned();
        let mut tokens = Vec::new();
        let mut counts = CategoryCounts::new();

        let mut line_start = 0;
        for (index, raw_line) in stripped.split('\n').enumerate() {
            let start = line_start;
            line_start += raw_line.len() + 1;

            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let mut position = start + (raw_line.len() - raw_line.trim_start().len());
            for piece in self.scan_line(line) {
                let text = piece.text();
                let span = position..position + text.len();
                position = span.end;
                match piece {
                    Scanned::Matched(token_type, lexeme) => {
                        if let Some(category) = token_type.category() {
                            counts.record(category);
                            tokens.push(Token::new(
                                TokenKind::Lexeme(category),
                                lexeme,
                                span,
                                index + 1,
                            ));
                        }
                    }
                    Scanned::Unrecognized(rest) => {
                        counts.record_error();
                        tokens.push(Token::new(TokenKind::Error, rest, span, index + 1));
                    }
                }
            }
        }

        Analysis {
            source: stripped,
            tokens,
            counts,
        }
    }
}

/// Tokenizes `source` with the default keyword set.
pub fn tokenize(source: &str) -> Analysis {
    Tokenizer::new().tokenize(source)
}
