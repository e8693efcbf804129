pub const KW_INT: &str = "int";
pub const KW_IF: &str = "if";
pub const KW_ELSE: &str = "else";
pub const KW_RETURN: &str = "return";
pub const KW_FOR: &str = "for";
pub const ALL_KEYWORDS: &[&str] = &[KW_INT, KW_IF, KW_ELSE, KW_RETURN, KW_FOR];

/// Single-character operators.
pub const OPERATORS: &str = "+-*/=<>";

/// Single-character punctuation.
pub const PUNCTUATION: &str = "{}();,";

pub fn is_keyword(word: &str) -> bool {
    ALL_KEYWORDS.contains(&word)
}
