use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref KEYWORD_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

pub fn validate_keyword(keyword: &str) -> Result<String, String> {
    if !KEYWORD_REGEX.is_match(keyword) {
        return Err("Keyword must match pattern: ^[a-zA-Z_][a-zA-Z0-9_]*$".to_string());
    }
    Ok(keyword.to_string())
}
