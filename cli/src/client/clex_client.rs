use super::clex_client_models::{AnalysisRun, FileReport, SourceText, StrippedView};
use crate::core::error::ClexError;
use crate::core::paths::display_path;
use crate::debug_log;
use clex_lib::{strip_comments, Analysis, Tokenizer};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions picked up when the source is a directory.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "h", "txt"];

/// Name reported for source passed with `--code`.
const INLINE_SOURCE_NAME: &str = "<code>";

#[derive(Debug, Clone)]
pub enum SourceInput {
    Inline(String),
    Path(PathBuf),
}

pub struct ClexClient {
    tokenizer: Tokenizer,
}

impl ClexClient {
    pub fn new(keywords: Option<&[String]>) -> Result<Self, ClexError> {
        let tokenizer = match keywords {
            Some(words) => {
                debug_log!("Using custom keywords: {}", words.join(", "));
                Tokenizer::with_keywords(words)?
            }
            None => Tokenizer::new(),
        };
        Ok(Self { tokenizer })
    }

    pub fn analyze(&self, input: &SourceInput) -> Result<AnalysisRun, ClexError> {
        let sources = Self::load_sources(input)?;
        let mut run = AnalysisRun::default();
        for source in &sources {
            let analysis = self.analyze_text(source);
            run.totals.merge(&analysis.counts);
            run.reports.push(FileReport::from_analysis(&source.name, &analysis));
        }
        Ok(run)
    }

    pub fn analyze_text(&self, source: &SourceText) -> Analysis {
        if source.text.trim().is_empty() {
            eprintln!("Warning: {} is empty.", source.name);
        }
        let analysis = self.tokenizer.tokenize(&source.text);
        debug_log!(
            "{}: {} tokens, {} error(s)",
            source.name,
            analysis.tokens.len(),
            analysis.counts.errors()
        );
        for error in analysis.errors() {
            debug_log!(
                "{}:{}: unrecognized input '{}'",
                source.name,
                error.line,
                error.value
            );
        }
        analysis
    }

    pub fn strip(input: &SourceInput) -> Result<Vec<StrippedView>, ClexError> {
        let sources = Self::load_sources(input)?;
        Ok(sources
            .into_iter()
            .map(|source| StrippedView {
                source: strip_comments(&source.text).into_owned(),
                file: source.name,
            })
            .collect())
    }

    pub fn load_sources(input: &SourceInput) -> Result<Vec<SourceText>, ClexError> {
        match input {
            SourceInput::Inline(text) => Ok(vec![SourceText {
                name: INLINE_SOURCE_NAME.to_string(),
                text: text.clone(),
            }]),
            SourceInput::Path(path) => Self::get_source_files(path)?
                .iter()
                .map(|file| Self::read_source(file))
                .collect(),
        }
    }

    fn get_source_files(path: &Path) -> Result<Vec<PathBuf>, ClexError> {
        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }
        let path_str = path.display().to_string();
        if !path.exists() {
            return Err(ClexError::DirectoryNotFound(path_str));
        }
        if !path.is_dir() {
            return Err(ClexError::NotADirectory(path_str));
        }

        let mut files: Vec<PathBuf> = fs::read_dir(path)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && has_source_extension(p))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(ClexError::NoSourceFiles(path_str));
        }
        debug_log!("Found {} source file(s) in {}", files.len(), path_str);
        Ok(files)
    }

    fn read_source(path: &Path) -> Result<SourceText, ClexError> {
        let bytes = fs::read(path)?;
        let name = display_path(path);
        let text = String::from_utf8(bytes).map_err(|_| ClexError::Utf8(name.clone()))?;
        Ok(SourceText { name, text })
    }
}

pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clex_lib::TokenCategory;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("clex_{name}_{}", std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_has_source_extension() {
        assert!(has_source_extension(Path::new("main.c")));
        assert!(has_source_extension(Path::new("dir/notes.txt")));
        assert!(!has_source_extension(Path::new("main.rs")));
        assert!(!has_source_extension(Path::new("Makefile")));
    }

    #[test]
    fn test_analyze_inline() {
        let client = ClexClient::new(None).unwrap();
        let run = client
            .analyze(&SourceInput::Inline("int x = 10;".into()))
            .unwrap();
        assert_eq!(run.reports.len(), 1);
        assert_eq!(run.reports[0].file, "<code>");
        assert_eq!(run.reports[0].tokens.as_ref().unwrap().len(), 5);
        assert_eq!(run.reports[0].errors, 0);
        assert_eq!(run.totals.total(), 5);
    }

    #[test]
    fn test_analyze_directory_totals() {
        let dir = temp_dir("totals");
        fs::write(dir.join("a.c"), "int a;\nx @").unwrap();
        fs::write(dir.join("b.c"), "int b = 2;").unwrap();

        let client = ClexClient::new(None).unwrap();
        let run = client.analyze(&SourceInput::Path(dir.clone())).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(run.reports.len(), 2);
        assert_eq!(run.totals.get(TokenCategory::Keyword), 2);
        assert_eq!(run.totals.get(TokenCategory::Identifier), 3);
        assert_eq!(run.totals.get(TokenCategory::Number), 1);
        assert_eq!(run.totals.errors(), 1);
        let summed: usize = run.reports.iter().map(|report| report.errors).sum();
        assert_eq!(run.totals.errors(), summed);
    }

    #[test]
    fn test_custom_keywords_are_validated() {
        let words = vec!["ok".to_string(), "1bad".to_string()];
        let err = ClexClient::new(Some(words.as_slice())).err().unwrap();
        assert!(matches!(err, ClexError::Lex(_)));
    }

    #[test]
    fn test_directory_sources_are_sorted_and_filtered() {
        let dir = temp_dir("sorted");
        fs::write(dir.join("b.c"), "int b;").unwrap();
        fs::write(dir.join("a.txt"), "int a;").unwrap();
        fs::write(dir.join("skip.rs"), "fn main() {}").unwrap();

        let sources = ClexClient::load_sources(&SourceInput::Path(dir.clone())).unwrap();
        fs::remove_dir_all(&dir).ok();

        let texts: Vec<&str> = sources.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["int a;", "int b;"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = temp_dir("empty");
        let err = ClexClient::load_sources(&SourceInput::Path(dir.clone())).unwrap_err();
        fs::remove_dir_all(&dir).ok();
        assert!(matches!(err, ClexError::NoSourceFiles(_)));
    }

    #[test]
    fn test_missing_path() {
        let err =
            ClexClient::load_sources(&SourceInput::Path(PathBuf::from("no/such/dir"))).unwrap_err();
        assert!(matches!(err, ClexError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = temp_dir("utf8");
        let file = dir.join("bad.c");
        fs::write(&file, [0x69u8, 0x6e, 0x74, 0xff]).unwrap();
        let err = ClexClient::load_sources(&SourceInput::Path(file)).unwrap_err();
        fs::remove_dir_all(&dir).ok();
        assert!(matches!(err, ClexError::Utf8(_)));
    }

    #[test]
    fn test_strip() {
        let stripped =
            ClexClient::strip(&SourceInput::Inline("int a; // c\n/* b */int b;".into())).unwrap();
        assert_eq!(stripped[0].source, "int a; \nint b;");
    }
}
