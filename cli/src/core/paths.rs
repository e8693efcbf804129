use std::path::Path;

pub fn clean_path_str(s: &str) -> &str {
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return stripped;
        }
    }
    s
}

/// Path shown in reports: relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(stripped) = path.strip_prefix(&cwd) {
            return stripped.display().to_string();
        }
    }
    clean_path_str(&path.display().to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("src").join("main.c");
        assert_eq!(
            display_path(&path),
            Path::new("src").join("main.c").display().to_string()
        );
    }

    #[test]
    fn test_display_path_keeps_relative_input() {
        assert_eq!(display_path(Path::new("a/b.c")), "a/b.c");
    }
}
