//! File-path predicates and inclusion scopes for rules.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extension-based file-path predicate over a closed extension set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPattern {
    /// Recognized extensions, without the leading dot.
    pub extensions: Vec<String>,

    /// Match extensions regardless of case (raster images and audio keep
    /// their historical case-insensitive matching; everything else is
    /// exact).
    #[serde(default)]
    pub case_insensitive: bool,
}

impl MatchPattern {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            case_insensitive: false,
        }
    }

    pub fn case_insensitive<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            case_insensitive: true,
            ..Self::new(extensions)
        }
    }

    /// Test a path against this pattern.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };

        if self.case_insensitive {
            let ext = ext.to_ascii_lowercase();
            self.extensions.iter().any(|e| *e == ext)
        } else {
            self.extensions.iter().any(|e| e == ext)
        }
    }
}

/// Inclusion/exclusion scope of a rule.
///
/// Script rules are restricted to the project's own source tree; asset
/// rules apply anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PathBuf>,
}

impl Scope {
    /// Project sources only: include `src`, exclude the third-party tree.
    pub fn sources() -> Self {
        Self {
            include: Some(PathBuf::from("src")),
            exclude: Some(PathBuf::from("node_modules")),
        }
    }

    /// No restriction.
    pub fn any() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_sensitive() {
        let pattern = MatchPattern::new(["ts", "tsx"]);
        assert!(pattern.matches(Path::new("src/index.tsx")));
        assert!(pattern.matches(Path::new("src/util.ts")));
        assert!(!pattern.matches(Path::new("src/INDEX.TS")));
        assert!(!pattern.matches(Path::new("src/index.js")));
    }

    #[test]
    fn insensitive_match_accepts_any_casing() {
        let pattern = MatchPattern::case_insensitive(["png", "gif", "jpg", "jpeg"]);
        assert!(pattern.matches(Path::new("assets/PHOTO.JPG")));
        assert!(pattern.matches(Path::new("assets/icon.png")));
        assert!(!pattern.matches(Path::new("assets/icon.svg")));
    }

    #[test]
    fn extensionless_paths_never_match() {
        let pattern = MatchPattern::new(["css"]);
        assert!(!pattern.matches(Path::new("Makefile")));
        assert!(!pattern.matches(Path::new("styles/")));
    }
}
