use std::ffi::OsStr;
use std::path::Path;

/// Version control metadata is never compared.
pub const ALWAYS_EXCLUDED: &str = ".git";

/// Tokens that keep paths out of the comparison.
///
/// A token excludes a path when it occurs anywhere in the path string, so it
/// also matches ancestor components: `log` excludes everything under a
/// `catalog` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    tokens: Vec<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        ExclusionSet::new(Vec::<String>::new())
    }
}

impl ExclusionSet {
    pub fn new(tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut tokens = tokens
            .into_iter()
            .map(Into::into)
            .filter(|token: &String| !token.is_empty())
            .collect::<Vec<_>>();

        if !tokens.iter().any(|token| token == ALWAYS_EXCLUDED) {
            tokens.push(ALWAYS_EXCLUDED.to_string());
        }

        ExclusionSet { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether a listed name is literally one of the tokens.
    pub fn is_listed(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.tokens.iter().any(|token| *token == name)
    }

    /// The first token occurring in `path`, if any.
    pub fn matching_token(&self, path: &Path) -> Option<&str> {
        let path = path.to_string_lossy();
        self.tokens
            .iter()
            .find(|token| path.contains(token.as_str()))
            .map(String::as_str)
    }

    pub fn excludes(&self, path: &Path) -> bool {
        self.matching_token(path).is_some()
    }
}
