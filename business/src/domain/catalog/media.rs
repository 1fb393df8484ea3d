/// Base URL that relative media paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRoot(String);

impl MediaRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into().trim_end_matches('/').to_string())
    }

    /// Absolute URL for a media path.
    ///
    /// Empty or missing paths resolve to an empty string and paths that are
    /// already absolute are returned unchanged.
    pub fn resolve(&self, path: Option<&str>) -> String {
        match path.map(str::trim) {
            None | Some("") => String::new(),
            Some(p) if p.starts_with("http") => p.to_string(),
            Some(p) => format!("{}/{}", self.0, p.trim_start_matches('/')),
        }
    }
}
