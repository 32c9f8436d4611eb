/// Per-call options for `get` and `post`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Binary request: `get` returns raw bytes instead of JSON, `post`
    /// sends a multipart form instead of a JSON body. Defaults to `false`.
    pub is_file: bool,
}

impl RequestOptions {
    /// Options for a file download or upload.
    pub fn file() -> Self {
        Self { is_file: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_json() {
        assert!(!RequestOptions::default().is_file);
        assert!(RequestOptions::file().is_file);
    }
}
