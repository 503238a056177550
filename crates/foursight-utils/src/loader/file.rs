#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path of the file as it was found by the loader
    pub key: String,
    pub content: Vec<u8>,
}

impl File {
    #[must_use]
    pub fn new(key: String, content: Vec<u8>) -> Self {
        File { key, content }
    }
}
