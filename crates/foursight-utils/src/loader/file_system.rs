use crate::loader::is_yaml;
use crate::loader::error::LoadingError;
use crate::loader::file::File;
use async_stream::try_stream;
use async_walkdir::{DirEntry, Filtering, WalkDir};
use futures::{Stream, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }

    /// Streams every YAML file below `path`.
    pub fn load_dir<'a, P: AsRef<Path>>(&'a self, path: P) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading dir");
        let mut walker = WalkDir::new(path).filter(filter_entry);
        let stream = try_stream! {
            while let Some(entry) = walker.next().await {
                let entry = entry?;
                if entry.file_type().await?.is_file() {
                    let path = entry.path();
                    tracing::trace!(?path, "Loading file");
                    let data = fs::read(&path).await?;
                    yield File::new(path.to_string_lossy().into(), data)
                }
            }
        };
        Box::pin(stream)
    }

    /// Loads all YAML files below `path`, ordered by their path.
    pub async fn load_dir_sorted<P: AsRef<Path>>(&self, path: P) -> Result<Vec<File>, LoadingError> {
        let mut files: Vec<File> = self.load_dir(path).try_collect().await?;
        files.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(files)
    }
}

async fn filter_entry(entry: DirEntry) -> Filtering {
    let Ok(ft) = entry.file_type().await else {
        tracing::warn!(path = ?entry.path(), "could not read file type, skipping");
        return Filtering::Ignore;
    };
    if ft.is_dir() {
        return Filtering::Continue;
    }

    if is_yaml(entry.path()) {
        Filtering::Continue
    } else {
        Filtering::Ignore
    }
}
