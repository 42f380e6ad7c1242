/// Shared document context
///
/// Holds the single most-recently-uploaded document so the analysis and
/// viewer views can find it. The store is owned by the application and passed
/// to consumers explicitly; there is no ambient global.
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Metadata for the currently published document.
///
/// `path` is an opaque reference to the binary content; nothing is read from
/// the file until the viewer asks for a preview.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub name: String,
    pub path: PathBuf,
    pub uploaded_at: DateTime<Utc>,
}

/// At most one document is published at a time. Publishing replaces the whole
/// value; the previous reference is simply dropped.
#[derive(Debug, Default)]
pub struct DocumentStore {
    current: Option<DocumentInfo>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, info: DocumentInfo) {
        self.current = Some(info);
    }

    /// Publish the first file of an accepted batch; the rest of the batch only
    /// exists as queue records.
    pub fn publish_first(&mut self, batch: &[PathBuf], uploaded_at: DateTime<Utc>) {
        if let Some(first) = batch.first() {
            self.publish(DocumentInfo {
                name: display_name(first),
                path: first.clone(),
                uploaded_at,
            });
        }
    }

    pub fn current(&self) -> Option<&DocumentInfo> {
        self.current.as_ref()
    }
}

/// File name shown for a path, falling back to the full path for odd inputs.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_empty() {
        let store = DocumentStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn publish_first_uses_head_of_batch() {
        let mut store = DocumentStore::new();
        let batch = vec![
            PathBuf::from("/tmp/first.pdf"),
            PathBuf::from("/tmp/second.pdf"),
            PathBuf::from("/tmp/third.pdf"),
        ];

        store.publish_first(&batch, Utc::now());

        let current = store.current().expect("document published");
        assert_eq!(current.name, "first.pdf");
        assert_eq!(current.path, PathBuf::from("/tmp/first.pdf"));
    }

    #[test]
    fn publish_replaces_previous_document() {
        let mut store = DocumentStore::new();
        store.publish_first(&[PathBuf::from("/tmp/old.pdf")], Utc::now());
        store.publish_first(&[PathBuf::from("/tmp/new.pdf")], Utc::now());

        assert_eq!(store.current().unwrap().name, "new.pdf");
    }

    #[test]
    fn empty_batch_leaves_store_untouched() {
        let mut store = DocumentStore::new();
        store.publish_first(&[PathBuf::from("/tmp/kept.pdf")], Utc::now());
        store.publish_first(&[], Utc::now());

        assert_eq!(store.current().unwrap().name, "kept.pdf");
    }

    #[test]
    fn display_name_falls_back_to_full_path() {
        assert_eq!(display_name(Path::new("/tmp/report.pdf")), "report.pdf");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
