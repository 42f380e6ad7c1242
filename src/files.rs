/// File inspection helpers for uploaded documents
///
/// The viewer never keeps a long-lived handle on document content: a bounded
/// preview is loaded when the modal opens and dropped when it closes. Blocking
/// IO runs on the runtime's blocking pool, never on the UI thread.
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::task;

use crate::error::FileError;

/// How much of the document the viewer shows as a hex dump.
pub const PREVIEW_HEAD_BYTES: usize = 1024;

/// Transient snapshot of a document, held only while the viewer is open.
#[derive(Debug, Clone)]
pub struct DocumentPreview {
    pub name: String,
    pub size_label: String,
    pub total_size: u64,
    pub modified: Option<DateTime<Utc>>,
    /// First `PREVIEW_HEAD_BYTES` of the file.
    pub head: Vec<u8>,
}

/// Size label shown in the processing queue and the viewer, e.g. "2.4 MB".
pub fn size_label(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Load a preview of the document in the background.
pub async fn load_preview(path: PathBuf, name: String) -> Result<DocumentPreview, String> {
    task::spawn_blocking(move || load_preview_blocking(&path, name).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

fn load_preview_blocking(path: &Path, name: String) -> Result<DocumentPreview, FileError> {
    let metadata = std::fs::metadata(path).map_err(|source| FileError::Inspect {
        path: path.to_path_buf(),
        source,
    })?;
    let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

    let file = File::open(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut head = Vec::with_capacity(PREVIEW_HEAD_BYTES);
    let mut reader = file.take(PREVIEW_HEAD_BYTES as u64);
    reader
        .read_to_end(&mut head)
        .map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(DocumentPreview {
        name,
        size_label: size_label(metadata.len()),
        total_size: metadata.len(),
        modified,
        head,
    })
}

/// Save a copy of the document under a destination the user picked.
pub async fn save_copy(from: PathBuf, to: PathBuf) -> Result<PathBuf, String> {
    tokio::fs::copy(&from, &to).await.map_err(|source| {
        FileError::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        }
        .to_string()
    })?;
    Ok(to)
}

/// Render bytes as classic hexdump lines: offset, 16 hex pairs, ASCII gutter.
pub fn hex_dump(bytes: &[u8]) -> Vec<String> {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(index, chunk)| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            let ascii: String = chunk
                .iter()
                .map(|&b| if (0x20..0x7f).contains(&b) { b as char } else { '.' })
                .collect();
            format!("{:08x}  {:<47}  |{}|", index * 16, hex.join(" "), ascii)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("fair-validator-test-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn size_label_formats_megabytes() {
        assert_eq!(size_label(1_572_864), "1.5 MB");
        assert_eq!(size_label(52_428_800), "50.0 MB");
        assert_eq!(size_label(0), "0.0 MB");
    }

    #[test]
    fn hex_dump_renders_offset_hex_and_ascii() {
        let lines = hex_dump(b"%PDF-1.4");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("00000000  25 50 44 46 2d 31 2e 34"));
        assert!(lines[0].ends_with("|%PDF-1.4|"));
    }

    #[test]
    fn hex_dump_masks_unprintable_bytes() {
        let lines = hex_dump(&[0x00, 0xff, b'A']);
        assert!(lines[0].ends_with("|..A|"));
    }

    #[test]
    fn hex_dump_of_empty_input_is_empty() {
        assert!(hex_dump(&[]).is_empty());
    }

    #[tokio::test]
    async fn load_preview_reads_bounded_head() {
        let contents = vec![b'x'; PREVIEW_HEAD_BYTES * 3];
        let path = temp_file("preview.pdf", &contents);

        let preview = load_preview(path.clone(), "preview.pdf".to_string())
            .await
            .unwrap();
        assert_eq!(preview.head.len(), PREVIEW_HEAD_BYTES);
        assert_eq!(preview.total_size, contents.len() as u64);
        assert_eq!(preview.name, "preview.pdf");

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn load_preview_reports_missing_file() {
        let result = load_preview(
            PathBuf::from("/nonexistent/missing.pdf"),
            "missing.pdf".to_string(),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn save_copy_duplicates_content() {
        let source = temp_file("copy-src.pdf", b"fair document body");
        let mut dest = std::env::temp_dir();
        dest.push(format!("fair-validator-test-{}-copy-dst.pdf", std::process::id()));

        let written = save_copy(source.clone(), dest.clone()).await.unwrap();
        assert_eq!(written, dest);
        assert_eq!(std::fs::read(&dest).unwrap(), b"fair document body");

        std::fs::remove_file(source).unwrap();
        std::fs::remove_file(dest).unwrap();
    }
}
