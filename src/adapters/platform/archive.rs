//! Result archive extraction
//!
//! Completed export jobs hand back a zip archive that is expected to contain
//! exactly one file. The entry count is validated loudly: an empty or
//! multi-entry archive means the platform changed its export contract, and
//! quietly taking the first entry would hide that.

use crate::domain::errors::PlatformError;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Extracts the contents of a single-entry zip archive
///
/// # Errors
///
/// Returns `PlatformError::ArchiveFormat` if the bytes are not a zip
/// archive, the archive does not hold exactly one entry, or the entry cannot
/// be read.
pub(crate) fn extract_single_entry(bytes: &[u8]) -> Result<Vec<u8>, PlatformError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| PlatformError::ArchiveFormat(format!("not a zip archive: {e}")))?;

    if archive.len() != 1 {
        return Err(PlatformError::ArchiveFormat(format!(
            "expected exactly one entry, found {}",
            archive.len()
        )));
    }

    let mut entry = archive
        .by_index(0)
        .map_err(|e| PlatformError::ArchiveFormat(format!("unreadable archive entry: {e}")))?;

    let mut contents = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut contents)
        .map_err(|e| PlatformError::ArchiveFormat(format!("failed to decompress entry: {e}")))?;

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn zip_with_entries(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, contents) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(contents).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_single_entry_extracted() {
        let bytes = zip_with_entries(&[("export.json", br#"{"responses": []}"#)]);
        let contents = extract_single_entry(&bytes).unwrap();
        assert_eq!(contents, br#"{"responses": []}"#);
    }

    #[test]
    fn test_entry_name_is_irrelevant() {
        let bytes = zip_with_entries(&[("weird name (2).json", b"payload")]);
        assert_eq!(extract_single_entry(&bytes).unwrap(), b"payload");
    }

    #[test]
    fn test_multi_entry_archive_rejected() {
        let bytes = zip_with_entries(&[("a.json", b"{}"), ("b.json", b"{}")]);
        let err = extract_single_entry(&bytes).unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_empty_archive_rejected() {
        let bytes = zip_with_entries(&[]);
        let err = extract_single_entry(&bytes).unwrap_err();
        assert!(err.to_string().contains("found 0"));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = extract_single_entry(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, PlatformError::ArchiveFormat(_)));
    }
}
