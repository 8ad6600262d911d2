use crate::shared::error::BomError;
use crate::shared::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Upper bound for a BOM manifest (16 MiB).
///
/// Real TKR BOMs are a few hundred kilobytes; anything far beyond that is
/// not a manifest and is rejected before it is read into memory.
pub const MAX_BOM_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Checks that `path` can be read as a BOM manifest.
///
/// Symbolic links are followed; the checks apply to the file they point at.
/// Returns the file size on success.
///
/// # Errors
/// Returns an error if:
/// - Metadata for the path (or its link target) cannot be read
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_manifest_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|e| BomError::BomReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read file metadata: {}", e),
    })?;

    if !metadata.is_file() {
        return Err(BomError::BomReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    let size = metadata.len();
    if size > max_size {
        return Err(too_large(path, size, max_size));
    }

    Ok(size)
}

/// Reads at most `max_size` bytes of a manifest.
///
/// The file may grow between the metadata check and the read, so the limit
/// is enforced again on the bytes actually read. `size_hint` is the size
/// reported by `validate_manifest_file`.
///
/// # Errors
/// Returns `BomReadError` on I/O failure and `SecurityError` when the
/// content exceeds `max_size`.
pub fn read_bounded<R: Read>(
    reader: R,
    path: &Path,
    size_hint: u64,
    max_size: u64,
) -> Result<Vec<u8>> {
    let capacity = usize::try_from(size_hint.min(max_size)).unwrap_or(0);
    let mut content = Vec::with_capacity(capacity);

    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut content)
        .map_err(|e| BomError::BomReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let read = content.len() as u64;
    if read > max_size {
        return Err(too_large(path, read, max_size));
    }

    Ok(content)
}

fn too_large(path: &Path, size: u64, max_size: u64) -> anyhow::Error {
    BomError::SecurityError {
        path: path.to_path_buf(),
        reason: format!(
            "File is too large ({} bytes). Maximum allowed size is {} bytes.",
            size, max_size
        ),
        hint: "Check that the path points to a TKR BOM manifest".to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_manifest_file_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.yaml");
        let content = "apiVersion: run.tanzu.vmware.com/v1alpha2";
        fs::write(&file_path, content).unwrap();

        let size = validate_manifest_file(&file_path, MAX_BOM_FILE_SIZE).unwrap();
        assert_eq!(size, content.len() as u64);
    }

    #[test]
    fn test_validate_manifest_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/bom.yaml");
        let result = validate_manifest_file(&path, MAX_BOM_FILE_SIZE);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file metadata"));
    }

    #[test]
    fn test_validate_manifest_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_manifest_file(temp_dir.path(), MAX_BOM_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_validate_manifest_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.yaml");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_manifest_file(&file_path, 4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_manifest_file_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("bom.yaml");
        let link = temp_dir.path().join("link.yaml");
        fs::write(&target, "release: {}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let size = validate_manifest_file(&link, MAX_BOM_FILE_SIZE).unwrap();
        assert_eq!(size, "release: {}".len() as u64);
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_manifest_file_symlink_to_directory() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("link.yaml");
        std::os::unix::fs::symlink(temp_dir.path(), &link).unwrap();

        let result = validate_manifest_file(&link, MAX_BOM_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_read_bounded_within_limit() {
        let content = read_bounded(
            Cursor::new(b"release: {}".to_vec()),
            Path::new("bom.yaml"),
            11,
            11,
        )
        .unwrap();
        assert_eq!(content, b"release: {}");
    }

    #[test]
    fn test_read_bounded_rejects_content_beyond_limit() {
        // The reported size is stale: the file grew after the metadata check.
        let result = read_bounded(
            Cursor::new(vec![b'x'; 64]),
            Path::new("bom.yaml"),
            8,
            16,
        );

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BomError>(),
            Some(BomError::SecurityError { .. })
        ));
        assert!(err.to_string().contains("too large (17 bytes)"));
    }

    #[test]
    fn test_max_bom_file_size_constant() {
        assert_eq!(MAX_BOM_FILE_SIZE, 16 * 1024 * 1024);
    }
}
