//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::error::PortError;
use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_file() {
        let dir = std::env::temp_dir().join("findcurl_live_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("libcurl.pc");
        std::fs::write(&path, "Name: libcurl\n").unwrap();

        let fs = LiveFileSystem;
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "Name: libcurl\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_error() {
        let fs = LiveFileSystem;
        let path = Path::new("/nonexistent/findcurl/include");
        assert!(!fs.exists(path));
        assert!(fs.read_to_string(path).is_err());
    }
}
