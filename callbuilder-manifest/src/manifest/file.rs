use std::path::{Path, PathBuf};

use super::{Manifest, parse_manifest};
use crate::{Error, Result};

/// A callbuilder.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory containing the manifest, used to resolve relative output paths.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("callbuilder.toml");
        std::fs::write(
            &path,
            "[[impl]]\nself = \"Foo\"\n\n[[impl.fn]]\nname = \"bar\"\ncall_builder = {}\n",
        )
        .unwrap();

        let file = ManifestFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.dir(), dir.path());
        assert!(file.content().contains("[[impl]]"));
        assert_eq!(file.manifest().annotated().count(), 1);
    }

    #[test]
    fn test_open_reports_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[impl]]\nself = \"&Foo\"\n").unwrap();

        let err = ManifestFile::open(&path).unwrap_err();
        match *err {
            Error::Parse { src, .. } => assert!(src.name().ends_with("broken.toml")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
