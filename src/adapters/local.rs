use crate::core::DocStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem store rooted at a generated doc tree. Implementor files are
/// discovered under `<root>/implementors`; reports are written next to the
/// root.
#[derive(Debug, Clone)]
pub struct LocalStore {
    doc_root: String,
    output_path: String,
}

impl LocalStore {
    pub fn new(doc_root: String, output_path: String) -> Self {
        Self {
            doc_root,
            output_path,
        }
    }

    fn walk_js_files(dir: &Path, root: &Path, out: &mut Vec<String>) -> std::io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                Self::walk_js_files(&path, root, out)?;
            } else if path.extension().and_then(|e| e.to_str()) == Some("js") {
                if let Ok(rel) = path.strip_prefix(root) {
                    out.push(rel.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        Ok(())
    }
}

impl DocStore for LocalStore {
    async fn read_file(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.doc_root).join(path);
        let contents = fs::read_to_string(full_path)?;
        Ok(contents)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.output_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn list_implementor_files(&self) -> Result<Vec<String>> {
        let root = PathBuf::from(&self.doc_root);
        let implementors_dir = root.join("implementors");

        if !implementors_dir.is_dir() {
            tracing::warn!(
                "no implementors directory under {}; nothing to scan",
                self.doc_root
            );
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        Self::walk_js_files(&implementors_dir, &root, &mut paths)?;
        paths.sort();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn lists_js_files_recursively_and_sorted() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("implementors/core/ops/drop")).unwrap();
        fs::create_dir_all(root.join("implementors/core/marker")).unwrap();
        fs::write(root.join("implementors/core/ops/drop/trait.Drop.js"), "x").unwrap();
        fs::write(root.join("implementors/core/marker/trait.Send.js"), "y").unwrap();
        fs::write(root.join("implementors/core/marker/readme.txt"), "z").unwrap();

        let store = LocalStore::new(
            root.to_string_lossy().to_string(),
            root.to_string_lossy().to_string(),
        );
        let files = store.list_implementor_files().await.unwrap();
        assert_eq!(
            files,
            vec![
                "implementors/core/marker/trait.Send.js",
                "implementors/core/ops/drop/trait.Drop.js",
            ]
        );
    }

    #[tokio::test]
    async fn missing_implementors_dir_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(
            dir.path().to_string_lossy().to_string(),
            dir.path().to_string_lossy().to_string(),
        );
        assert!(store.list_implementor_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(
            dir.path().to_string_lossy().to_string(),
            dir.path().join("reports").to_string_lossy().to_string(),
        );

        store.write_file("nested/summary.csv", b"a,b").await.unwrap();
        let written = fs::read(dir.path().join("reports/nested/summary.csv")).unwrap();
        assert_eq!(written, b"a,b");
    }
}
