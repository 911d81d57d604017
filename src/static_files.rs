//! Static file serving for mounted directories.
//!
//! A host that receives [`HostApp::mount_static`](crate::HostApp::mount_static)
//! can delegate to [`StaticFiles`]: URL paths are mapped safely under the
//! mounted directory (traversal components are rejected), content types are
//! derived from the file extension, and `.html` files can be rendered as
//! minijinja templates against a JSON context, typically one carrying the
//! published [`UrlMap`](crate::UrlMap) output for link generation.

use minijinja::Environment;
use serde_json::Value as JsonValue;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// A file resolved from a static mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    /// File contents, rendered if the file was a template
    pub bytes: Vec<u8>,
    /// Content type derived from the file extension
    pub content_type: &'static str,
}

/// Serves files from a mounted directory.
pub struct StaticFiles {
    base_dir: PathBuf,
}

impl StaticFiles {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self {
            base_dir: base.into(),
        }
    }

    /// Map a URL path to a file under the base directory.
    ///
    /// Only plain path components are accepted; `..`, roots, and prefixes
    /// return `None` so a request can never escape the mount. A path that
    /// resolves to a directory falls through to its `index.html`.
    fn map_path(&self, url_path: &str) -> Option<PathBuf> {
        let mut pb = self.base_dir.clone();
        for comp in Path::new(url_path.trim_start_matches('/')).components() {
            match comp {
                Component::Normal(s) => pb.push(s),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if pb.is_dir() {
            pb.push("index.html");
        }
        Some(pb)
    }

    fn content_type(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "html" => "text/html",
            "css" => "text/css",
            "js" => "application/javascript",
            "json" => "application/json",
            "txt" => "text/plain",
            "svg" => "image/svg+xml",
            "png" => "image/png",
            "ico" => "image/x-icon",
            _ => "application/octet-stream",
        }
    }

    /// Resolve and read a file; `.html` files are rendered against `ctx`
    /// when one is supplied.
    pub fn serve(&self, url_path: &str, ctx: Option<&JsonValue>) -> io::Result<StaticFile> {
        let path = self
            .map_path(url_path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "invalid path"))?;
        if !path.is_file() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        }
        let content_type = Self::content_type(&path);

        if content_type == "text/html" {
            if let Some(ctx_val) = ctx {
                let source = fs::read_to_string(&path)?;
                let mut env = Environment::new();
                env.add_template("page", &source)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                let rendered = env
                    .get_template("page")
                    .and_then(|tmpl| tmpl.render(ctx_val))
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                return Ok(StaticFile {
                    bytes: rendered.into_bytes(),
                    content_type,
                });
            }
        }

        Ok(StaticFile {
            bytes: fs::read(&path)?,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("hello.txt"), "Hello\n").expect("write failed");
        fs::write(
            dir.path().join("index.html"),
            "<a href=\"{{ demo_url }}\">demos</a>",
        )
        .expect("write failed");
        dir
    }

    #[test]
    fn test_map_path_prevents_traversal() {
        let sf = StaticFiles::new("public");
        assert!(sf.map_path("../Cargo.toml").is_none());
        assert!(sf.map_path("/../secrets").is_none());
    }

    #[test]
    fn test_serves_plain_files() {
        let dir = fixture();
        let sf = StaticFiles::new(dir.path());
        let file = sf.serve("hello.txt", None).expect("serve failed");
        assert_eq!(file.content_type, "text/plain");
        assert_eq!(String::from_utf8(file.bytes).expect("not utf-8"), "Hello\n");
    }

    #[test]
    fn test_directory_url_falls_through_to_index() {
        let dir = fixture();
        let sf = StaticFiles::new(dir.path());
        let file = sf.serve("/", None).expect("serve failed");
        assert_eq!(file.content_type, "text/html");
    }

    #[test]
    fn test_renders_html_against_context() {
        let dir = fixture();
        let sf = StaticFiles::new(dir.path());
        let ctx = json!({ "demo_url": "/demos/1" });
        let file = sf.serve("index.html", Some(&ctx)).expect("serve failed");
        assert_eq!(
            String::from_utf8(file.bytes).expect("not utf-8"),
            "<a href=\"/demos/1\">demos</a>"
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = fixture();
        let sf = StaticFiles::new(dir.path());
        let err = sf.serve("ghost.txt", None).expect_err("expected error");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
