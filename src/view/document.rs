use std::fs;
use std::path::{Path, PathBuf};

use crate::app::Result;

/// Attribute that identifies the mount point.
const ROOT_ID: &str = r#"id="root""#;

pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Hacker News</title>
    <link href="https://unpkg.com/tailwindcss@^2/dist/tailwind.min.css" rel="stylesheet" />
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css" />
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

/// Where rendered markup goes.
pub trait RenderSink {
    /// Replace everything inside the mount point with `html`.
    fn update_view(&mut self, html: &str) -> Result<()>;
}

/// An HTML page split around its `<div id="root">` mount point.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    before: String,
    root: Option<String>,
    after: String,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        match locate_root(html) {
            Some((start, end)) => Self {
                before: html[..start].to_string(),
                root: Some(html[start..end].to_string()),
                after: html[end..].to_string(),
            },
            None => Self {
                before: html.to_string(),
                root: None,
                after: String::new(),
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn has_mount_point(&self) -> bool {
        self.root.is_some()
    }

    /// Current content of the mount point.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Swap the mount point's content. Returns false when there is no
    /// mount point to render into.
    pub fn replace_root(&mut self, html: &str) -> bool {
        match self.root.as_mut() {
            Some(root) => {
                root.clear();
                root.push_str(html);
                true
            }
            None => false,
        }
    }

    pub fn to_html(&self) -> String {
        let root = self.root.as_deref().unwrap_or_default();
        let mut html = String::with_capacity(self.before.len() + root.len() + self.after.len());
        html.push_str(&self.before);
        html.push_str(root);
        html.push_str(&self.after);
        html
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::parse(DEFAULT_SHELL)
    }
}

impl RenderSink for Document {
    fn update_view(&mut self, html: &str) -> Result<()> {
        if !self.replace_root(html) {
            tracing::error!("No root container in the document, nothing rendered");
        }
        Ok(())
    }
}

/// A document that is written to disk after every update.
#[derive(Debug)]
pub struct DocumentFile {
    document: Document,
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(document: Document, path: impl Into<PathBuf>) -> Self {
        Self {
            document,
            path: path.into(),
        }
    }
}

impl RenderSink for DocumentFile {
    fn update_view(&mut self, html: &str) -> Result<()> {
        if !self.document.replace_root(html) {
            tracing::error!(
                "No root container in the document for {}, nothing rendered",
                self.path.display()
            );
            return Ok(());
        }

        fs::write(&self.path, self.document.to_html())?;
        Ok(())
    }
}

/// Byte range of the mount point's content, between its opening tag and
/// the matching `</div>`.
fn locate_root(html: &str) -> Option<(usize, usize)> {
    let id_at = html.find(ROOT_ID)?;
    let tag_start = html[..id_at].rfind('<')?;
    if !html[tag_start..].starts_with("<div") {
        return None;
    }
    let start = id_at + html[id_at..].find('>')? + 1;

    let mut depth = 1usize;
    let mut cursor = start;
    loop {
        let rest = &html[cursor..];
        let close = rest.find("</div")?;
        match rest.find("<div") {
            Some(open) if open < close => {
                depth += 1;
                cursor += open + "<div".len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, cursor + close));
                }
                cursor += close + "</div".len();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shell_has_empty_mount_point() {
        let document = Document::default();
        assert!(document.has_mount_point());
        assert_eq!(document.root(), Some(""));
        assert_eq!(document.to_html(), DEFAULT_SHELL);
    }

    #[test]
    fn test_update_replaces_whole_root() {
        let mut document = Document::default();
        document.update_view("<p>one</p>").unwrap();
        document.update_view("<p>two</p>").unwrap();

        assert_eq!(document.root(), Some("<p>two</p>"));
        assert!(document.to_html().contains(r#"<div id="root"><p>two</p></div>"#));
        assert!(!document.to_html().contains("one"));
    }

    #[test]
    fn test_nested_divs_in_existing_root() {
        let html = r#"<body><div id="root"><div><div>x</div></div></div><div>footer</div></body>"#;
        let mut document = Document::parse(html);

        assert_eq!(document.root(), Some("<div><div>x</div></div>"));

        document.update_view("y").unwrap();
        assert_eq!(
            document.to_html(),
            r#"<body><div id="root">y</div><div>footer</div></body>"#
        );
    }

    #[test]
    fn test_missing_mount_point_is_a_noop() {
        let html = "<html><body><main></main></body></html>";
        let mut document = Document::parse(html);

        assert!(!document.has_mount_point());
        assert!(document.update_view("<p>lost</p>").is_ok());
        assert_eq!(document.to_html(), html);
    }

    #[test]
    fn test_root_id_on_other_element_is_not_a_mount_point() {
        let document = Document::parse(r#"<section id="root"></section>"#);
        assert!(!document.has_mount_point());
    }

    #[test]
    fn test_document_file_writes_each_update() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let mut sink = DocumentFile::new(Document::default(), &path);

        sink.update_view("<p>first</p>").unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("<p>first</p>"));

        sink.update_view("<p>second</p>").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<p>second</p>"));
        assert!(!written.contains("<p>first</p>"));
    }

    #[test]
    fn test_document_file_without_mount_point_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let mut sink = DocumentFile::new(Document::parse("<body></body>"), &path);

        sink.update_view("<p>x</p>").unwrap();
        assert!(!path.exists());
    }
}
