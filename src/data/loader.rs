// ============================================================
// Layer 4 — Essay Loader
// ============================================================
// Reads an essay from disk. Two formats are accepted:
//
//   .txt   → read as UTF-8, unchanged
//   .docx  → parsed with docx-rs, one line per paragraph
//
// How .docx files work:
//   A .docx file is a ZIP archive of XML files. docx-rs gives us
//   a typed tree over it:
//
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text (the actual words!)
//
// Empty paragraphs are KEPT as empty lines so the text keeps
// the student's paragraph layout.
//
// Anything else (including legacy binary .doc) is rejected.
//
// Reference: docx-rs crate documentation

use anyhow::{bail, Context, Result};
use docx_rs::read_docx;
use std::{fs, path::{Path, PathBuf}};

use crate::domain::essay::Essay;
use crate::domain::traits::EssaySource;

/// An essay stored in a single file
pub struct EssayFile {
    path: PathBuf,
}

impl EssayFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EssaySource for EssayFile {
    fn load(&self) -> Result<Essay> {
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let text = match ext.as_deref() {
            Some("txt") => fs::read_to_string(&self.path)
                .with_context(|| format!("Cannot read '{}'", self.path.display()))?,
            Some("docx") => {
                let bytes = fs::read(&self.path)
                    .with_context(|| format!("Cannot read '{}'", self.path.display()))?;
                docx_text(&bytes)
                    .with_context(|| format!("Failed to process '{}'", self.path.display()))?
            }
            _ => bail!(
                "Invalid file format for '{}'. Please provide a .docx or .txt file.",
                self.path.display()
            ),
        };

        let source = file_label(&self.path);
        tracing::debug!("Loaded essay '{}' ({} chars)", source, text.chars().count());
        Ok(Essay::new(source, text))
    }
}

/// Extract the plain text of a .docx file held in memory.
pub fn docx_text(bytes: &[u8]) -> Result<String> {
    let docx = read_docx(bytes)
        .map_err(|e| anyhow::anyhow!("docx-rs parse error: {:?}", e))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // Only paragraphs carry essay text (tables, images etc. are skipped)
        if let DocumentChild::Paragraph(para) = child {
            paragraphs.push(extract_paragraph_text(para));
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Paragraph → Run → Text. Runs are parts of the same
/// sentence, so they are concatenated with no separator.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn write_docx(path: &Path, paragraphs: &[&str]) {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        fs::write(path, buf.into_inner()).unwrap();
    }

    #[test]
    fn test_loads_txt() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.txt");
        fs::write(&path, "My essay.\nSecond line.").unwrap();

        let essay = EssayFile::new(&path).load().unwrap();
        assert_eq!(essay.source, "essay.txt");
        assert_eq!(essay.text, "My essay.\nSecond line.");
    }

    #[test]
    fn test_loads_docx_paragraphs() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.docx");
        write_docx(&path, &["First paragraph.", "", "Third paragraph."]);

        let essay = EssayFile::new(&path).load().unwrap();
        assert_eq!(essay.text, "First paragraph.\n\nThird paragraph.");
    }

    #[test]
    fn test_docx_runs_join_without_separator() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Ess"))
                .add_run(Run::new().add_text("ay").bold())
                .add_run(Run::new().add_text("s.")),
        );
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();

        assert_eq!(docx_text(&buf.into_inner()).unwrap(), "Essays.");
    }

    #[test]
    fn test_rejects_other_formats() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.doc");
        fs::write(&path, b"\xD0\xCF\x11\xE0").unwrap();

        let err = EssayFile::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Invalid file format"));
    }

    #[test]
    fn test_corrupt_docx_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        fs::write(&path, b"not a zip").unwrap();

        assert!(EssayFile::new(&path).load().is_err());
    }
}
