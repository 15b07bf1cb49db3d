use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::accuracy::{AnnotationSession, QaReport};

/// Read a whole UTF-8 text file
pub async fn read_text_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    debug!("Reading text from {}", path.display());

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Read all of standard input as UTF-8 text
pub async fn read_stdin_async() -> Result<String> {
    let mut content = String::new();
    tokio::io::stdin()
        .read_to_string(&mut content)
        .await
        .context("Failed to read standard input")?;
    Ok(content)
}

/// Load an annotation map of the form `{"<case id>": {"verdict": bool, "comment": str}}`
pub async fn read_annotations_async<P: AsRef<Path>>(file_path: P) -> Result<AnnotationSession> {
    let path = file_path.as_ref();
    let content = read_text_async(path).await?;
    let session: AnnotationSession = serde_json::from_str(&content)
        .with_context(|| format!("Invalid annotation JSON in {}", path.display()))?;

    info!("Loaded {} annotations from {}", session.len(), path.display());
    Ok(session)
}

/// Write a QA report as pretty JSON, creating parent directories
pub async fn write_report_async<P: AsRef<Path>>(file_path: P, report: &QaReport) -> Result<()> {
    let path = file_path.as_ref();
    let content = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Wrote {} report with {} rows to {}", report.class, report.results.len(), path.display());
    Ok(())
}
