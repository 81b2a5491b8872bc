use crate::domain::ports::UrlOpener;
use crate::utils::error::Result;
use std::process::{Command, Stdio};

/// Hands URLs to the platform's default handler. Fire-and-forget: the
/// spawned process is never waited on.
#[derive(Debug, Clone, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self
    }

    fn opener_program() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }
}

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<()> {
        tracing::debug!("Opening external URL: {}", url);
        Command::new(Self::opener_program())
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
