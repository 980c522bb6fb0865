//! Output sink for response bodies that are not captured

use crate::config::OutputConfig;
use crate::error::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Output writer that handles file vs stdout
#[derive(Debug, Clone)]
pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write content to configured output
    pub fn write(&self, content: &[u8]) -> Result<()> {
        if let Some(file_path) = &self.config.file {
            self.write_to_file(content, file_path)
        } else {
            self.write_to_stdout(content)
        }
    }

    fn write_to_file(&self, content: &[u8], file_path: &Path) -> Result<()> {
        let mut file = File::create(file_path)?;
        file.write_all(content)?;
        file.flush()?;
        Ok(())
    }

    fn write_to_stdout(&self, content: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        Ok(())
    }
}
