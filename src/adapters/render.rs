use crate::domain::model::EntryRecord;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use serde_json::json;
use std::io::Write;

pub const DEFAULT_SEPARATOR_WIDTH: usize = 60;

/// Markdown-flavoured text blocks, one per entry.
pub struct TextRenderer<W: Write> {
    out: W,
    separator: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_separator_width(out, DEFAULT_SEPARATOR_WIDTH)
    }

    pub fn with_separator_width(out: W, width: usize) -> Self {
        Self {
            out,
            separator: "=".repeat(width),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "Error: {}", message)?;
        Ok(())
    }

    fn record(&mut self, record: &EntryRecord<'_>) -> Result<()> {
        writeln!(self.out, "### {}", record.title)?;
        writeln!(self.out, "[Read More]({})", record.link)?;
        if let Some(explanation) = &record.explanation {
            writeln!(self.out, "**Explanation:** {}", explanation)?;
        }
        writeln!(self.out, "**Summary:** {}", record.summary)?;
        writeln!(self.out, "Published: {}", record.published)?;
        writeln!(self.out, "{}", self.separator)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn notice(&mut self, message: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &json!({ "notice": message }))?;
        writeln!(self.out)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &json!({ "error": message }))?;
        writeln!(self.out)?;
        Ok(())
    }

    fn record(&mut self, record: &EntryRecord<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
