//! Console report: banners, one line per probe, optional hint lines.
//!
//! Everything goes through a generic writer so tests can capture the output.
//! Color applies to category labels and the fatal message only.

use crate::probe::{Category, Hint, ProbeResult, extract_hint};
use crate::spec::LoadError;

use colored::{Color, Colorize};
use std::fmt::Display;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 50;
const PATH_COLUMN: usize = 40;
const HINT_INDENT: &str = "       -> ";
const BODY_PREVIEW_CHARS: usize = 100;

pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(BANNER_WIDTH))
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn fatal(&mut self, err: &LoadError) -> io::Result<()> {
        let msg = format!("Failed to download OpenAPI spec: {}", err);
        let msg = self.paint(&msg, Color::BrightRed);
        writeln!(self.out, "{}", msg)?;
        self.out.flush()
    }

    /// Print the path column before the request goes out.
    pub fn start_probe(&mut self, path: &str) -> io::Result<()> {
        write!(self.out, "[TEST] {:<width$} ... ", path, width = PATH_COLUMN)?;
        self.out.flush()
    }

    /// Finish the line started by `start_probe` and add any detail line.
    pub fn finish_probe(&mut self, result: &ProbeResult, show_body: bool) -> io::Result<()> {
        let category = Category::from_status(result.status);
        let label = format!("{} ({})", category.label(), result.status);
        let label = self.paint(&label, category_color(category));
        writeln!(self.out, "{}", label)?;

        match category {
            Category::ParamError => match extract_hint(&result.body) {
                Hint::Message(msg) => writeln!(self.out, "{}Hint: {}", HINT_INDENT, msg)?,
                Hint::Raw(preview) => writeln!(self.out, "{}Raw: {}...", HINT_INDENT, preview)?,
            },
            Category::Success if show_body => {
                let preview: String = result.body.chars().take(BODY_PREVIEW_CHARS).collect();
                writeln!(self.out, "{}Body: {}", HINT_INDENT, preview)?;
            }
            _ => {}
        }

        self.out.flush()
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Success => Color::BrightGreen,
        Category::ParamError => Color::BrightYellow,
        Category::NotFound | Category::Failed => Color::BrightRed,
    }
}
