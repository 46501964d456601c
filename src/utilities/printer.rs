//! Console printer with ANSI color support.

use serde::{Deserialize, Serialize};

/// Available colors for printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterColor {
    Magenta,
    Yellow,
    White,
    BoldCyan,
    BoldMagenta,
    BoldYellow,
}

impl PrinterColor {
    /// ANSI escape code for this color.
    fn ansi_code(&self) -> &'static str {
        match self {
            Self::Magenta => "\x1b[35m",
            Self::Yellow => "\x1b[33m",
            Self::White => "\x1b[37m",
            Self::BoldCyan => "\x1b[1;36m",
            Self::BoldMagenta => "\x1b[1;35m",
            Self::BoldYellow => "\x1b[1;33m",
        }
    }
}

/// ANSI reset code.
const RESET: &str = "\x1b[0m";

/// A piece of colored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    pub text: String,
    pub color: PrinterColor,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, color: PrinterColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Printer for console output. With color disabled it emits plain text.
#[derive(Debug, Clone)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Printer {
    /// Create a new `Printer`.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A printer without ANSI codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Wrap `content` in the escape codes for `color`.
    pub fn paint(&self, content: &str, color: PrinterColor) -> String {
        if self.color {
            format!("{}{}{}", color.ansi_code(), content, RESET)
        } else {
            content.to_string()
        }
    }

    /// Join colored segments into one line.
    pub fn line(&self, segments: &[ColoredText]) -> String {
        segments
            .iter()
            .map(|segment| self.paint(&segment.text, segment.color))
            .collect()
    }
}
