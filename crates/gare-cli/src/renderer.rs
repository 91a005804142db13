//! Terminal rendering for markdown produced by the core display types.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as is.

use std::fmt::Display;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::White);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_fg(Color::AnsiValue(244));
        skin.bullet.set_fg(Color::Cyan);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                self.skin.print_inline(line);
                println!();
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render anything with a markdown `Display` implementation
    pub fn show(&self, value: &impl Display) -> Result<()> {
        self.render(&value.to_string())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("- **Metz**\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
