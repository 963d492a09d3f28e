//! Terminal rendering of markdown output.
//!
//! Uses termimad for styled output, or prints the markdown unchanged when
//! color is disabled. In styled output high priorities are shown in bold red
//! and low priorities in grey italics.

use std::fmt::Display;

use anyhow::Result;
use shoplist_core::Priority;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Red);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                // Headers keep their hash so ids stay visible
                if line.starts_with('#') {
                    println!("\x1b[32m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(&emphasize_priority(line));
                    println!();
                }
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

/// Wraps the priority shown on a list line (`[high]` in the detailed layout,
/// `Priority: high` in the entry view) in bold or italic markers. Default
/// priority stays plain.
fn emphasize_priority(line: &str) -> String {
    for (priority, mark) in [(Priority::High, "**"), (Priority::Low, "*")] {
        let name = priority.as_str();
        let tag = format!("[{name}]");
        if let Some(at) = line.rfind(&tag) {
            let (head, tail) = line.split_at(at);
            return format!("{head}{mark}{tag}{mark}{}", &tail[tag.len()..]);
        }
        if let Some(head) = line
            .strip_suffix(name)
            .filter(|head| head.ends_with("Priority: "))
        {
            return format!("{head}{mark}{name}{mark}");
        }
    }
    line.to_string()
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
