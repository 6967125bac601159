use std::io::Write;

use anyhow::Result;
use shared::domain::{ScheduleItem, Theme};

pub const NO_RESULTS_MESSAGE: &str = "No talks found matching criteria.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load schedule. Please try again.";

/// Non-schedule states the view can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoResults,
    LoadFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoResults => NO_RESULTS_MESSAGE,
            Self::LoadFailed => LOAD_FAILED_MESSAGE,
        }
    }
}

/// Presentation seam. Each call fully replaces what was shown before.
pub trait Renderer {
    fn apply_theme(&mut self, theme: Theme) -> Result<()>;
    fn render_schedule(&mut self, items: &[ScheduleItem]) -> Result<()>;
    fn render_notice(&mut self, notice: Notice) -> Result<()>;
}

struct Palette {
    time: &'static str,
    title: &'static str,
    muted: &'static str,
    accent: &'static str,
}

const DARK: Palette = Palette {
    time: "\x1b[96m",
    title: "\x1b[1;97m",
    muted: "\x1b[37m",
    accent: "\x1b[93m",
};

const LIGHT: Palette = Palette {
    time: "\x1b[34m",
    title: "\x1b[1;30m",
    muted: "\x1b[90m",
    accent: "\x1b[35m",
};

const RESET: &str = "\x1b[0m";
const TIME_COLUMN: usize = 20;

/// Plain-text schedule for terminals. Colors follow the theme unless
/// disabled.
pub struct TextRenderer<W> {
    out: W,
    theme: Theme,
    color: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            theme: Theme::default(),
            color,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, pick: fn(&Palette) -> &'static str) -> String {
        if !self.color {
            return text.to_string();
        }
        let palette = match self.theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        };
        format!("{}{text}{RESET}", pick(palette))
    }

    fn write_item(&mut self, item: &ScheduleItem) -> Result<()> {
        let time = self.paint(
            &format!("{:<width$}", item.time_range(), width = TIME_COLUMN),
            |p| p.time,
        );
        let indent = " ".repeat(TIME_COLUMN);
        match item {
            ScheduleItem::Break(brk) => {
                let title = self.paint(&format!("🍽️ {}", brk.title), |p| p.accent);
                writeln!(self.out, "{time}{title}")?;
            }
            ScheduleItem::Talk(item) => {
                let talk = &item.talk;
                let title = self.paint(&talk.title, |p| p.title);
                let speakers = self.paint(&format!("by {}", talk.speakers.join(", ")), |p| p.muted);
                writeln!(self.out, "{time}{title}")?;
                writeln!(self.out, "{indent}{speakers}")?;
                if !talk.description.is_empty() {
                    writeln!(self.out, "{indent}{}", talk.description)?;
                }
                if !talk.category.is_empty() {
                    let tags: Vec<String> =
                        talk.category.iter().map(|tag| format!("[{tag}]")).collect();
                    let tags = self.paint(&tags.join(" "), |p| p.accent);
                    writeln!(self.out, "{indent}{tags}")?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn apply_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn render_schedule(&mut self, items: &[ScheduleItem]) -> Result<()> {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                writeln!(self.out)?;
            }
            self.write_item(item)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_notice(&mut self, notice: Notice) -> Result<()> {
        let message = self.paint(notice.message(), |p| p.muted);
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
