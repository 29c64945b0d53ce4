//! Dry-run listing of the planned documentation tree.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::layout::{EntryKind, Plan, PlanEntry};
use crate::prompt::{confirm, ConfirmOptions, Confirmation, Prompter};

const RULE_WIDTH: usize = 50;

/// How console output is decorated. Passed explicitly to every printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub color: bool,
}

impl DisplayOptions {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn fresh(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }
}

/// Prints what a run would create or update, then asks to proceed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructurePreview {
    display: DisplayOptions,
}

impl StructurePreview {
    pub fn new(display: DisplayOptions) -> Self {
        Self { display }
    }

    /// Writes the listing of `plan` to `out`. Touches nothing on disk.
    pub fn render(&self, plan: &Plan, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.display.heading("📋 Structure Preview:"))?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        for entry in plan.iter() {
            writeln!(out, "{}", self.line(entry))?;
        }
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            out,
            "Legend: {}, Normal = Existing",
            self.display.fresh("Green = New files/folders")
        )?;
        writeln!(
            out,
            "Note: Existing MDX files will be preserved, category.json files will be updated"
        )?;
        Ok(())
    }

    /// Renders the listing to stdout and asks for confirmation.
    pub fn preview_and_confirm(
        &self,
        plan: &Plan,
        prompter: &mut dyn Prompter,
        options: &ConfirmOptions,
    ) -> Result<Confirmation> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(plan, &mut out)?;
        out.flush()?;
        drop(out);
        confirm(prompter, options, &mut io::stdout())
    }

    /// One listing line: existing entries plain, new ones highlighted and tagged.
    pub fn line(&self, entry: &PlanEntry) -> String {
        let exists = entry.path.exists();
        let indent = "  ".repeat(entry.depth);
        let icon = if entry.is_dir() { "📂" } else { "📄" };
        let suffix = match entry.kind {
            EntryKind::Category { .. } if exists => " (will be updated)",
            _ => "",
        };
        if exists {
            format!("{indent}{icon} {}{suffix}", entry.display_name)
        } else {
            format!(
                "{indent}{icon} {} (new){suffix}",
                self.display.fresh(&entry.display_name)
            )
        }
    }
}
