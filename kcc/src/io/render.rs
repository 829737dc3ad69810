//! Console rendering of the assembled report buffer.
//!
//! Traversal builds [`ReportLine`]s bottom-up; rendering happens once the
//! depth-0 call returns, in document order, through termcolor so colors
//! degrade cleanly when stdout is not a terminal.

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

use crate::core::report::{LineKind, ReportLine, Verdict};

/// Resolve the color choice for stdout. `ColorChoice::Auto` on a
/// `BufferWriter` does not perform terminal detection, so do it here:
/// emit colors only when stdout is a real terminal, matching the
/// tty-aware behavior the spec calls for.
fn stdout_color_choice() -> ColorChoice {
    if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print the run banner: the canonical category path in bold yellow, a
/// separator rule, and the category description when present.
pub fn print_banner(display_path: &str, description: Option<&str>) -> Result<()> {
    let writer = BufferWriter::stdout(stdout_color_choice());
    let mut buffer = writer.buffer();
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    write!(buffer, "[+] {display_path}")?;
    buffer.reset()?;
    writeln!(buffer)?;
    writeln!(buffer, "------------------------------------")?;
    if let Some(description) = description {
        writeln!(buffer, " {description}")?;
    }
    writer.print(&buffer).context("print banner")?;
    Ok(())
}

/// Render every line to stdout in document order, then one blank
/// separator line. `Ok` lines are skipped when `only_errors` is set.
pub fn print_report(lines: &[ReportLine], only_errors: bool) -> Result<()> {
    let writer = BufferWriter::stdout(stdout_color_choice());
    let mut buffer = writer.buffer();
    render_report(&mut buffer, lines, only_errors)?;
    writer.print(&buffer).context("print report")?;
    Ok(())
}

/// Write the report into any termcolor buffer; unit tests use
/// [`Buffer::no_color`] to assert on plain text.
pub fn render_report(buffer: &mut Buffer, lines: &[ReportLine], only_errors: bool) -> Result<()> {
    for line in lines {
        if only_errors && line.verdict == Verdict::Ok {
            continue;
        }
        render_line(buffer, line)?;
    }
    writeln!(buffer)?;
    Ok(())
}

fn render_line(buffer: &mut Buffer, line: &ReportLine) -> Result<()> {
    write!(buffer, "{}", line.indent())?;
    if line.kind == LineKind::Test && line.verdict == Verdict::Ko {
        buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(buffer, "{}", line.label)?;
        buffer.reset()?;
    } else {
        write!(buffer, "{}", line.label)?;
    }
    write!(buffer, "{}[", line.padding())?;
    buffer.set_color(tag_color(line.verdict).set_bold(true))?;
    write!(buffer, "{}", line.verdict.tag())?;
    buffer.reset()?;
    writeln!(buffer, "]")?;

    if let Some(hint) = &line.hint {
        write!(buffer, "{}     ", line.indent())?;
        buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(buffer, "Hint : {hint}")?;
        buffer.reset()?;
        writeln!(buffer)?;
    }
    Ok(())
}

fn tag_color(verdict: Verdict) -> ColorSpec {
    let mut spec = ColorSpec::new();
    let color = match verdict {
        Verdict::Ok => Color::Green,
        Verdict::Ko => Color::Red,
        Verdict::Partial => Color::Yellow,
    };
    spec.set_fg(Some(color));
    spec
}
