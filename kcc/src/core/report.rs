//! Structured report lines assembled bottom-up during traversal and
//! rendered top-down afterwards.

/// Aggregated verdict shown in a line's status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Ko,
    Partial,
}

impl Verdict {
    /// Category tag from local success, child success, and whether the
    /// category has tests of its own.
    ///
    /// A category without direct tests cannot be partially successful; it
    /// inherits its children's verdict outright.
    pub fn for_category(success_local: bool, success_children: bool, has_tests: bool) -> Self {
        if !success_local {
            return Verdict::Ko;
        }
        if success_children {
            return Verdict::Ok;
        }
        if has_tests { Verdict::Partial } else { Verdict::Ko }
    }

    /// Text between the tag brackets.
    pub fn tag(self) -> &'static str {
        match self {
            Verdict::Ok => " OK ",
            Verdict::Ko => " KO ",
            Verdict::Partial => " Partial ",
        }
    }
}

/// Kind of report line; controls label coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Category,
    Test,
}

/// Column at which status tags are aligned.
pub const RESULT_PADDING: usize = 75;

/// One report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub depth: usize,
    pub kind: LineKind,
    pub label: String,
    pub verdict: Verdict,
    /// Hint text shown under a failed test line; `Some("")` renders an
    /// empty hint, `None` renders nothing.
    pub hint: Option<String>,
}

impl ReportLine {
    pub fn category(depth: usize, name: &str, verdict: Verdict) -> Self {
        Self {
            depth,
            kind: LineKind::Category,
            label: format!(" - Testing {name}"),
            verdict,
            hint: None,
        }
    }

    pub fn test(depth: usize, label: &str, verdict: Verdict, hint: Option<String>) -> Self {
        Self {
            depth,
            kind: LineKind::Test,
            label: format!("   - {label}"),
            verdict,
            hint,
        }
    }

    /// Indentation prefix for this line's depth.
    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }

    /// Spaces aligning the status tag at [`RESULT_PADDING`] display
    /// columns; empty when the label already reaches the column.
    pub fn padding(&self) -> String {
        let used = self.depth * 2 + self.label.chars().count();
        " ".repeat(RESULT_PADDING.saturating_sub(used))
    }
}
