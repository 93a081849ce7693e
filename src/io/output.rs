use crate::core::{AnalysisResult, IssueType, Severity};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_metrics(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let m = &result.metrics;
        writeln!(self.writer, "## Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Complexity | {:.1} |", m.complexity)?;
        writeln!(self.writer, "| Coverage | {:.0}% |", m.coverage)?;
        writeln!(self.writer, "| Duplication exposure | {} |", m.duplications)?;
        writeln!(
            self.writer,
            "| Issues | {} errors, {} warnings, {} suggestions |",
            m.issues.errors, m.issues.warnings, m.issues.suggestions
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_issues(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        if result.issues.is_empty() {
            writeln!(self.writer, "No issues found.")?;
            return Ok(());
        }

        writeln!(self.writer, "## Issues")?;
        writeln!(self.writer)?;
        for issue in &result.issues {
            writeln!(
                self.writer,
                "- **{}** [{}] `{}`:{} - {}",
                issue.issue_type, issue.severity, issue.file, issue.diff_line, issue.message
            )?;
            if let Some(suggestion) = &issue.suggestion {
                writeln!(self.writer, "  - Suggestion: {suggestion}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Review Analysis")?;
        writeln!(self.writer)?;
        self.write_metrics(result)?;
        self.write_issues(result)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn issue_tag(issue_type: IssueType) -> ColoredString {
    match issue_type {
        IssueType::Error => "ERROR".red().bold(),
        IssueType::Warning => "WARN".yellow().bold(),
        IssueType::Suggestion => "HINT".cyan(),
    }
}

fn severity_tag(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => "high".red(),
        Severity::Medium => "medium".yellow(),
        Severity::Low => "low".normal(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let m = &result.metrics;
        writeln!(self.writer, "{}", "Review analysis".bold())?;
        writeln!(self.writer, "  complexity:  {:.1}", m.complexity)?;
        writeln!(self.writer, "  coverage:    {:.0}%", m.coverage)?;
        writeln!(self.writer, "  duplication: {}", m.duplications)?;
        writeln!(
            self.writer,
            "  issues:      {} errors, {} warnings, {} suggestions",
            m.issues.errors, m.issues.warnings, m.issues.suggestions
        )?;
        writeln!(self.writer)?;

        for issue in &result.issues {
            writeln!(
                self.writer,
                "{} [{}] {}:{} {}",
                issue_tag(issue.issue_type),
                severity_tag(issue.severity),
                issue.file,
                issue.diff_line,
                issue.message
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnalysisMetrics, Issue, IssueCounts};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            issues: vec![Issue {
                issue_type: IssueType::Error,
                severity: Severity::High,
                file: "src/auth.js".into(),
                diff_line: 3,
                message: "Hardcoded secret or credential assigned to a string literal".into(),
                suggestion: Some("Move the value to an environment variable".into()),
            }],
            metrics: AnalysisMetrics {
                complexity: 2.5,
                coverage: 95.0,
                duplications: 20,
                issues: IssueCounts {
                    errors: 1,
                    warnings: 0,
                    suggestions: 0,
                },
            },
        }
    }

    #[test]
    fn json_writer_round_trips() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_result(&sample_result())
            .unwrap();

        let parsed: AnalysisResult = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, sample_result());
    }

    #[test]
    fn markdown_writer_lists_metrics_and_issues() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_result(&sample_result())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("| Complexity | 2.5 |"));
        assert!(text.contains("src/auth.js"));
        assert!(text.contains("Suggestion:"));
    }

    #[test]
    fn terminal_writer_includes_every_issue() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_result(&sample_result())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("src/auth.js:3"));
    }
}
