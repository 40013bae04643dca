use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Validation check result status
#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed with warnings
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    fn is_warning(&self) -> bool {
        matches!(self, CheckStatus::Warning(_))
    }

    fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning(_) => "⚠",
            CheckStatus::Failed(_) => "✗",
        }
    }
}

/// Stage of the validation a check belongs to, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Source files exist and tokenize
    Files,
    /// Required metadata fields are present and numeric
    Metadata,
    /// Curve sections have the instrument's column layout
    Curves,
    /// Curves normalize to finite values
    Normalization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Files => write!(f, "Files"),
            Stage::Metadata => write!(f, "Metadata"),
            Stage::Curves => write!(f, "Curves"),
            Stage::Normalization => write!(f, "Normalization"),
        }
    }
}

/// Individual validation check result
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Stage the check ran in
    pub stage: Stage,
    /// Name of the validation check
    pub name: String,
    /// Result status of the check
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(stage: Stage, name: impl Into<String>) -> Self {
        Self {
            stage,
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(
        stage: Stage,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(
        stage: Stage,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// Complete validation report for one Rock-Eval sample
#[derive(Debug)]
pub struct ValidationReport {
    /// Individual check results, in the order they ran
    pub checks: Vec<ValidationCheck>,
    /// Description of the sample that was validated
    pub target: String,
}

impl ValidationReport {
    /// Create an empty report for the given sample description
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            target: target.into(),
        }
    }

    /// Add a check result
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Check if any check failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// Check if any check in `stage` failed
    pub fn stage_failed(&self, stage: Stage) -> bool {
        self.checks
            .iter()
            .any(|c| c.stage == stage && c.status.is_failed())
    }

    /// Check if any check produced a warning
    pub fn has_warnings(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_warning())
    }

    /// Count the number of successful checks
    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_ok()).count()
    }

    /// Count the number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_warning()).count()
    }

    /// Count the number of failures
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();
            output.push_str(&format!("{}\n", style("Rock-Eval Validation Report").bold().cyan()));
            output.push_str(&format!("{}: {}\n", style("Sample").bold(), self.target));

            let mut current_stage = None;
            for check in &self.checks {
                if current_stage != Some(check.stage) {
                    output.push_str(&format!("\n{}\n", style(check.stage).bold().underlined()));
                    current_stage = Some(check.stage);
                }
                let symbol = check.status.symbol();
                match &check.status {
                    CheckStatus::Ok => {
                        output.push_str(&format!("  [{}] {}\n", style(symbol).green(), check.name));
                    }
                    CheckStatus::Warning(msg) => {
                        output.push_str(&format!(
                            "  [{}] {} - {}: {}\n",
                            style(symbol).yellow(),
                            check.name,
                            style("WARNING").yellow().bold(),
                            msg
                        ));
                    }
                    CheckStatus::Failed(msg) => {
                        output.push_str(&format!(
                            "  [{}] {} - {}: {}\n",
                            style(symbol).red(),
                            check.name,
                            style("FAILED").red().bold(),
                            msg
                        ));
                    }
                }
            }

            output.push_str(&format!(
                "\n{}: {} passed, {} warnings, {} failed\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));
            let verdict = if self.has_failures() {
                style(self.verdict()).red().bold()
            } else if self.has_warnings() {
                style(self.verdict()).yellow().bold()
            } else {
                style(self.verdict()).green().bold()
            };
            output.push_str(&format!("{}\n", verdict));
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rock-Eval Validation Report")?;
        writeln!(f, "Sample: {}", self.target)?;

        let mut current_stage = None;
        for check in &self.checks {
            if current_stage != Some(check.stage) {
                writeln!(f)?;
                writeln!(f, "{}", check.stage)?;
                current_stage = Some(check.stage);
            }
            write!(f, "  [{}] {}", check.status.symbol(), check.name)?;
            match &check.status {
                CheckStatus::Ok => writeln!(f)?,
                CheckStatus::Warning(msg) => writeln!(f, " - WARNING: {}", msg)?,
                CheckStatus::Failed(msg) => writeln!(f, " - FAILED: {}", msg)?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;
        writeln!(f, "{}", self.verdict())
    }
}
