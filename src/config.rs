//! Merge run options.
//!
//! Options come from three tiers, lowest to highest priority:
//! 1. **Defaults** - skip missing inputs, pretty output
//! 2. **Environment** - `PRESET_MERGE_MISSING` (`skip`/`fail`) and
//!    `PRESET_MERGE_STYLE` (`pretty`/`compact`)
//! 3. **CLI flags** - `--strict`, `--compact`

use serde_json::Value;

/// What to do with an input path that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Warn and continue with the remaining inputs (default)
    #[default]
    Skip,
    /// Abort the run
    Fail,
}

impl MissingPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Some(MissingPolicy::Skip),
            "fail" | "strict" => Some(MissingPolicy::Fail),
            _ => None,
        }
    }
}

/// JSON layout of the merged document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Two-space indentation (default)
    #[default]
    Pretty,
    /// Single line
    Compact,
}

impl OutputStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(OutputStyle::Pretty),
            "compact" => Some(OutputStyle::Compact),
            _ => None,
        }
    }

    /// Render a document, newline-terminated.
    pub fn render(self, doc: &Value) -> serde_json::Result<String> {
        let mut text = match self {
            OutputStyle::Pretty => serde_json::to_string_pretty(doc)?,
            OutputStyle::Compact => serde_json::to_string(doc)?,
        };
        text.push('\n');
        Ok(text)
    }
}

/// Options for one merge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    pub missing: MissingPolicy,
    pub style: OutputStyle,
}

impl MergeOptions {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(missing) = std::env::var("PRESET_MERGE_MISSING")
            && let Some(policy) = MissingPolicy::from_str(&missing)
        {
            options.missing = policy;
        }

        if let Ok(style) = std::env::var("PRESET_MERGE_STYLE")
            && let Some(style) = OutputStyle::from_str(&style)
        {
            options.style = style;
        }

        options
    }
}
