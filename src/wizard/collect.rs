use crate::context::Context;
use anyhow::Result;
use tracing::debug;

/// Trim surrounding whitespace and lowercase an answer
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reads typed values from the operator.
///
/// No collector reports malformed answers as errors: confirm and choice
/// prompts ask again, integers fall back to "no value". The only error is a
/// closed input stream.
pub struct Collector<'a> {
    ctx: &'a Context,
}

impl<'a> Collector<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    fn read(&self, prompt: &str) -> Result<String> {
        match self.ctx.input.line(prompt)? {
            Some(line) => Ok(line),
            None => anyhow::bail!("Input stream closed before the wizard finished"),
        }
    }

    /// Read one answer, trimmed and lowercased. Returns an empty string
    /// when the operator just presses return.
    pub fn scalar(&self, prompt: &str) -> Result<String> {
        Ok(normalize(&self.read(prompt)?))
    }

    /// Read one answer keeping its case, optionally without echo
    pub fn verbatim(&self, prompt: &str, masked: bool) -> Result<String> {
        let answer = if masked {
            self.ctx.input.secret(prompt)?
        } else {
            self.ctx.input.line(prompt)?
        };
        match answer {
            Some(line) => Ok(line.trim().to_string()),
            None => anyhow::bail!("Input stream closed before the wizard finished"),
        }
    }

    /// Ask a yes/no question until the operator answers `yes` or `no`
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        loop {
            match self.scalar(prompt)?.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                other => {
                    debug!(answer = other, "rejected confirm answer");
                    self.ctx.output.warning("Please answer 'yes' or 'no'");
                }
            }
        }
    }

    /// Read lines until an empty one is submitted
    pub fn list(&self, prompt: &str) -> Result<Vec<String>> {
        self.ctx.output.info(prompt);
        self.ctx
            .output
            .info("Enter 1 value per line. Press 'return' when done");

        let mut values = Vec::new();
        loop {
            let line = self.read("> ")?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            values.push(line.to_string());
        }
        Ok(values)
    }

    /// Read an integer. Empty input yields `default`; anything that does not
    /// parse yields `None` so the caller leaves the setting unchanged.
    pub fn integer(&self, prompt: &str, default: Option<i64>) -> Result<Option<i64>> {
        let answer = self.scalar(prompt)?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                debug!(answer = %answer, "ignored non-numeric answer");
                Ok(None)
            }
        }
    }

    /// Ask until the answer matches one of `options` (case-insensitive) and
    /// return the option as spelled in the list. Empty input selects
    /// `default` when one is given.
    pub fn choice(
        &self,
        prompt: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> Result<String> {
        loop {
            let answer = self.scalar(prompt)?;
            if answer.is_empty() {
                if let Some(default) = default {
                    return Ok(default.to_string());
                }
            }
            if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                return Ok(option.to_string());
            }
            self.ctx
                .output
                .warning(&format!("Please choose one of: {}", options.join(", ")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockFileSystem, MockOutput, MockUserInput};
    use std::sync::Arc;

    fn context(lines: &[&str]) -> (Context, Arc<MockOutput>) {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(
            Arc::new(MockFileSystem::new()),
            Arc::new(MockUserInput::with_lines(lines)),
            output.clone(),
        );
        (ctx, output)
    }

    #[test]
    fn test_scalar_trims_and_lowercases() {
        let (ctx, _) = context(&["  Example.COM  "]);
        let collector = Collector::new(&ctx);

        assert_eq!(collector.scalar("Domain: ").unwrap(), "example.com");
    }

    #[test]
    fn test_scalar_empty_line() {
        let (ctx, _) = context(&[""]);
        let collector = Collector::new(&ctx);

        assert_eq!(collector.scalar("Domain: ").unwrap(), "");
    }

    #[test]
    fn test_verbatim_keeps_case() {
        let (ctx, _) = context(&[" S3cr3T "]);
        let collector = Collector::new(&ctx);

        assert_eq!(collector.verbatim("Password: ", true).unwrap(), "S3cr3T");
    }

    #[test]
    fn test_confirm_reprompts_until_valid() {
        let (ctx, output) = context(&["maybe", "Y", " YES "]);
        let collector = Collector::new(&ctx);

        assert!(collector.confirm("Enable? ").unwrap());
        assert_eq!(output.get_warnings().len(), 2);
    }

    #[test]
    fn test_confirm_no() {
        let (ctx, _) = context(&["no"]);
        let collector = Collector::new(&ctx);

        assert!(!collector.confirm("Enable? ").unwrap());
    }

    #[test]
    fn test_list_collects_until_empty_line() {
        let (ctx, _) = context(&["10.0.0.1", "  10.0.0.2 ", "", "leftover"]);
        let collector = Collector::new(&ctx);

        assert_eq!(
            collector.list("External IPs").unwrap(),
            vec!["10.0.0.1", "10.0.0.2"]
        );
    }

    #[test]
    fn test_list_empty_first_line_yields_empty_list() {
        let (ctx, _) = context(&[""]);
        let collector = Collector::new(&ctx);

        assert!(collector.list("External IPs").unwrap().is_empty());
    }

    #[test]
    fn test_integer_default_and_garbage() {
        let (ctx, _) = context(&["", "seven", "7"]);
        let collector = Collector::new(&ctx);

        assert_eq!(collector.integer("Rotation: ", Some(5)).unwrap(), Some(5));
        assert_eq!(collector.integer("Rotation: ", Some(5)).unwrap(), None);
        assert_eq!(collector.integer("Rotation: ", Some(5)).unwrap(), Some(7));
    }

    #[test]
    fn test_choice_returns_canonical_spelling() {
        let (ctx, output) = context(&["keep", "delete"]);
        let collector = Collector::new(&ctx);

        let policy = collector
            .choice("Policy: ", &["Retain", "Delete", "Recycle"], None)
            .unwrap();

        assert_eq!(policy, "Delete");
        assert_eq!(output.get_warnings().len(), 1);
    }

    #[test]
    fn test_choice_empty_uses_default() {
        let (ctx, _) = context(&[""]);
        let collector = Collector::new(&ctx);

        let policy = collector
            .choice("Policy: ", &["Retain", "Delete"], Some("Retain"))
            .unwrap();

        assert_eq!(policy, "Retain");
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (ctx, _) = context(&[]);
        let collector = Collector::new(&ctx);

        let err = collector.scalar("Domain: ").unwrap_err();
        assert!(err.to_string().contains("Input stream closed"));
    }
}
