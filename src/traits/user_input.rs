use anyhow::Result;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Stdin, Write};
use std::sync::Mutex;

/// Trait for line-oriented operator input to enable testing with mocks.
///
/// Both methods return `Ok(None)` once the input stream is closed.
pub trait UserInput: Send + Sync {
    /// Display a prompt and read one line of text
    fn line(&self, prompt: &str) -> Result<Option<String>>;

    /// Display a prompt and read one line without echoing it
    fn secret(&self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive terminal input using the inquire crate
pub struct InquireUserInput;

impl InquireUserInput {
    fn finish(answer: inquire::error::InquireResult<String>) -> Result<Option<String>> {
        use inquire::InquireError;
        match answer {
            Ok(text) => Ok(Some(text)),
            // Escape behaves like submitting an empty line
            Err(InquireError::OperationCanceled) => Ok(Some(String::new())),
            Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl UserInput for InquireUserInput {
    fn line(&self, prompt: &str) -> Result<Option<String>> {
        use inquire::Text;
        Self::finish(Text::new(prompt).prompt())
    }

    fn secret(&self, prompt: &str) -> Result<Option<String>> {
        use inquire::Password;
        Self::finish(
            Password::new(prompt)
                .without_confirmation()
                .prompt(),
        )
    }
}

/// Plain line reader used when stdin is not a terminal, so answer
/// transcripts can be piped into the wizard.
pub struct LineUserInput<R> {
    reader: Mutex<R>,
}

impl LineUserInput<BufReader<Stdin>> {
    /// Read answers from the process's standard input
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead + Send> LineUserInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }

    fn read(&self, prompt: &str) -> Result<Option<String>> {
        crate::output::prompt(prompt);
        std::io::stdout().flush()?;

        let mut reader = self
            .reader
            .lock()
            .map_err(|_| anyhow::anyhow!("Input reader lock poisoned"))?;
        let mut buffer = String::new();
        if reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }

        let line = buffer.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }
}

impl<R: BufRead + Send> UserInput for LineUserInput<R> {
    fn line(&self, prompt: &str) -> Result<Option<String>> {
        self.read(prompt)
    }

    fn secret(&self, prompt: &str) -> Result<Option<String>> {
        self.read(prompt)
    }
}

/// Mock user input implementation for testing.
///
/// Answers are consumed in order by both `line` and `secret`; once the
/// queue is empty the mock reports a closed input stream.
#[allow(dead_code)]
pub struct MockUserInput {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockUserInput {
    /// Create new mock with no pre-configured responses
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create mock with pre-configured answers
    pub fn with_lines(lines: &[&str]) -> Self {
        let mock = Self::new();
        for line in lines {
            mock.add_response(line);
        }
        mock
    }

    /// Add an answer to the queue
    pub fn add_response(&self, response: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(response.to_string());
    }

    /// Number of answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    /// Every prompt shown so far, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_response(&self, prompt: &str) -> Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.responses.lock().unwrap().pop_front())
    }
}

impl Default for MockUserInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for MockUserInput {
    fn line(&self, prompt: &str) -> Result<Option<String>> {
        self.next_response(prompt)
    }

    fn secret(&self, prompt: &str) -> Result<Option<String>> {
        self.next_response(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_reader_strips_line_endings() {
        let input = LineUserInput::new(Cursor::new("example.com\r\nsecond\n"));

        assert_eq!(input.line("> ").unwrap().as_deref(), Some("example.com"));
        assert_eq!(input.secret("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(input.line("> ").unwrap(), None);
    }

    #[test]
    fn test_line_reader_keeps_empty_lines() {
        let input = LineUserInput::new(Cursor::new("\n"));

        assert_eq!(input.line("> ").unwrap().as_deref(), Some(""));
        assert_eq!(input.line("> ").unwrap(), None);
    }

    #[test]
    fn test_inquire_cancel_and_interrupt() {
        use inquire::InquireError;

        assert_eq!(
            InquireUserInput::finish(Ok("Value".to_string())).unwrap(),
            Some("Value".to_string())
        );
        assert_eq!(
            InquireUserInput::finish(Err(InquireError::OperationCanceled)).unwrap(),
            Some(String::new())
        );
        assert_eq!(
            InquireUserInput::finish(Err(InquireError::OperationInterrupted)).unwrap(),
            None
        );
    }

    #[test]
    fn test_mock_records_prompts() {
        let input = MockUserInput::with_lines(&["yes"]);

        assert_eq!(input.line("Continue? ").unwrap().as_deref(), Some("yes"));
        assert_eq!(input.line("Again? ").unwrap(), None);
        assert_eq!(input.prompts(), vec!["Continue? ", "Again? "]);
        assert_eq!(input.remaining(), 0);
    }
}
