use crate::traits::{
    FileSystem, InquireUserInput, LineUserInput, Output, RealFileSystem, TerminalOutput, UserInput,
};
use std::io::IsTerminal;
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub fs: Arc<dyn FileSystem>,
    pub input: Arc<dyn UserInput>,
    pub output: Arc<dyn Output>,
}

impl Context {
    /// Create a new context with real implementations (for production use).
    ///
    /// Interactive prompts are used when stdin is a terminal; otherwise
    /// answers are read line by line from stdin.
    pub fn new() -> Self {
        let input: Arc<dyn UserInput> = if std::io::stdin().is_terminal() {
            Arc::new(InquireUserInput)
        } else {
            Arc::new(LineUserInput::stdin())
        };

        Self {
            fs: Arc::new(RealFileSystem),
            input,
            output: Arc::new(TerminalOutput),
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    pub fn test_with(
        fs: Arc<dyn FileSystem>,
        input: Arc<dyn UserInput>,
        output: Arc<dyn Output>,
    ) -> Self {
        Self { fs, input, output }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            input: Arc::clone(&self.input),
            output: Arc::clone(&self.output),
        }
    }
}
