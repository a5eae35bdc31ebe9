//! Prompt port - synchronous console input
//!
//! The wizard blocks on user input between every state transition, so the
//! whole interaction surface is one capability: print a message, read a
//! line. Injecting it keeps the selection loops scriptable in tests.

/// Synchronous `prompt(message) -> string` capability
pub trait Prompt {
    /// Display `message` and block until the user answers with a line.
    /// The returned string carries no trailing newline.
    fn ask(&mut self, message: &str) -> String;
}

/// Scripted input source for driving the wizard loops in tests
#[cfg(test)]
pub struct ScriptedPrompt {
    inputs: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> String {
        self.inputs
            .pop_front()
            .unwrap_or_else(|| panic!("prompt script exhausted at: {message}"))
    }
}
