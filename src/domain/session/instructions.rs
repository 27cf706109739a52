//! AgentInstructions - system prompt for the language model.

use std::path::Path;

/// Prompt used when no instructions file is available.
pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful voice assistant for ERP navigation.
You can help users navigate between different modules using voice commands in Arabic or English.
Be friendly, concise, and helpful.";

/// Greeting spoken once a participant joins.
pub const DEFAULT_GREETING: &str =
    "Hello! I'm your voice assistant. You can ask me to navigate to different modules.";

/// Personality and behavior instructions for the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInstructions(String);

impl AgentInstructions {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Reads instructions from `path`, falling back to the built-in prompt.
    ///
    /// A missing, unreadable, or blank file is not an error.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!(path = %path.display(), "Loaded agent instructions");
                Self(text)
            }
            Ok(_) => {
                tracing::warn!(path = %path.display(), "Instructions file is empty, using default");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Instructions file not readable, using default");
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for AgentInstructions {
    fn default() -> Self {
        Self(DEFAULT_INSTRUCTIONS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn no_path_uses_default() {
        assert_eq!(AgentInstructions::load(None).as_str(), DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent_instructions.txt");
        assert_eq!(AgentInstructions::load(Some(&path)).as_str(), DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn reads_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Answer in Arabic unless spoken to in English.").unwrap();
        let instructions = AgentInstructions::load(Some(file.path()));
        assert_eq!(instructions.as_str(), "Answer in Arabic unless spoken to in English.");
    }

    #[test]
    fn blank_file_uses_default() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "   \n").unwrap();
        assert_eq!(
            AgentInstructions::load(Some(file.path())).as_str(),
            DEFAULT_INSTRUCTIONS
        );
    }
}
