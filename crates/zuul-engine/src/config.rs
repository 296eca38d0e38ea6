//! Configuration for a game session.

use zuul_core::START_ROOM;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Name of the room the player starts in.
    pub start_room: String,
    /// Prompt printed before each line of input.
    pub prompt: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_room: START_ROOM.to_string(),
            prompt: "> ".to_string(),
        }
    }
}

impl GameConfig {
    /// Set the starting room by name.
    pub fn with_start_room(mut self, name: impl Into<String>) -> Self {
        self.start_room = name.into();
        self
    }

    /// Set the input prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.start_room, "courtyard");
        assert_eq!(cfg.prompt, "> ");
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_start_room("cellar")
            .with_prompt("zuul$ ");
        assert_eq!(cfg.start_room, "cellar");
        assert_eq!(cfg.prompt, "zuul$ ");
    }
}
