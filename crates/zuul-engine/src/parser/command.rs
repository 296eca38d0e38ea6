//! Command parsing for player input.

use std::fmt;

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// Every direction `go` understands.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from a string. Only the full lowercase names match.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.name() == s)
    }

    /// Get the display name for this direction. Also the exit key used in rooms.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognised command word.
///
/// This is the single registration point for commands: the vocabulary is
/// derived from [`CommandWord::ALL`] and the session dispatches on the
/// variant with an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    /// Show help text.
    Help,
    /// Move through an exit.
    Go,
    /// List the items in the current room.
    Look,
    /// Try to pick something up.
    Pickup,
    /// Leave the game.
    Quit,
}

impl CommandWord {
    /// All command words, in the order `help` lists them.
    pub const ALL: [CommandWord; 5] = [
        Self::Help,
        Self::Go,
        Self::Look,
        Self::Pickup,
        Self::Quit,
    ];

    /// The word the player types.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Go => "go",
            Self::Look => "look",
            Self::Pickup => "pickup",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of command words the parser accepts.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    words: &'static [CommandWord],
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: &CommandWord::ALL,
        }
    }
}

impl Vocabulary {
    /// Look up a word. Matching is exact and case-sensitive.
    pub fn lookup(&self, word: &str) -> Option<CommandWord> {
        self.words.iter().copied().find(|w| w.as_str() == word)
    }

    /// All command words on one line, separated by spaces.
    pub fn show_commands(&self) -> String {
        self.words
            .iter()
            .map(CommandWord::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A parsed player command.
///
/// A command without a [`CommandWord`] is "unknown": the first word of the
/// input was not in the vocabulary, or there was no input at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    word: Option<CommandWord>,
    second_word: Option<String>,
}

impl Command {
    /// Create a command. Pass `None` as `word` for an unknown command.
    pub fn new(word: Option<CommandWord>, second_word: Option<String>) -> Self {
        Self { word, second_word }
    }

    /// An unknown command with no second word.
    pub fn unknown() -> Self {
        Self::new(None, None)
    }

    /// The command word, or `None` if the command is unknown.
    pub fn word(&self) -> Option<CommandWord> {
        self.word
    }

    /// The second word, if one was given.
    pub fn second_word(&self) -> Option<&str> {
        self.second_word.as_deref()
    }

    /// Whether the command word was not recognised.
    pub fn is_unknown(&self) -> bool {
        self.word.is_none()
    }

    /// Whether a second word was given.
    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }
}

/// Parse a line of player input into a command.
///
/// Only the first two whitespace-separated words are considered; anything
/// after them is ignored. The second word is kept even when the first is
/// not recognised.
pub fn parse_command(input: &str, vocabulary: &Vocabulary) -> Command {
    let mut words = input.split_whitespace();
    let first = words.next();
    let second = words.next().map(str::to_string);

    let word = first.and_then(|w| vocabulary.lookup(w));
    log::trace!("parsed {input:?} as {word:?} {second:?}");
    Command::new(word, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(input: &str) -> Command {
        parse_command(input, &Vocabulary::default())
    }

    #[test]
    fn parse_each_command_word() {
        for word in CommandWord::ALL {
            let command = parse(word.as_str());
            assert_eq!(command.word(), Some(word));
            assert!(!command.has_second_word());
        }
    }

    #[test]
    fn parse_go_direction() {
        assert_eq!(
            parse("go north"),
            Command::new(Some(CommandWord::Go), Some("north".to_string()))
        );
    }

    #[test]
    fn extra_words_ignored() {
        let command = parse("go north quickly please");
        assert_eq!(command.word(), Some(CommandWord::Go));
        assert_eq!(command.second_word(), Some("north"));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        let command = parse("   quit \t now  ");
        assert_eq!(command.word(), Some(CommandWord::Quit));
        assert_eq!(command.second_word(), Some("now"));
    }

    #[test]
    fn parse_unknown() {
        let command = parse("dance wildly");
        assert!(command.is_unknown());
        assert_eq!(command.second_word(), Some("wildly"));
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(parse(""), Command::unknown());
        assert_eq!(parse("   "), Command::unknown());
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert!(parse("Go north").is_unknown());
        assert!(parse("QUIT").is_unknown());
    }

    #[test]
    fn show_commands_lists_vocabulary() {
        assert_eq!(
            Vocabulary::default().show_commands(),
            "help go look pickup quit"
        );
    }

    #[test]
    fn vocabulary_lookup() {
        let vocabulary = Vocabulary::default();
        assert_eq!(vocabulary.lookup("pickup"), Some(CommandWord::Pickup));
        assert_eq!(vocabulary.lookup("look"), Some(CommandWord::Look));
        assert_eq!(vocabulary.lookup("take"), None);
    }

    #[test]
    fn direction_parse_round_trips_names() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(dir.name()), Some(dir));
        }
    }

    #[test]
    fn direction_parse_rejects_other_tokens() {
        assert_eq!(Direction::parse("n"), None);
        assert_eq!(Direction::parse("North"), None);
        assert_eq!(Direction::parse("northeast"), None);
        assert_eq!(Direction::parse(""), None);
    }

    proptest! {
        #[test]
        fn unrecognised_first_word_is_unknown(
            first in "[a-zA-Z?!]{1,12}",
            rest in proptest::option::of("[a-z]{1,8}"),
        ) {
            prop_assume!(Vocabulary::default().lookup(&first).is_none());
            let line = match &rest {
                Some(second) => format!("{first} {second}"),
                None => first.clone(),
            };
            let command = parse(&line);
            prop_assert!(command.is_unknown());
            prop_assert_eq!(command.second_word(), rest.as_deref());
        }

        #[test]
        fn second_word_is_second_token(
            words in proptest::collection::vec("[a-z]{1,8}", 0..6),
        ) {
            let command = parse(&words.join("  "));
            prop_assert_eq!(command.second_word(), words.get(1).map(String::as_str));
        }
    }
}
