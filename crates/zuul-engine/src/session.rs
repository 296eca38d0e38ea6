//! Game session management.

use zuul_core::{Room, RoomId, World, WorldError, build_world};

use crate::config::GameConfig;
use crate::error::{PlayError, PlayResult};
use crate::parser::{Command, CommandWord, Direction, Vocabulary, parse_command};

/// Printed once the game loop has ended.
pub const FAREWELL: &str = "Thank you for playing.  Good bye.";

/// Whether the session is still accepting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Reading and executing commands.
    #[default]
    Running,
    /// The player quit or the input ran out. Final.
    Terminated,
}

/// What happened after a command was executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep going; show this text to the player.
    Continue(String),
    /// The game is over.
    Quit,
}

/// A single-player game session.
pub struct Game {
    /// The world being explored.
    world: World,
    /// Where the player is.
    current: RoomId,
    state: GameState,
    vocabulary: Vocabulary,
}

impl Game {
    /// Create a session with the player in `start`.
    pub fn new(world: World, start: RoomId) -> PlayResult<Self> {
        if world.room(start).is_none() {
            return Err(WorldError::RoomNotFound(start).into());
        }
        Ok(Self {
            world,
            current: start,
            state: GameState::Running,
            vocabulary: Vocabulary::default(),
        })
    }

    /// Create a session on the campus map, starting in the configured room.
    pub fn from_config(config: &GameConfig) -> PlayResult<Self> {
        let (world, _) = build_world()?;
        let start = world.resolve(&config.start_room)?;
        log::debug!("starting in {} ({start})", config.start_room);
        Self::new(world, start)
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The id of the room the player is in.
    pub fn current_room_id(&self) -> RoomId {
        self.current
    }

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&Room> {
        self.world.room(self.current)
    }

    /// Current run state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Shorthand for `state() == GameState::Running`.
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// End the session without a `quit` command, e.g. when input runs out.
    pub fn terminate(&mut self) {
        self.state = GameState::Terminated;
    }

    /// The opening banner followed by a description of the starting room.
    pub fn welcome(&self) -> PlayResult<String> {
        Ok(format!(
            "\nWelcome to the World of Zuul!\n\
             World of Zuul is a new, incredibly boring adventure game.\n\
             Type 'help' if you need help.\n\n\
             {}",
            self.location()?.long_description()
        ))
    }

    /// Parse and execute one line of input.
    pub fn process(&mut self, input: &str) -> PlayResult<Outcome> {
        let command = parse_command(input, &self.vocabulary);
        self.execute(&command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: &Command) -> PlayResult<Outcome> {
        if !self.is_running() {
            log::debug!("ignoring {command:?}, session has ended");
            return Ok(Outcome::Quit);
        }

        let Some(word) = command.word() else {
            return Err(PlayError::UnknownCommand);
        };

        match word {
            CommandWord::Help => self.do_help(),
            CommandWord::Go => self.do_go(command.second_word()),
            CommandWord::Look => self.do_look(),
            CommandWord::Pickup => self.do_pickup(),
            CommandWord::Quit => self.do_quit(command),
        }
    }

    fn location(&self) -> PlayResult<&Room> {
        self.current_room()
            .ok_or(PlayError::World(WorldError::RoomNotFound(self.current)))
    }

    fn do_help(&self) -> PlayResult<Outcome> {
        Ok(Outcome::Continue(format!(
            "You are lost. You are alone. You wander\n\
             around at the university.\n\
             Your command words are:\n\
             {}",
            self.vocabulary.show_commands()
        )))
    }

    fn do_go(&mut self, direction: Option<&str>) -> PlayResult<Outcome> {
        let direction = direction.ok_or(PlayError::GoWhere)?;

        let room = self.location()?;
        let destination = Direction::parse(direction)
            .and_then(|dir| room.exit(dir.name()))
            .ok_or(PlayError::NoDoor)?;

        log::debug!("moving {direction} from {} to {destination}", self.current);
        self.current = destination;
        Ok(Outcome::Continue(self.location()?.long_description()))
    }

    fn do_look(&self) -> PlayResult<Outcome> {
        let items = self.location()?.items();
        if items.is_empty() {
            return Ok(Outcome::Continue(
                "There are no items in the room.".to_string(),
            ));
        }

        let lines: Vec<String> = items.iter().map(ToString::to_string).collect();
        Ok(Outcome::Continue(lines.join("\n")))
    }

    // Items stay where they are; there is no player inventory.
    fn do_pickup(&self) -> PlayResult<Outcome> {
        Ok(Outcome::Continue("You picked up nothing!".to_string()))
    }

    fn do_quit(&mut self, command: &Command) -> PlayResult<Outcome> {
        if command.has_second_word() {
            return Err(PlayError::QuitWhat);
        }
        self.state = GameState::Terminated;
        Ok(Outcome::Quit)
    }
}
