//! The facade: single entry point for front ends.
//!
//! ## Commands
//!
//! Every mutation goes through [`Maze`]. Boolean commands (`insert_tile`,
//! `move_player`, ...) report rule violations as `false` so a UI can just
//! shrug and wait for the next input; the `try_*` variants return the
//! [`MazeError`] for callers that want the reason.
//!
//! ## Notifications
//!
//! Observers hear about each committed change exactly once. Bot search
//! trials are dispatched as [`Dispatch::Trial`] and stay silent.
//!
//! ## Example
//!
//! ```
//! use shifting_maze::core::{Direction, GameConfig};
//! use shifting_maze::facade::Maze;
//! use shifting_maze::game::Phase;
//!
//! let mut maze = Maze::new(GameConfig::default().all_human()).unwrap();
//!
//! assert!(maze.insert_tile(Direction::Down, 3));
//! assert_eq!(maze.phase(), Phase::AwaitingMove);
//!
//! // Staying put is always allowed
//! let here = maze.player_position(maze.current_player()).unwrap();
//! assert!(maze.move_player(here.row, here.col));
//!
//! assert!(maze.undo());
//! assert_eq!(maze.phase(), Phase::AwaitingMove);
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::observer::{Dispatch, Observer, ObserverId, ObserverRegistry};
use crate::board::{Board, Insertion, RotationDirection, Tile, Treasure};
use crate::bot::{GreedyStrategy, Simulator, Strategy, TurnPlan};
use crate::core::{
    validate_player_count, Direction, GameConfig, GameRng, MazeError, PlayerId, PlayerKind, Position,
    Result,
};
use crate::game::{Game, GameSetup, Phase, Player};
use crate::history::{Command, History, InsertCommand, MoveCommand};

const BOT_STREAM: &str = "bot";

/// A maze game session.
pub struct Maze {
    game: Game,
    history: History,
    config: GameConfig,

    // === Randomness ===
    /// Root stream; forked once per game.
    rng: GameRng,
    /// Independent stream for bot fallbacks.
    bot_rng: GameRng,

    strategy: Box<dyn Strategy>,
    observers: ObserverRegistry,
}

impl Maze {
    /// Start a session with a generated board.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let bot_rng = rng.for_context(BOT_STREAM);
        let game = Game::start(config.player_count, &mut rng.fork())?;

        Ok(Self {
            game,
            history: History::new(),
            config,
            rng,
            bot_rng,
            strategy: Box::new(GreedyStrategy),
            observers: ObserverRegistry::new(),
        })
    }

    /// Start a session from an explicit board and deal.
    ///
    /// The player count comes from the setup; seat kinds and the seed from
    /// `config`.
    pub fn from_setup(config: GameConfig, setup: GameSetup) -> Result<Self> {
        let game = Game::from_setup(setup)?;
        let config = config.with_player_count(game.player_count());
        let rng = GameRng::new(config.seed);
        let bot_rng = rng.for_context(BOT_STREAM);

        Ok(Self {
            game,
            history: History::new(),
            config,
            rng,
            bot_rng,
            strategy: Box::new(GreedyStrategy),
            observers: ObserverRegistry::new(),
        })
    }

    /// Replace the bot strategy.
    #[must_use]
    pub fn with_strategy<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Throw the current game away and deal a new one.
    pub fn start(&mut self, player_count: usize) -> Result<()> {
        validate_player_count(player_count)?;
        let mut deal = self.rng.fork();
        self.game = Game::start(player_count, &mut deal)?;
        self.config.player_count = player_count;
        self.history.clear();
        info!(players = player_count, seed = self.config.seed, "new game");
        self.observers.notify(Dispatch::Commit);
        Ok(())
    }

    /// Reseed, then [`start`](Self::start).
    pub fn start_seeded(&mut self, player_count: usize, seed: u64) -> Result<()> {
        validate_player_count(player_count)?;
        self.config.seed = seed;
        self.rng = GameRng::new(seed);
        self.bot_rng = self.rng.for_context(BOT_STREAM);
        self.start(player_count)
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Push the spare tile into line `index` towards `direction`.
    pub fn insert_tile(&mut self, direction: Direction, index: usize) -> bool {
        report(self.try_insert_tile(direction, index)).is_some()
    }

    pub fn try_insert_tile(&mut self, direction: Direction, index: usize) -> Result<()> {
        let insertion = Insertion::new(direction, index)?;
        self.apply(Box::new(InsertCommand::new(insertion)), Dispatch::Commit)
    }

    /// Turn the spare tile. Only before inserting; not a turn and not
    /// recorded in the history.
    pub fn rotate_extra_tile(&mut self, direction: RotationDirection) -> bool {
        let rotated = report(self.game.rotate_extra_tile(direction)).is_some();
        if rotated {
            self.observers.notify(Dispatch::Commit);
        }
        rotated
    }

    /// Walk the active pawn to `(row, col)`.
    pub fn move_player(&mut self, row: usize, col: usize) -> bool {
        report(self.try_move_player(Position::new(row, col))).is_some()
    }

    pub fn try_move_player(&mut self, destination: Position) -> Result<()> {
        self.apply(Box::new(MoveCommand::new(destination)), Dispatch::Commit)
    }

    /// Undo the last insertion or move. `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.game);
        if undone {
            self.observers.notify(Dispatch::Commit);
        }
        undone
    }

    /// Redo the last undone action. `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = report(self.history.redo(&mut self.game)).unwrap_or(false);
        if redone {
            self.observers.notify(Dispatch::Commit);
        }
        redone
    }

    /// Play a whole turn for the active seat if it is a bot.
    ///
    /// Returns the committed plan, or `None` if it is not a bot's turn.
    pub fn play_bot(&mut self) -> Option<TurnPlan> {
        if self.game.phase() != Phase::AwaitingInsert || !self.is_current_player_bot() {
            return None;
        }
        let player = self.game.current_player();

        let plan = {
            let mut sim = Simulator::observed(&mut self.game, &mut self.observers);
            self.strategy.plan_turn(&mut sim, &mut self.bot_rng)?
        };

        let committed = self
            .apply(Box::new(InsertCommand::new(plan.insertion)), Dispatch::Commit)
            .and_then(|()| self.apply(Box::new(MoveCommand::new(plan.destination)), Dispatch::Commit));
        match committed {
            Ok(()) => {
                debug!(
                    %player,
                    strategy = self.strategy.name(),
                    insertion = %plan.insertion,
                    destination = %plan.destination,
                    "bot turn"
                );
                Some(plan)
            }
            Err(err) => {
                debug!(%player, %err, "bot plan rejected");
                None
            }
        }
    }

    fn apply(&mut self, command: Box<dyn Command>, dispatch: Dispatch) -> Result<()> {
        self.history.execute(&mut self.game, command)?;
        self.observers.notify(dispatch);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.game.board().tile_at(position)
    }

    #[must_use]
    pub fn extra_tile(&self) -> &Tile {
        self.game.board().extra_tile()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.game.player_count()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.game.current_player()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.game.winner()
    }

    #[must_use]
    pub fn forbidden_insertion(&self) -> Option<Insertion> {
        self.game.forbidden_insertion()
    }

    #[must_use]
    pub fn player_position(&self, id: PlayerId) -> Option<Position> {
        self.game.player(id).map(Player::position)
    }

    #[must_use]
    pub fn start_position(&self, id: PlayerId) -> Option<Position> {
        self.game.player(id).map(Player::start)
    }

    /// Revealed objective of a player.
    #[must_use]
    pub fn current_objective(&self, id: PlayerId) -> Option<Treasure> {
        self.game.player(id).and_then(Player::current_objective)
    }

    #[must_use]
    pub fn current_player_objective(&self) -> Option<Treasure> {
        self.game.current().current_objective()
    }

    /// Cards left including the revealed one. 0 for an unknown seat.
    #[must_use]
    pub fn remaining_cards(&self, id: PlayerId) -> usize {
        self.game.player(id).map_or(0, Player::remaining_cards)
    }

    #[must_use]
    pub fn found_objectives(&self, id: PlayerId) -> Vector<Treasure> {
        self.game
            .player(id)
            .map(|p| p.found_objectives().clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn player_kind(&self, id: PlayerId) -> PlayerKind {
        self.config.kind(id)
    }

    #[must_use]
    pub fn is_current_player_bot(&self) -> bool {
        self.player_kind(self.current_player()).is_bot()
    }

    /// Cells the active pawn can reach right now.
    #[must_use]
    pub fn reachable_positions(&self) -> FxHashSet<Position> {
        self.game.reachable_from_current()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl std::fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maze")
            .field("game", &self.game)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .field("observers", &self.observers)
            .finish()
    }
}

/// Log a rejected request and turn the result into an `Option`.
fn report<T>(result: Result<T>) -> Option<T> {
    result
        .map_err(|err: MazeError| debug!(%err, category = ?err.category(), "request rejected"))
        .ok()
}
