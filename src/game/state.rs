//! Game state: board, players and the turn state machine.
//!
//! ## Turn structure
//!
//! | Phase | Action | Next phase |
//! |---|---|---|
//! | `AwaitingInsert` | [`Game::insert_tile`] | `AwaitingMove` |
//! | `AwaitingMove` | [`Game::move_player`] | `AwaitingInsert` (next player) or `Over` |
//!
//! ## Anti-return rule
//!
//! After every insertion the inverse insertion is forbidden until someone
//! inserts again. The forbidden pair is cleared only when a game starts.
//!
//! ## Pawns on a sliding line
//!
//! Pawns standing on the slid line ride along with their tile. The pawn on
//! the exit edge wraps around to the entry edge of the same line.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::phase::Phase;
use super::player::{Player, PlayerMemento};
use crate::board::{Board, Insertion, RotationDirection, Tile, Treasure};
use crate::core::{
    validate_player_count, GameRng, MazeError, PlayerId, PlayerMap, Position, Result, BOARD_SIZE,
    TREASURE_COUNT,
};

/// Home corners by seat: bottom-left, bottom-right, top-right, top-left.
pub const START_POSITIONS: [Position; 4] = [
    Position::new(BOARD_SIZE - 1, 0),
    Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
    Position::new(0, BOARD_SIZE - 1),
    Position::new(0, 0),
];

/// An explicit starting point: a laid-out board and each player's
/// objectives in reveal order.
#[derive(Clone, Debug)]
pub struct GameSetup {
    pub board: Board,
    pub objectives: Vec<Vec<Treasure>>,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: PlayerMap<Player>,

    // === Turn State ===
    current: PlayerId,
    phase: Phase,
    winner: Option<PlayerId>,

    /// Inverse of the last insertion, forbidden until the next one.
    forbidden: Option<Insertion>,
}

impl Game {
    /// Start a new game: fresh board, shuffled objective deck dealt evenly.
    pub fn start(player_count: usize, rng: &mut GameRng) -> Result<Self> {
        validate_player_count(player_count)?;

        let board = Board::generate(rng);

        let mut deck = Treasure::ALL;
        rng.shuffle(&mut deck);
        let hand_size = TREASURE_COUNT / player_count;
        let objectives = deck
            .chunks(hand_size)
            .take(player_count)
            .map(<[Treasure]>::to_vec)
            .collect();

        info!(players = player_count, seed = rng.seed(), "game started");
        Self::from_setup(GameSetup { board, objectives })
    }

    /// Start from an explicit board and deal.
    pub fn from_setup(setup: GameSetup) -> Result<Self> {
        let GameSetup { board, objectives } = setup;
        validate_player_count(objectives.len())?;

        let mut dealt = FxHashSet::default();
        for (seat, hand) in objectives.iter().enumerate() {
            for &treasure in hand {
                if !dealt.insert(treasure) {
                    return Err(MazeError::InvalidSetup(format!(
                        "{treasure} dealt twice (seat {seat})"
                    )));
                }
            }
        }

        let players = PlayerMap::new(objectives.len(), |id| {
            Player::new(
                id,
                START_POSITIONS[id.index()],
                objectives[id.index()].iter().copied(),
            )
        });

        Ok(Self {
            board,
            players,
            current: PlayerId::new(0),
            phase: Phase::AwaitingInsert,
            winner: None,
            forbidden: None,
        })
    }

    // === Queries ===

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub const fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub const fn forbidden_insertion(&self) -> Option<Insertion> {
        self.forbidden
    }

    /// Whether `insertion` would be accepted right now.
    #[must_use]
    pub fn is_legal_insertion(&self, insertion: Insertion) -> bool {
        self.phase == Phase::AwaitingInsert && self.forbidden != Some(insertion)
    }

    /// Cells the active pawn can walk to, its own cell included.
    #[must_use]
    pub fn reachable_from_current(&self) -> FxHashSet<Position> {
        self.board.reachable_positions(self.current().position())
    }

    // === Actions ===

    /// Push the spare tile in. Pawns on the line ride along.
    pub fn insert_tile(&mut self, insertion: Insertion) -> Result<()> {
        self.expect_phase(Phase::AwaitingInsert)?;
        if self.forbidden == Some(insertion) {
            return Err(MazeError::AntiReturn { insertion });
        }

        self.board.shift(insertion);
        for (_, player) in self.players.iter_mut() {
            if insertion.contains(player.position()) {
                player.set_position(player.position().wrapping_step(insertion.direction()));
            }
        }

        self.forbidden = Some(insertion.inverse());
        self.phase = Phase::AwaitingMove;
        debug!(player = %self.current, %insertion, "tile inserted");
        Ok(())
    }

    /// Walk the active pawn to `destination`, collect its objective if it is
    /// there, then check for victory or pass the turn.
    pub fn move_player(&mut self, destination: Position) -> Result<()> {
        self.expect_phase(Phase::AwaitingMove)?;
        if !destination.is_on_board() {
            return Err(MazeError::OffBoard { position: destination });
        }

        let from = self.current().position();
        if !self.board.is_reachable(from, destination) {
            return Err(MazeError::BlockedPath { from, to: destination });
        }

        let id = self.current;
        let treasure = self.board.tile_at(destination).and_then(Tile::treasure);
        let player = &mut self.players[id];
        player.set_position(destination);
        debug!(player = %id, %from, to = %destination, "pawn moved");

        if treasure.is_some() && treasure == player.current_objective() {
            if let Some(found) = player.objective_found() {
                debug!(player = %id, treasure = %found, remaining = player.remaining_cards(), "objective found");
            }
        }

        if player.has_finished_objectives() && player.is_home() {
            self.phase = Phase::Over;
            self.winner = Some(id);
            info!(player = %id, "game won");
        } else {
            self.current = id.next(self.players.player_count());
            self.phase = Phase::AwaitingInsert;
        }
        Ok(())
    }

    /// Turn the spare tile a quarter turn. Only before inserting; does not
    /// consume the turn.
    pub fn rotate_extra_tile(&mut self, direction: RotationDirection) -> Result<()> {
        self.expect_phase(Phase::AwaitingInsert)?;
        self.board.extra_tile_mut().rotate(direction);
        Ok(())
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(MazeError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    // === Restoration (used by undo) ===

    pub(crate) fn positions(&self) -> PlayerMap<Position> {
        self.players.map(Player::position)
    }

    pub(crate) fn restore_positions(&mut self, positions: &PlayerMap<Position>) {
        for (id, player) in self.players.iter_mut() {
            player.set_position(positions[id]);
        }
    }

    pub(crate) fn set_extra_tile(&mut self, tile: Tile) {
        *self.board.extra_tile_mut() = tile;
    }

    pub(crate) fn shift_board(&mut self, insertion: Insertion) {
        self.board.shift(insertion);
    }

    pub(crate) fn set_forbidden(&mut self, forbidden: Option<Insertion>) {
        self.forbidden = forbidden;
    }

    pub(crate) fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_current(&mut self, id: PlayerId) {
        self.current = id;
    }

    pub(crate) fn clear_winner(&mut self) {
        self.winner = None;
    }

    pub(crate) fn restore_player(&mut self, id: PlayerId, position: Position, memento: PlayerMemento) {
        if let Some(player) = self.players.get_mut(id) {
            player.set_position(position);
            player.restore(memento);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Rotation, Shape};
    use crate::core::Direction;

    fn horizontal() -> Tile {
        Tile::new(Shape::Straight, Rotation::Deg90)
    }

    fn open_board() -> Board {
        Board::from_tiles([[horizontal(); BOARD_SIZE]; BOARD_SIZE], horizontal())
    }

    fn game_with(objectives: Vec<Vec<Treasure>>) -> Game {
        Game::from_setup(GameSetup {
            board: open_board(),
            objectives,
        })
        .unwrap()
    }

    fn ins(direction: Direction, index: usize) -> Insertion {
        Insertion::new(direction, index).unwrap()
    }

    #[test]
    fn test_start_deals_evenly() {
        for count in 2..=4 {
            let mut rng = GameRng::new(9);
            let game = Game::start(count, &mut rng).unwrap();

            assert_eq!(game.player_count(), count);
            assert_eq!(game.phase(), Phase::AwaitingInsert);
            assert_eq!(game.forbidden_insertion(), None);
            for (id, player) in game.players().iter() {
                assert_eq!(player.remaining_cards(), TREASURE_COUNT / count);
                assert_eq!(player.position(), START_POSITIONS[id.index()]);
            }
        }
    }

    #[test]
    fn test_start_rejects_bad_count() {
        let mut rng = GameRng::new(1);
        assert_eq!(
            Game::start(1, &mut rng).unwrap_err(),
            MazeError::InvalidPlayerCount { count: 1 }
        );
        assert!(Game::start(5, &mut rng).is_err());
    }

    #[test]
    fn test_setup_rejects_duplicate_objective() {
        let err = Game::from_setup(GameSetup {
            board: open_board(),
            objectives: vec![vec![Treasure::Keys, Treasure::Map], vec![Treasure::Map]],
        })
        .unwrap_err();
        assert!(matches!(err, MazeError::InvalidSetup(_)));
    }

    #[test]
    fn test_insert_sets_forbidden_and_phase() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.insert_tile(ins(Direction::Down, 3)).unwrap();

        assert_eq!(game.phase(), Phase::AwaitingMove);
        assert_eq!(game.forbidden_insertion(), Some(ins(Direction::Up, 3)));
    }

    #[test]
    fn test_insert_wrong_phase() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.insert_tile(ins(Direction::Down, 3)).unwrap();

        let err = game.insert_tile(ins(Direction::Down, 1)).unwrap_err();
        assert_eq!(
            err,
            MazeError::WrongPhase {
                expected: Phase::AwaitingInsert,
                actual: Phase::AwaitingMove
            }
        );
    }

    #[test]
    fn test_anti_return_blocks_inverse() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.insert_tile(ins(Direction::Left, 5)).unwrap();
        game.move_player(Position::new(6, 0)).unwrap();

        let before = game.clone();
        let err = game.insert_tile(ins(Direction::Right, 5)).unwrap_err();
        assert_eq!(err, MazeError::AntiReturn { insertion: ins(Direction::Right, 5) });
        assert_eq!(game, before);

        // Any other insertion is fine
        assert!(game.insert_tile(ins(Direction::Left, 5)).is_ok());
    }

    #[test]
    fn test_pawn_rides_and_wraps() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.insert_tile(ins(Direction::Down, 1)).unwrap();
        game.move_player(Position::new(6, 0)).unwrap();
        game.insert_tile(ins(Direction::Down, 3)).unwrap();
        // P1 at (6,6) walks along row 6 to (6,5)
        game.move_player(Position::new(6, 5)).unwrap();

        // P1 stands on the exit edge of column 5
        game.insert_tile(ins(Direction::Down, 5)).unwrap();
        assert_eq!(game.players()[PlayerId::new(1)].position(), Position::new(0, 5));
        assert_eq!(game.players()[PlayerId::new(0)].position(), Position::new(6, 0));
    }

    #[test]
    fn test_pawn_rides_inside_line() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.insert_tile(ins(Direction::Down, 1)).unwrap();
        game.move_player(Position::new(6, 3)).unwrap();

        game.insert_tile(ins(Direction::Up, 3)).unwrap();
        assert_eq!(game.players()[PlayerId::new(0)].position(), Position::new(5, 3));
    }

    #[test]
    fn test_move_blocked() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.insert_tile(ins(Direction::Down, 1)).unwrap();

        let err = game.move_player(Position::new(5, 0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::BlockedPath {
                from: Position::new(6, 0),
                to: Position::new(5, 0)
            }
        );
        assert_eq!(game.phase(), Phase::AwaitingMove);
        assert!(matches!(
            game.move_player(Position::new(7, 0)),
            Err(MazeError::OffBoard { .. })
        ));
    }

    #[test]
    fn test_move_wrong_phase() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        assert!(matches!(
            game.move_player(Position::new(6, 0)),
            Err(MazeError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_staying_put_passes_turn() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.insert_tile(ins(Direction::Down, 1)).unwrap();
        game.move_player(Position::new(6, 0)).unwrap();

        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.phase(), Phase::AwaitingInsert);
    }

    #[test]
    fn test_collect_and_win() {
        let mut board = open_board();
        let mut grid = *board.grid();
        grid[6][3] = horizontal().with_treasure(Treasure::Ring);
        board = Board::from_tiles(grid, *board.extra_tile());

        let mut game = Game::from_setup(GameSetup {
            board,
            objectives: vec![vec![Treasure::Ring], vec![Treasure::Map]],
        })
        .unwrap();

        game.insert_tile(ins(Direction::Down, 1)).unwrap();
        game.move_player(Position::new(6, 3)).unwrap();
        let p0 = &game.players()[PlayerId::new(0)];
        assert!(p0.has_finished_objectives());
        assert_eq!(game.current_player(), PlayerId::new(1));

        game.insert_tile(ins(Direction::Down, 5)).unwrap();
        game.move_player(Position::new(6, 6)).unwrap();

        game.insert_tile(ins(Direction::Down, 1)).unwrap();
        game.move_player(Position::new(6, 0)).unwrap();
        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.winner(), Some(PlayerId::new(0)));
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_rotate_extra_only_before_insert() {
        let mut game = game_with(vec![vec![Treasure::Keys], vec![Treasure::Map]]);
        game.rotate_extra_tile(RotationDirection::Clockwise).unwrap();
        assert_eq!(game.board().extra_tile().rotation(), Rotation::Deg180);
        game.rotate_extra_tile(RotationDirection::Counterclockwise).unwrap();
        game.rotate_extra_tile(RotationDirection::Counterclockwise).unwrap();
        assert_eq!(game.board().extra_tile().rotation(), Rotation::Deg0);

        game.insert_tile(ins(Direction::Down, 1)).unwrap();
        assert!(game.rotate_extra_tile(RotationDirection::Clockwise).is_err());
    }
}
