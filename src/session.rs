//! Session state machine: phases, command dispatch, turn and win logic.
//!
//! This module owns no I/O. The server loop feeds it one raw line at a
//! time and sends back whatever replies a step produced, which keeps the
//! whole protocol drivable from plain synchronous tests.

use log::{info, warn};

use crate::board::Board;
use crate::catalog::{ShipCatalog, CATALOG};
use crate::codec::{parse_line, Command, Reply};
use crate::config::{MAX_BOARD, MIN_BOARD, PIECE_COUNT};
use crate::placement::{place_fleet, PiecePlacement, PlacementError};
use crate::shot::{resolve_shot, ShotError};

/// Wire error codes, grouped by hundreds: invalid command per phase,
/// argument errors, placement errors, shot errors.
pub mod codes {
    pub const INVALID_COMMAND_SETUP: u16 = 100;
    pub const INVALID_COMMAND_PLACEMENT: u16 = 101;
    pub const INVALID_COMMAND_BATTLE: u16 = 102;
    pub const INVALID_SETUP_PARAMETERS: u16 = 200;
    pub const INVALID_PLACEMENT_ARGUMENTS: u16 = 201;
    pub const SHAPE_OUT_OF_RANGE: u16 = 300;
    pub const ROTATION_OUT_OF_RANGE: u16 = 301;
    pub const POSITION_OUT_OF_BOARD: u16 = 302;
    pub const OVERLAP: u16 = 303;
    pub const SHOT_OUT_OF_BOUNDS: u16 = 400;
    pub const ALREADY_FIRED: u16 = 401;
    pub const INVALID_SHOT_ARGUMENTS: u16 = 402;
}

fn placement_code(err: PlacementError) -> u16 {
    match err {
        PlacementError::ShapeOutOfRange => codes::SHAPE_OUT_OF_RANGE,
        PlacementError::RotationOutOfRange => codes::ROTATION_OUT_OF_RANGE,
        // a shape hanging off the grid reports the same code as a bad
        // anchor coordinate
        PlacementError::PositionOutOfBoard | PlacementError::DoesNotFit => {
            codes::POSITION_OUT_OF_BOARD
        }
        PlacementError::Overlap => codes::OVERLAP,
    }
}

fn shot_code(err: ShotError) -> u16 {
    match err {
        ShotError::OutOfBounds => codes::SHOT_OUT_OF_BOUNDS,
        ShotError::AlreadyFired => codes::ALREADY_FIRED,
    }
}

/// One of the two connected players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Human-facing player number, 1 or 2.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Per-player lifecycle. `Ready` is "fleet placed, waiting for the
/// opponent to finish"; both sides flip to `Battle` together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Placement,
    Ready,
    Battle,
    Terminated,
}

/// What one handled line produced: zero or more replies (each addressed
/// to a player) and whether the line consumed the sender's turn.
#[derive(Debug)]
pub struct Step {
    pub replies: Vec<(PlayerId, Reply)>,
    pub consumes_turn: bool,
}

impl Step {
    fn reply(player: PlayerId, reply: Reply) -> Self {
        Step {
            replies: vec![(player, reply)],
            consumes_turn: false,
        }
    }

    fn error(player: PlayerId, code: u16) -> Self {
        Step::reply(player, Reply::Error(code))
    }

    fn consuming(mut self) -> Self {
        self.consumes_turn = true;
        self
    }
}

/// A full game between two players: both boards, both phases, and the
/// agreed dimensions. Boards exist once player 1 has declared a size.
pub struct GameSession {
    catalog: &'static ShipCatalog,
    boards: Option<[Board; 2]>,
    phases: [Phase; 2],
    winner: Option<PlayerId>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            catalog: &CATALOG,
            boards: None,
            phases: [Phase::Setup, Phase::Setup],
            winner: None,
        }
    }

    pub fn phase(&self, player: PlayerId) -> Phase {
        self.phases[player.index()]
    }

    /// The winning player, once a win or forfeit has been resolved.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True once both sides have terminated; the session is then dead.
    pub fn is_over(&self) -> bool {
        self.phases == [Phase::Terminated, Phase::Terminated]
    }

    /// The peer closed its connection: terminal for that side only.
    pub fn handle_disconnect(&mut self, player: PlayerId) {
        info!("player {} disconnected", player.number());
        self.phases[player.index()] = Phase::Terminated;
    }

    /// Interpret one raw line from `player` against its current phase.
    pub fn handle_line(&mut self, player: PlayerId, line: &str) -> Step {
        let phase = self.phase(player);
        info!(
            "player {} ({:?}): {:?}",
            player.number(),
            phase,
            line.trim_end()
        );

        let Some(command) = parse_line(line) else {
            return Step::error(player, Self::invalid_command_code(phase));
        };

        if command.letter == 'F' && phase != Phase::Terminated {
            return self.forfeit(player);
        }

        match phase {
            Phase::Setup => self.handle_setup(player, &command),
            Phase::Placement => self.handle_placement(player, &command),
            // placed, waiting for the opponent; nothing else is legal yet
            Phase::Ready => Step::error(player, codes::INVALID_COMMAND_BATTLE),
            Phase::Battle => self.handle_battle(player, &command),
            // a finished session rejects every further game command
            Phase::Terminated => Step::error(player, codes::INVALID_COMMAND_BATTLE),
        }
    }

    fn invalid_command_code(phase: Phase) -> u16 {
        match phase {
            Phase::Setup => codes::INVALID_COMMAND_SETUP,
            Phase::Placement => codes::INVALID_COMMAND_PLACEMENT,
            _ => codes::INVALID_COMMAND_BATTLE,
        }
    }

    /// Forfeit is honored in any live phase: loss notice to the
    /// forfeiting player, win notice to the opponent, both terminated.
    fn forfeit(&mut self, player: PlayerId) -> Step {
        info!("player {} forfeits", player.number());
        self.phases = [Phase::Terminated, Phase::Terminated];
        self.winner = Some(player.opponent());
        Step {
            replies: vec![
                (player, Reply::GameOver { won: false }),
                (player.opponent(), Reply::GameOver { won: true }),
            ],
            consumes_turn: true,
        }
    }

    fn handle_setup(&mut self, player: PlayerId, command: &Command) -> Step {
        if command.letter != 'B' {
            warn!(
                "player {}: expected size declaration, got {:?}",
                player.number(),
                command.letter
            );
            return Step::error(player, codes::INVALID_COMMAND_SETUP);
        }

        match player {
            PlayerId::One => {
                let &[width, height] = command.args.as_slice() else {
                    return Step::error(player, codes::INVALID_SETUP_PARAMETERS);
                };
                if width < MIN_BOARD
                    || height < MIN_BOARD
                    || width > MAX_BOARD as u32
                    || height > MAX_BOARD as u32
                {
                    return Step::error(player, codes::INVALID_SETUP_PARAMETERS);
                }
                info!("board will be {} by {}", width, height);
                self.boards = Some([
                    Board::new(width as usize, height as usize),
                    Board::new(width as usize, height as usize),
                ]);
                self.phases[player.index()] = Phase::Placement;
                Step::reply(player, Reply::Ack).consuming()
            }
            PlayerId::Two => {
                // bare acknowledgement, and only once a size exists
                if !command.args.is_empty() || self.boards.is_none() {
                    return Step::error(player, codes::INVALID_SETUP_PARAMETERS);
                }
                info!("player 2 is ready, starting placement");
                self.phases[player.index()] = Phase::Placement;
                Step::reply(player, Reply::Ack).consuming()
            }
        }
    }

    fn handle_placement(&mut self, player: PlayerId, command: &Command) -> Step {
        if command.letter != 'I' {
            warn!(
                "player {}: expected placement, got {:?}",
                player.number(),
                command.letter
            );
            return Step::error(player, codes::INVALID_COMMAND_PLACEMENT);
        }
        if command.args.len() != PIECE_COUNT * 4 {
            return Step::error(player, codes::INVALID_PLACEMENT_ARGUMENTS);
        }
        let Some(boards) = self.boards.as_mut() else {
            return Step::error(player, codes::INVALID_PLACEMENT_ARGUMENTS);
        };

        let pieces = PiecePlacement::from_args(&command.args);
        match place_fleet(&mut boards[player.index()], self.catalog, &pieces) {
            Ok(()) => {
                info!("player {} placed their fleet", player.number());
                self.phases[player.index()] = Phase::Ready;
                if self.phases[player.opponent().index()] == Phase::Ready {
                    info!("both fleets placed, battle begins");
                    self.phases = [Phase::Battle, Phase::Battle];
                }
                Step::reply(player, Reply::Ack).consuming()
            }
            Err(err) => {
                warn!("player {} placement rejected: {}", player.number(), err);
                Step::error(player, placement_code(err))
            }
        }
    }

    fn handle_battle(&mut self, player: PlayerId, command: &Command) -> Step {
        let Some(boards) = self.boards.as_mut() else {
            return Step::error(player, codes::INVALID_COMMAND_BATTLE);
        };
        match command.letter {
            'Q' => {
                if !command.args.is_empty() {
                    return Step::error(player, codes::INVALID_COMMAND_BATTLE);
                }
                // the player's view of the opponent board: fired cells only
                let target = &boards[player.opponent().index()];
                Step::reply(
                    player,
                    Reply::QueryResult {
                        remaining: target.ships_remaining(),
                        cells: target.fired_cells(),
                    },
                )
            }
            'S' => {
                let &[col, row] = command.args.as_slice() else {
                    return Step::error(player, codes::INVALID_SHOT_ARGUMENTS);
                };
                let target = &mut boards[player.opponent().index()];
                match resolve_shot(target, col, row) {
                    Ok(outcome) => {
                        let mut step = Step::reply(
                            player,
                            Reply::ShotResult {
                                remaining: outcome.remaining,
                                mark: outcome.mark,
                            },
                        )
                        .consuming();
                        if outcome.sunk {
                            info!(
                                "player {} sank a ship, {} remaining",
                                player.number(),
                                outcome.remaining
                            );
                        }
                        if outcome.remaining == 0 {
                            info!("player {} wins", player.number());
                            self.phases = [Phase::Terminated, Phase::Terminated];
                            self.winner = Some(player);
                            step.replies.push((player, Reply::GameOver { won: true }));
                            step.replies
                                .push((player.opponent(), Reply::GameOver { won: false }));
                        }
                        step
                    }
                    Err(err) => {
                        warn!("player {} shot rejected: {}", player.number(), err);
                        Step::error(player, shot_code(err))
                    }
                }
            }
            other => {
                warn!(
                    "player {}: unexpected command {:?} during battle",
                    player.number(),
                    other
                );
                Step::error(player, codes::INVALID_COMMAND_BATTLE)
            }
        }
    }
}
