//! Server loop: drives one session over two client transports.

use log::warn;

use crate::session::{GameSession, Phase, PlayerId, Step};
use crate::transport::Transport;

/// One hosted game: the session state machine plus both connections.
///
/// Processing is strictly sequential. Each round reads player 1 until a
/// line consumes the turn, then player 2, so only one side's move is ever
/// in flight and no locking is needed anywhere in the core.
pub struct GameServer {
    session: GameSession,
    transports: [Box<dyn Transport>; 2],
}

impl GameServer {
    pub fn new(player1: Box<dyn Transport>, player2: Box<dyn Transport>) -> Self {
        Self {
            session: GameSession::new(),
            transports: [player1, player2],
        }
    }

    /// The underlying session, for inspecting the outcome after `run`.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the game to completion: win, forfeit, or both peers gone.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while !self.session.is_over() {
            for player in [PlayerId::One, PlayerId::Two] {
                if self.session.phase(player) == Phase::Terminated {
                    continue;
                }
                self.drive_turn(player).await;
                if self.session.is_over() {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Read lines from one player until a message consumes the turn.
    /// Errors and successful board queries leave the turn with the same
    /// player; a disconnect ends it for that side.
    async fn drive_turn(&mut self, player: PlayerId) {
        loop {
            let line = match self.transports[player.index()].recv_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.session.handle_disconnect(player);
                    return;
                }
                Err(err) => {
                    warn!("read from player {} failed: {}", player.number(), err);
                    self.session.handle_disconnect(player);
                    return;
                }
            };
            let step = self.session.handle_line(player, &line);
            self.send_replies(&step).await;
            if step.consumes_turn {
                return;
            }
        }
    }

    async fn send_replies(&mut self, step: &Step) {
        for (to, reply) in &step.replies {
            if let Err(err) = self.transports[to.index()]
                .send_line(&reply.to_string())
                .await
            {
                // a dead peer must not abort the session for the other side
                warn!("failed to send to player {}: {}", to.number(), err);
            }
        }
    }
}
