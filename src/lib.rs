mod board;
mod catalog;
mod codec;
mod config;
mod logging;
mod placement;
mod server;
mod session;
mod shot;
pub mod transport;

pub use board::{Board, Cell, ShipId, FLEET_SIZE};
pub use catalog::{anchor, rotate_clockwise, ShapeMask, ShipCatalog, CATALOG};
pub use codec::{parse_line, Command, Reply, ShotMark};
pub use config::*;
pub use logging::init_logging;
pub use placement::{place_fleet, PiecePlacement, PlacementError};
pub use server::GameServer;
pub use session::{codes, GameSession, Phase, PlayerId, Step};
pub use shot::{resolve_shot, ShotError, ShotOutcome};
pub use transport::tcp::TcpTransport;
