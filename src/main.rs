use broadside::{init_logging, GameServer, TcpTransport, DEFAULT_PORT1, DEFAULT_PORT2};
use clap::Parser;
use log::info;
use tokio::net::TcpListener;

/// Host one two-player Battleship game over two TCP ports.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Listening port for player 1.
    #[arg(long, default_value_t = DEFAULT_PORT1)]
    port1: u16,
    /// Listening port for player 2.
    #[arg(long, default_value_t = DEFAULT_PORT2)]
    port2: u16,
}

async fn accept_player(listener: &TcpListener, player: u8) -> anyhow::Result<TcpTransport> {
    let (stream, addr) = listener.accept().await?;
    info!("player {} connected from {}", player, addr);
    Ok(TcpTransport::new(stream))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let listener1 = TcpListener::bind(("0.0.0.0", cli.port1)).await?;
    info!("listening for player 1 on port {}", cli.port1);
    let listener2 = TcpListener::bind(("0.0.0.0", cli.port2)).await?;
    info!("listening for player 2 on port {}", cli.port2);

    let player1 = accept_player(&listener1, 1).await?;
    let player2 = accept_player(&listener2, 2).await?;

    let mut server = GameServer::new(Box::new(player1), Box::new(player2));
    server.run().await?;

    match server.session().winner() {
        Some(winner) => info!("game over, player {} wins", winner.number()),
        None => info!("game over, both players disconnected"),
    }
    Ok(())
}
