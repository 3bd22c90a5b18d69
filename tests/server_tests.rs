use broadside::transport::in_memory::InMemoryTransport;
use broadside::transport::Transport;
use broadside::{GameServer, PlayerId};

const FLEET: &str = "I 1 1 0 0 2 1 3 0 3 1 6 0 4 1 0 3 5 1 3 5";

async fn send_all(transport: &mut InMemoryTransport, lines: &[&str]) {
    for line in lines {
        transport.send_line(line).await.unwrap();
    }
}

async fn recv_exactly(transport: &mut InMemoryTransport, count: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(transport.recv_line().await.unwrap().unwrap());
    }
    out
}

#[tokio::test]
async fn forfeit_game_over_in_memory_transports() {
    let (server1, mut client1) = InMemoryTransport::pair();
    let (server2, mut client2) = InMemoryTransport::pair();

    // queue each side's whole script; the server consumes them in strict
    // player-1-then-player-2 alternation
    send_all(&mut client1, &["B 10 10", FLEET, "S 9 9"]).await;
    send_all(&mut client2, &["B", FLEET, "F"]).await;

    let mut server = GameServer::new(Box::new(server1), Box::new(server2));
    server.run().await.unwrap();

    assert!(server.session().is_over());
    assert_eq!(server.session().winner(), Some(PlayerId::One));

    assert_eq!(
        recv_exactly(&mut client1, 4).await,
        vec!["A", "A", "R 5 M", "H 1"]
    );
    assert_eq!(recv_exactly(&mut client2, 3).await, vec!["A", "A", "H 0"]);
}

#[tokio::test]
async fn errors_do_not_consume_the_turn() {
    let (server1, mut client1) = InMemoryTransport::pair();
    let (server2, mut client2) = InMemoryTransport::pair();

    // player 1 fumbles setup and placement before getting both right;
    // the server keeps reading player 1 until each phase advances
    send_all(
        &mut client1,
        &["X", "B 5 5", "B 10 10", "I 1 2 3", FLEET, "Q", "S 9 9"],
    )
    .await;
    send_all(&mut client2, &["B", FLEET, "F"]).await;

    let mut server = GameServer::new(Box::new(server1), Box::new(server2));
    server.run().await.unwrap();

    assert_eq!(
        recv_exactly(&mut client1, 8).await,
        vec!["E 100", "E 200", "A", "E 201", "A", "G 5", "R 5 M", "H 1"]
    );
    assert_eq!(recv_exactly(&mut client2, 3).await, vec!["A", "A", "H 0"]);
    assert_eq!(server.session().winner(), Some(PlayerId::One));
}

#[tokio::test]
async fn disconnects_end_the_session_without_a_winner() {
    let (server1, mut client1) = InMemoryTransport::pair();
    let (server2, client2) = InMemoryTransport::pair();

    send_all(&mut client1, &["B 10 10"]).await;
    drop(client1);
    drop(client2);

    let mut server = GameServer::new(Box::new(server1), Box::new(server2));
    server.run().await.unwrap();

    assert!(server.session().is_over());
    assert_eq!(server.session().winner(), None);
}
