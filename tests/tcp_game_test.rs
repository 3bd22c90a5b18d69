use broadside::{GameServer, PlayerId, TcpTransport};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

const FLEET: &str = "I 1 1 0 0 2 1 3 0 3 1 6 0 4 1 0 3 5 1 3 5";

struct Client {
    reader: BufReader<tokio::net::tcp::OwnedReadHalf>,
    writer: tokio::net::tcp::OwnedWriteHalf,
}

impl Client {
    async fn connect(addr: std::net::SocketAddr) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        })
    }

    async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }

    async fn expect(&mut self, want: &str) -> anyhow::Result<()> {
        let mut line = String::new();
        self.reader.read_line(&mut line).await?;
        anyhow::ensure!(
            line.trim_end() == want,
            "expected {:?}, got {:?}",
            want,
            line.trim_end()
        );
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn scripted_game_over_real_sockets() -> anyhow::Result<()> {
    let listener1 = TcpListener::bind("127.0.0.1:0").await?;
    let listener2 = TcpListener::bind("127.0.0.1:0").await?;
    let addr1 = listener1.local_addr()?;
    let addr2 = listener2.local_addr()?;

    let server_future = tokio::spawn(async move {
        let (stream1, _) = listener1.accept().await.unwrap();
        let (stream2, _) = listener2.accept().await.unwrap();
        let mut server = GameServer::new(
            Box::new(TcpTransport::new(stream1)),
            Box::new(TcpTransport::new(stream2)),
        );
        server.run().await.unwrap();
        server.session().winner()
    });

    let player1_future = tokio::spawn(async move {
        let mut client = Client::connect(addr1).await?;
        client.send("B 10 10").await?;
        client.expect("A").await?;
        client.send(FLEET).await?;
        client.expect("A").await?;

        client.send("S 9 9").await?;
        client.expect("R 5 M").await?;

        // repeating the same coordinate is rejected and the turn stays
        client.send("S 9 9").await?;
        client.expect("E 401").await?;
        client.send("S 8 8").await?;
        client.expect("R 5 M").await?;

        // opponent forfeits next, so the win notice arrives unprompted
        client.expect("H 1").await?;
        anyhow::Ok(())
    });

    let player2_future = tokio::spawn(async move {
        let mut client = Client::connect(addr2).await?;
        client.send("B").await?;
        client.expect("A").await?;
        client.send(FLEET).await?;
        client.expect("A").await?;

        client.send("S 9 9").await?;
        client.expect("R 5 M").await?;

        client.send("F").await?;
        client.expect("H 0").await?;
        anyhow::Ok(())
    });

    let (winner, res1, res2) = tokio::try_join!(server_future, player1_future, player2_future)?;
    res1?;
    res2?;
    assert_eq!(winner, Some(PlayerId::One));
    Ok(())
}
