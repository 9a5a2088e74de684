// Handshake, per-turn snapshot refresh and command submission
use crate::client::protocol;
use crate::client::transport::Transport;
use crate::error::{BotError, BotResult};
use crate::models::{GameMap, Move, PlayerId};
use tracing::debug;

pub struct Networking<T: Transport> {
    transport: T,
    my_id: PlayerId,
    width: f64,
    height: f64,
}

impl<T: Transport> Networking<T> {
    /// Run the handshake: read our id, the map size and the initial map,
    /// then answer with the bot name.
    pub async fn initialize(mut transport: T, bot_name: &str) -> BotResult<(Self, GameMap)> {
        let id_line = transport.read_line().await?.ok_or(BotError::Disconnected("handshake"))?;
        let my_id = protocol::parse_player_id(&id_line)?;

        let size_line = transport.read_line().await?.ok_or(BotError::Disconnected("handshake"))?;
        let (width, height) = protocol::parse_map_size(&size_line)?;

        let map_line = transport.read_line().await?.ok_or(BotError::Disconnected("handshake"))?;
        let initial_map = protocol::parse_game_map(&map_line, width, height, my_id)?;

        transport.write_line(bot_name).await?;

        Ok((Self { transport, my_id, width, height }, initial_map))
    }

    pub fn my_id(&self) -> PlayerId {
        self.my_id
    }

    /// Read the next turn's snapshot; `None` when the game is over
    pub async fn update_map(&mut self) -> BotResult<Option<GameMap>> {
        match self.transport.read_line().await? {
            Some(line) => Ok(Some(protocol::parse_game_map(&line, self.width, self.height, self.my_id)?)),
            None => Ok(None),
        }
    }

    pub async fn send_moves(&mut self, moves: &[Move]) -> BotResult<()> {
        let line = protocol::encode_moves(moves);
        debug!("📤 {}", line);
        self.transport.write_line(&line).await
    }
}
