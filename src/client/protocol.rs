// Halite II line protocol: parsing server lines and encoding our commands
use crate::error::{BotError, BotResult};
use crate::models::*;
use std::str::{FromStr, SplitWhitespace};

/// Sequential reader over the whitespace separated tokens of one line
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { inner: line.split_whitespace() }
    }

    pub fn next_value<T: FromStr>(&mut self, field: &'static str) -> BotResult<T> {
        let token = self.inner.next().ok_or(BotError::UnexpectedEnd { expected: field })?;
        token.parse().map_err(|_| BotError::InvalidToken {
            field,
            token: token.to_string(),
        })
    }
}

/// Line 1 of the handshake
pub fn parse_player_id(line: &str) -> BotResult<PlayerId> {
    Tokens::new(line).next_value("player id")
}

/// Line 2 of the handshake, `width height`
pub fn parse_map_size(line: &str) -> BotResult<(f64, f64)> {
    let mut tokens = Tokens::new(line);
    let width = tokens.next_value("map width")?;
    let height = tokens.next_value("map height")?;
    Ok((width, height))
}

/// Parse one full turn line into a fresh snapshot
pub fn parse_game_map(line: &str, width: f64, height: f64, my_id: PlayerId) -> BotResult<GameMap> {
    let mut tokens = Tokens::new(line);
    let mut map = GameMap::empty(width, height, my_id);

    let player_count: usize = tokens.next_value("player count")?;
    for _ in 0..player_count {
        let player_id: PlayerId = tokens.next_value("player id")?;
        let ship_count: usize = tokens.next_value("ship count")?;
        let mut ship_ids = Vec::with_capacity(ship_count);
        for _ in 0..ship_count {
            let ship = parse_ship(&mut tokens, player_id)?;
            ship_ids.push(ship.id);
            map.ships.push(ship);
        }
        map.players.push(Player { id: player_id, ships: ship_ids });
    }

    let planet_count: usize = tokens.next_value("planet count")?;
    for _ in 0..planet_count {
        map.planets.push(parse_planet(&mut tokens)?);
    }

    Ok(map)
}

fn parse_ship(tokens: &mut Tokens, owner: PlayerId) -> BotResult<Ship> {
    let id = tokens.next_value("ship id")?;
    let x = tokens.next_value("ship x")?;
    let y = tokens.next_value("ship y")?;
    let health = tokens.next_value("ship health")?;
    // velocity is deprecated and always zero
    let _vel_x: f64 = tokens.next_value("ship velocity x")?;
    let _vel_y: f64 = tokens.next_value("ship velocity y")?;
    let status_code: i32 = tokens.next_value("docking status")?;
    let docking_status = DockingStatus::from_code(status_code).ok_or(BotError::UnknownDockingStatus(status_code))?;
    let docked_planet: EntityId = tokens.next_value("docked planet")?;
    let docking_progress = tokens.next_value("docking progress")?;
    let weapon_cooldown = tokens.next_value("weapon cooldown")?;

    Ok(Ship {
        id,
        owner,
        position: Position::new(x, y),
        health,
        docking_status,
        docked_planet: if docking_status == DockingStatus::Undocked { None } else { Some(docked_planet) },
        docking_progress,
        weapon_cooldown,
    })
}

fn parse_planet(tokens: &mut Tokens) -> BotResult<Planet> {
    let id = tokens.next_value("planet id")?;
    let x = tokens.next_value("planet x")?;
    let y = tokens.next_value("planet y")?;
    let health = tokens.next_value("planet health")?;
    let radius = tokens.next_value("planet radius")?;
    let docking_spots = tokens.next_value("docking spots")?;
    let current_production = tokens.next_value("current production")?;
    let remaining_production = tokens.next_value("remaining production")?;
    let owned: i32 = tokens.next_value("owned flag")?;
    let owner_candidate: PlayerId = tokens.next_value("planet owner")?;
    let docked_count: usize = tokens.next_value("docked ship count")?;
    let mut docked_ships = Vec::with_capacity(docked_count);
    for _ in 0..docked_count {
        docked_ships.push(tokens.next_value("docked ship id")?);
    }

    Ok(Planet {
        id,
        position: Position::new(x, y),
        health,
        radius,
        docking_spots,
        current_production,
        remaining_production,
        owner: if owned == 1 { Some(owner_candidate) } else { None },
        docked_ships,
    })
}

/// One line carrying the whole batch of commands for this turn
pub fn encode_moves(moves: &[Move]) -> String {
    moves.iter().map(Move::encode).collect::<Vec<String>>().join(" ")
}
