// Admiral module - Game loop orchestration: read snapshot, decide, submit
use crate::client::{Networking, Transport};
use crate::config::BotConfig;
use crate::error::BotResult;
use crate::models::{GameMap, Move};
use crate::operations::{NavigationPlanner, ShipState, TurnOrchestrator, TurnPlan};
use crate::storage::{TurnRecord, TurnRecorder};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub turns_played: u32,
    pub commands_sent: usize,
    pub turns_over_budget: u32,
}

pub struct Admiral<T: Transport> {
    config: BotConfig,
    navigator: NavigationPlanner,
    networking: Networking<T>,
    recorder: Option<TurnRecorder>,
}

impl<T: Transport> Admiral<T> {
    /// Complete the server handshake. Returns the admiral and the initial map.
    pub async fn connect(config: BotConfig, transport: T) -> BotResult<(Self, GameMap)> {
        let (networking, initial_map) = Networking::initialize(transport, &config.bot.name).await?;

        let recorder = if config.recording.enabled {
            Some(TurnRecorder::create(&config.recording.path)?)
        } else {
            None
        };

        let admiral = Self {
            navigator: NavigationPlanner::new(config.engine.clone()),
            config,
            networking,
            recorder,
        };
        Ok((admiral, initial_map))
    }

    pub fn my_id(&self) -> i32 {
        self.networking.my_id()
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn log_initial_intelligence(&self, map: &GameMap) {
        info!("🚀 {} playing as player {}", self.config.bot.name, self.my_id());
        info!("width: {}; height: {}; players: {}; planets: {}",
              map.width, map.height, map.players.len(), map.planets.len());
    }

    /// Play turns until the server closes the stream
    pub async fn run_game(&mut self) -> BotResult<GameSummary> {
        let mut summary = GameSummary::default();
        let budget = Duration::from_millis(self.config.bot.turn_time_budget_ms);

        while let Some(map) = self.networking.update_map().await? {
            summary.turns_played += 1;
            let turn = summary.turns_played;

            let started = Instant::now();
            let plan = self.plan_turn(&map);
            let moves = plan.moves();
            let elapsed = started.elapsed();

            self.networking.send_moves(&moves).await?;
            summary.commands_sent += moves.len();

            info!("═══ turn {} ═══ {} commands | local {} travel {} idle {} skipped {} | {}ms",
                  turn,
                  moves.len(),
                  plan.count(ShipState::LocalActionTaken),
                  plan.count(ShipState::TravelAssigned),
                  plan.count(ShipState::Idle),
                  plan.count(ShipState::Skipped),
                  elapsed.as_millis());
            if elapsed > budget {
                summary.turns_over_budget += 1;
                warn!("⚠️ turn {} took {}ms, budget is {}ms", turn, elapsed.as_millis(), budget.as_millis());
            }

            if let Some(recorder) = self.recorder.as_mut() {
                if let Err(e) = recorder.record(turn, &map, &moves) {
                    warn!("⚠️ disabling turn recording at {}: {}", recorder.storage_path(), e);
                    self.recorder = None;
                }
            }
        }

        info!("🏁 game over after {} turns, {} commands sent", summary.turns_played, summary.commands_sent);
        Ok(summary)
    }

    pub fn plan_turn(&self, map: &GameMap) -> TurnPlan {
        TurnOrchestrator::new(&self.config, &self.navigator).plan_turn(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayedTurn {
    pub turn: u32,
    pub recorded: Vec<Move>,
    pub replayed: Vec<Move>,
}

impl ReplayedTurn {
    pub fn matches(&self) -> bool {
        self.recorded == self.replayed
    }
}

/// Re-run the decision engine on recorded snapshots. With `only_turn` set,
/// just that turn is replayed.
pub fn replay(config: &BotConfig, records: &[TurnRecord], only_turn: Option<u32>) -> Vec<ReplayedTurn> {
    let navigator = NavigationPlanner::new(config.engine.clone());
    let orchestrator = TurnOrchestrator::new(config, &navigator);

    records
        .iter()
        .filter(|record| only_turn.is_none_or(|turn| record.turn == turn))
        .map(|record| ReplayedTurn {
            turn: record.turn,
            recorded: record.moves.clone(),
            replayed: orchestrator.plan_turn(&record.map).moves(),
        })
        .collect()
}
