use serde::{Deserialize, Serialize};
use crate::error::{BotError, BotResult};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    pub bot: BotSettings,
    pub engine: EngineConstants,
    pub strategy: StrategyConfig,
    pub recording: RecordingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotSettings {
    /// Name sent to the server during the handshake
    pub name: String,
    /// Wall-clock budget for one turn, in milliseconds
    pub turn_time_budget_ms: u64,
    /// Directory that receives the per-game log file
    pub log_dir: String,
}

/// Game engine constants. These mirror the server rules and are only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConstants {
    /// Production needed to spawn one ship
    pub ship_cost: i32,
    /// Production per turn contributed by one docked ship
    pub base_productivity: i32,
    /// Maximum thrust per turn
    pub max_speed: i32,
    pub ship_radius: f64,
    /// Distance from a planet surface at which ships may dock
    pub dock_radius: f64,
    /// Distance at which ships exchange fire
    pub weapon_radius: f64,
    /// Radius beyond a planet surface in which enemy ships count as a threat
    pub near_planet_radius: f64,
    /// Number of angular corrections navigation may try around obstacles
    pub max_navigation_corrections: u32,
    /// Size of one angular correction, in degrees
    pub navigation_step_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Multiplier for owned planets that are still filling up and under threat
    pub defend_weight: f64,
    /// Multiplier for owned planets that are still filling up and unthreatened
    pub colonize_weight: f64,
    /// Cost added per undocked enemy near a contested planet
    pub undocked_hostile_weight: f64,
    /// Cost added per docked enemy near a contested planet
    pub docked_hostile_weight: f64,
    /// Base multiplier for contested or neutral planets
    pub contested_base_weight: f64,
    pub progress: ProgressCurve,
}

/// Logistic curve mapping the number of ships in play to the game progress scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressCurve {
    pub offset: f64,
    pub amplitude: f64,
    pub steepness: f64,
    pub midpoint_ships: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Append every turn snapshot to `path` as JSON lines
    pub enabled: bool,
    pub path: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot: BotSettings {
                name: "QueueBot8".to_string(),
                turn_time_budget_ms: 1800,
                log_dir: ".".to_string(),
            },
            engine: EngineConstants::default(),
            strategy: StrategyConfig::default(),
            recording: RecordingConfig {
                enabled: false,
                path: "recordings/game.jsonl".to_string(),
            },
        }
    }
}

impl Default for EngineConstants {
    fn default() -> Self {
        Self {
            ship_cost: 72,
            base_productivity: 6,
            max_speed: 7,
            ship_radius: 0.5,
            dock_radius: 4.0,
            weapon_radius: 5.0,
            near_planet_radius: 15.0,
            max_navigation_corrections: 90,
            navigation_step_degrees: 1.0,
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            defend_weight: 100.0,
            colonize_weight: 60.0,
            undocked_hostile_weight: 0.3,
            docked_hostile_weight: 0.2,
            contested_base_weight: 0.4,
            progress: ProgressCurve {
                offset: 0.8,
                amplitude: 3.0,
                steepness: 0.05,
                midpoint_ships: 100.0,
            },
        }
    }
}

impl BotConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> BotResult<Self> {
        if Path::new(config_path).exists() {
            let config_str = fs::read_to_string(config_path)?;
            let config: BotConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            let config = BotConfig::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> BotResult<()> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> BotResult<()> {
        let engine = &self.engine;
        if engine.ship_cost <= 0 || engine.base_productivity <= 0 {
            return Err(BotError::Config("ship_cost and base_productivity must be positive".to_string()));
        }
        if engine.max_speed <= 0 {
            return Err(BotError::Config("max_speed must be positive".to_string()));
        }

        let radii = [
            ("ship_radius", engine.ship_radius),
            ("dock_radius", engine.dock_radius),
            ("weapon_radius", engine.weapon_radius),
            ("near_planet_radius", engine.near_planet_radius),
            ("navigation_step_degrees", engine.navigation_step_degrees),
        ];
        for (name, value) in radii {
            if !(value > 0.0) {
                return Err(BotError::Config(format!("{} must be greater than 0", name)));
            }
        }

        if self.bot.turn_time_budget_ms == 0 {
            return Err(BotError::Config("turn_time_budget_ms must be greater than 0".to_string()));
        }
        if self.bot.name.trim().is_empty() || self.bot.name.contains(char::is_whitespace) {
            return Err(BotError::Config("bot name must be a single non-empty word".to_string()));
        }

        if self.strategy.progress.offset < 0.0 || self.strategy.progress.amplitude < 0.0 {
            return Err(BotError::Config("progress offset and amplitude must not be negative".to_string()));
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn print_summary(&self) {
        info!("📋 Configuration Summary:");
        info!("   🤖 Bot name: {}", self.bot.name);
        info!("   ⏰ Turn budget: {}ms", self.bot.turn_time_budget_ms);
        info!("   🚀 Max speed {} / weapon radius {:.1} / near-planet radius {:.1}",
              self.engine.max_speed, self.engine.weapon_radius, self.engine.near_planet_radius);
        info!("   🏭 Ship cost {} / base productivity {}", self.engine.ship_cost, self.engine.base_productivity);
        info!("   💾 Recording: {}", if self.recording.enabled { self.recording.path.as_str() } else { "off" });
    }
}
