// Error types shared by the protocol, configuration and storage layers
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("server closed the connection during {0}")]
    Disconnected(&'static str),

    #[error("malformed server line: expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },

    #[error("malformed server line: cannot parse {field} from '{token}'")]
    InvalidToken { field: &'static str, token: String },

    #[error("unknown docking status code {0}")]
    UnknownDockingStatus(i32),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("cannot serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("recording error: {0}")]
    Recording(#[from] serde_json::Error),
}

pub type BotResult<T> = Result<T, BotError>;
