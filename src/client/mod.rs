// Client module - Halite II server connection
pub mod protocol;
pub mod transport;
pub mod networking;

pub use networking::Networking;
pub use transport::{MemoryTransport, StdioTransport, Transport};
