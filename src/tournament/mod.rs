mod result;
mod room;

pub use result::{parse_opponents, MatchResult};
pub use room::{InvalidRoom, RoomCode};
