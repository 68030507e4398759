mod color;
mod party;
mod result;

pub use color::Color;
pub use party::{FocusPair, Party, PartyRegistry, PartyVotes};
pub use result::CurrentResult;
