pub mod heat;
pub mod quacks;
pub mod registry;
pub mod seven_wonders;
pub mod wyrmspan;

pub use heat::HeatSetup;
pub use quacks::QuacksSetup;
pub use registry::{GameKind, normalize_game_name};
pub use seven_wonders::{SevenWonders, SevenWondersCategory};
pub use wyrmspan::{Wyrmspan, WyrmspanCategory};
