pub mod angle;
pub mod config;
pub mod constants;
pub mod game;
pub mod layout;
pub mod puzzle;
pub mod scoring;
pub mod scramble;
pub mod snap;

pub use angle::*;
pub use config::*;
pub use game::*;
pub use layout::*;
pub use puzzle::*;
pub use scoring::*;
pub use scramble::*;
pub use snap::*;
