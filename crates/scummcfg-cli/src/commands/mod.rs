pub mod common;
pub mod domains;
pub mod dump;
pub mod games;
pub mod get;
pub mod preview;
pub mod remove;
pub mod set;

pub use common::{Session, SessionOptions};
pub use domains::Domains;
pub use dump::Dump;
pub use games::{RemoveGame, RenameGame};
pub use get::Get;
pub use remove::Remove;
pub use set::Set;
