mod download;
mod intent;
mod package;
mod session;
mod stats;

pub use download::*;
pub use intent::*;
pub use package::*;
pub use session::*;
pub use stats::*;
