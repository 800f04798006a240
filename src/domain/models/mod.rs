mod choice;
mod level;
mod message;
mod rejection;
mod role;
mod roster;
mod section;
mod storage;
mod student;
mod summary;
mod textarea;

pub use choice::*;
pub use level::*;
pub use message::*;
pub use rejection::*;
pub use role::*;
pub use roster::*;
pub use section::*;
pub use storage::*;
pub use student::*;
pub use summary::*;
pub use textarea::*;
