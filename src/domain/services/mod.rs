mod app_state;
mod bubble;
mod bubble_list;
mod navigation;
mod persistence;
mod scroll;
mod views;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use navigation::*;
pub use persistence::*;
pub use scroll::*;
pub use views::*;
