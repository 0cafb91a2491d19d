pub mod access;
pub mod compare;
pub mod logic;
pub mod view;

pub use logic::{Core, ViewRequest};
pub use view::derive_view;
