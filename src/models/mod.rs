pub mod column;
pub mod filter;
pub mod intervention;
pub mod role;
pub mod sort;

pub use column::{Column, ColumnKind, Derived, Field};
pub use filter::FilterSet;
pub use intervention::Intervention;
pub use role::Role;
pub use sort::{SortDirection, SortState};
