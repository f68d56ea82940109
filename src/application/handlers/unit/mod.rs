//! Unit command and query handlers.

mod create_unit;
mod delete_unit;
mod get_unit;
mod list_units;
mod update_unit;

pub use create_unit::{CreateUnitCommand, CreateUnitHandler};
pub use delete_unit::{DeleteUnitCommand, DeleteUnitHandler};
pub use get_unit::{GetUnitHandler, GetUnitQuery};
pub use list_units::{ListUnitsHandler, ListUnitsQuery};
pub use update_unit::{UpdateUnitCommand, UpdateUnitHandler};
