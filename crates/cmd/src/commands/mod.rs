pub mod list;
pub mod snapshot;
pub mod store;

pub use list::list_command;
pub use snapshot::snapshot_command;
pub use store::store_command;
pub use test::test_command;
