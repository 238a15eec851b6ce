pub mod database;
pub mod memory;
pub mod menu;
pub mod store;

pub use database::MongoStore;
pub use memory::InMemoryStore;
pub use menu::menu;
pub use store::{CafeStore, MAX_LIST_RESULTS};
