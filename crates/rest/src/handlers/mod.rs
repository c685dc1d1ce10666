//! HTTP request handlers.
//!
//! One module per operation, each generic over the storage backend and (for
//! the per-entity operations) the record kind. The route table instantiates
//! the generic handlers once per entity, so a kind with no route for an
//! operation simply never gets that handler.

pub mod create;
pub mod dashboard;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod root;
pub mod status;
pub mod update;

pub use create::create_handler;
pub use dashboard::dashboard_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::{list_handler, patient_records_handler};
pub use read::read_handler;
pub use root::root_handler;
pub use status::{appointment_status_handler, bill_status_handler};
pub use update::update_handler;
