#[macro_use]
extern crate log;

mod store;
pub use store::{ProfileStore, Profiles};
