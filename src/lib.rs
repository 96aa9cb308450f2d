pub mod cli;
pub mod error;
pub mod github;
pub mod goal;
pub mod poller;
pub mod slack;
pub mod stars;
pub mod status;
pub mod store;
