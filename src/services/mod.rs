pub mod server;
pub mod tournament;
