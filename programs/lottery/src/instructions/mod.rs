pub mod admin;
pub mod buy_tickets;
pub mod end_round;

pub use admin::*;
pub use buy_tickets::*;
pub use end_round::*;
