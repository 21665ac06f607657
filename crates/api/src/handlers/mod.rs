pub mod action_links;
pub mod ideas;
pub mod session;
