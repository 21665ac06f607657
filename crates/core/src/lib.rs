//! Domain logic for notyetdude: the idea lifecycle, form validation, identity
//! values, and the pure helpers behind the board and action-link views.
//!
//! Nothing in this crate performs I/O.

pub mod action_link;
pub mod board;
pub mod dates;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod types;
pub mod validation;
