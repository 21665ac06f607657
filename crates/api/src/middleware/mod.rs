//! Request extractors.
//!
//! - [`identity::StoredIdentity`] -- The visitor e-mail remembered in the session cookie.

pub mod identity;
