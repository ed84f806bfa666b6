//! Authentication collaborators: password hashing and JWT issuance.

pub mod jwt;
pub mod password;
