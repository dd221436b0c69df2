// src/domain/access/mod.rs
pub mod matrix;
pub mod principal;

pub use matrix::{ContentAccess, DeleteDenied, PermissionMatrix};
pub use principal::Principal;
