#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod field;
pub mod geometry;
pub mod logger;

#[macro_use]
pub mod swerve;
