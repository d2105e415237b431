//! Shared, I/O-free building blocks of the sales dashboard tables.
//!
//! Everything here is a pure function of its inputs so the same code can run
//! in the browser and in the native `reports` tool.

pub mod dashboards;
pub mod enums;
pub mod shared;
