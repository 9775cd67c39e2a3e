//! Drivers that own timing on the host.

pub mod periodic;
