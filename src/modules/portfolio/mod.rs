//! Read-only aggregation of every content section into the public console view.

pub mod adapter;
pub mod application;
