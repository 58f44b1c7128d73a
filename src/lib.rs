//! surfsup - a read-only JSON API over historical climate observations

pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod observability;
