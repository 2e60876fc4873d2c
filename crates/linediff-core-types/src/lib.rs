//! Core types shared across linediff facilities
//!
//! This crate carries the canonical schema constants used by the logging
//! and error facilities:
//!
//! - **Field keys**: component, op, event, duration and diff-size fields
//! - **Event names**: start, end, end_error

pub mod schema;
