//! Core Kernel - Foundational types shared by the quote form crates
//!
//! This crate provides the building blocks used across the domain modules:
//! - Strongly-typed identifiers
//! - Port errors and marker traits for swappable adapters
//! - Calendar helpers for date parsing and age arithmetic

pub mod identifiers;
pub mod ports;
pub mod temporal;

pub use identifiers::PolicyId;
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
pub use temporal::{age_in_years, parse_calendar_date, today, TemporalError};
