//! Task management for Taskboard.
//!
//! This module implements the two user-facing workflows of the
//! application: creating a task (two required text fields, an optional
//! image uploaded ahead of the row insert, and a completion flag) and
//! viewing the task list (full fetch ordered newest first, with
//! confirmation-gated deletes reconciled locally after the gateway
//! confirms). The hosted table is the single source of truth; the list is
//! re-fetched on every load rather than cached. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Workflow services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
