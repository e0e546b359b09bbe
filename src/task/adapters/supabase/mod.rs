//! Hosted gateway adapters (Supabase-style PostgREST + Storage APIs).
//!
//! The gateway is an external collaborator: these adapters consume its
//! wire contract and translate between task rows and domain types. All
//! calls authenticate with the public API key; no call is retried.

mod client;
mod models;
mod object_store;
mod repository;

pub use client::{SupabaseClient, SupabaseError};
pub use object_store::SupabaseObjectStore;
pub use repository::SupabaseTaskRepository;
