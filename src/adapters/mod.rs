//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Token validation (OIDC, mock)
//! - `http` - Axum routers, handlers, and DTOs
//! - `memory` - In-memory implementations for tests
//! - `postgres` - PostgreSQL persistence

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
