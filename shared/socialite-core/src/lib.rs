//! Socialite Core - Shared types and service infrastructure
//!
//! This crate provides:
//! - Standard service trait all microservices implement
//! - The dialog wire protocol types shared by the dialog service and the edge gateway
//! - The caller-identity trust boundary (`X-User-ID` extraction)
//! - Error handling utilities

pub mod error;
pub mod identity;
pub mod service;
pub mod wire;

pub use error::{DialogError, Result};
pub use identity::{CallerIdentity, UserId, USER_ID_HEADER};
pub use service::{DependencyStatus, ReadinessStatus, ServiceRuntime, SocialiteService};
pub use wire::{DialogMessage, HealthResponse, SendAck, SendMessageRequest, StoreStats};
