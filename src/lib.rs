//! LearnTrack - Personal Study Planning Backend
//!
//! This crate implements a nested course / unit / task tracker where every
//! resource is reached through its ownership chain, so one resolution path
//! decides both existence and access.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
