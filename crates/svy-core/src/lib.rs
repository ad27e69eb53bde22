//! # svy-core
//!
//! Core types shared by every survey-audit crate.
//!
//! This crate provides:
//! - Entity structs for the interview tree (interview, household, home,
//!   person, journey, visited place, trip, segment)
//! - The [`SurveyObject`](object::SurveyObject) trait used for identifier and
//!   field-presence lookups
//! - Loosely-typed GeoJSON point features with syntactic validation
//! - Object-type, audit-level, mode, and activity enums
//! - The [`AuditForObject`](audit::AuditForObject) finding record
//! - Cross-cutting error types

pub mod audit;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod geometry;
pub mod object;
