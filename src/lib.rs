//! MoodBot Library
//!
//! This library provides the core of the MoodBot paint palette recommender:
//! color math, catalog loading, preference modelling, scoring, palette
//! assembly, paint estimation and JSON export.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod export;
pub mod models;
