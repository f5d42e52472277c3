//! Task operations - shared business logic layer
//!
//! This module contains the core mutation and rendering logic for the
//! task list, kept free of any console I/O so it stays unit-testable.

pub mod tasks;
