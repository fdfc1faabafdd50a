//! cellgrid_engine - Cell model and formula engine.

pub mod engine;
