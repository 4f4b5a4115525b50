//! Headless driver for the redgulch simulation: scripted runs that wire the
//! client input layer to the session, for soak tests and profiling.

pub mod harness;
