//! Adapters between the forms and the outside world.

pub mod csv;
