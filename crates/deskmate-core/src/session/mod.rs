//! Session lifecycle: the controller that applies events and the registry
//! that holds live sessions.

pub mod controller;
pub mod registry;
