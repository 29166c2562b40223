//! Interactive terminal chat for Deskmate.
//!
//! Implements the terminal Interaction Surface: identity prompts, welcome
//! banner, slash commands, a spinner while the Completion Service works, and
//! farewell rendering after an end event. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
