//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod input;
pub mod supervisor;

pub use input::input_task;
pub use supervisor::supervisor_task;
