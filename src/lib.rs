//! Hand-gesture slide control.
//!
//! Classifies the fingers of a tracked hand, maps the finger count to a slide
//! command, and debounces emission so a held gesture fires once per cooldown.
//! Camera capture, pose estimation and key injection are collaborators behind
//! traits; a recorded-session replay stands in for the first two.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod gesture;
pub mod input;
pub mod tracking;

pub use config::Config;
