//! A canvas that fills with stars over a fixed duration,
//! paired with a vertical progress bar that changes color
//! as it fills.
//!
//! This crate holds the windowing-independent core. See
//! `starfill-app` for the frontend.

mod animator;
mod bar;
mod color;
mod controller;
mod error;
mod event;
mod settings;
mod star_field;
mod tier;

pub use animator::{ProgressAnimator, RunId, Tick};
pub use bar::VerticalBar;
pub use color::Color;
pub use controller::AppController;
pub use error::Error;
pub use event::{EventKind, Listeners, ProgressEvent};
pub use settings::Settings;
pub use star_field::{Scatter, StarField};
pub use tier::Tier;

pub extern crate instant;
pub extern crate tiny_skia;
