//! Facelet editor for the cubelace desktop app.
//!
//! [`controller`] and [`renderer`] hold the toolkit-independent editing
//! logic; [`app`] and [`ui`] wire them into eframe.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::CubelaceApp;

pub mod app;
pub mod controller;
pub mod renderer;
pub mod state;
pub mod ui;
pub mod version;
