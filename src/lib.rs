//! Course outline generator
//!
//! Turns a course title into a Gemini-generated semester syllabus and renders
//! it as lightly formatted HTML, either in a server-rendered page or from the
//! command line against a running server.

pub mod ai;
pub mod app;
pub mod course;
pub mod error;
pub mod models;
pub mod page;
pub mod presenter;
pub mod server;
pub mod templates;

pub use error::{Error, Result};
