//! Model-View-Presenter wiring for a screen that loads and shows users.
//!
//! - [`service`]: asynchronous sources of user records.
//! - [`view`]: the contract a screen implements to be driven.
//! - [`presenter`]: orchestrates one fetch cycle between the two.
//! - [`ui`]: screen state owned by the UI thread, fed by [`view::ChannelView`].

pub mod config;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod service;
pub mod ui;
pub mod view;
