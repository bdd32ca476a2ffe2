//! A small terminal runtime: an [`App`] trait for screens and a [`Tui`]
//! driver that multiplexes input events with a periodic tick.

pub(crate) use self::{app::App, runner::Tui};

mod app;
mod event;
mod event_loop;
mod runner;
