//! Entry point for front ends: the [`Maze`] facade and change notification.

mod maze;
mod observer;

pub use maze::Maze;
pub use observer::{Dispatch, Observer, ObserverId, ObserverRegistry};
