pub mod collection;
pub mod container;
pub mod contract;
pub mod exceptions;
pub mod functional;
pub mod sequence;
pub mod strings;

pub use crate::domain::ports::{Container, Requirement};
pub use crate::utils::error::Result;
