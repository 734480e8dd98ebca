//! Application-wide reactive state shared through context.
//!
//! Both stores are provided by `App`; components subscribe by reading them, and the
//! subscription ends when the reading component is dropped.

pub mod basket;
pub mod user;
