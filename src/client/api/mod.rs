#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod basket;

#[cfg(feature = "web")]
pub mod catalog;

#[cfg(feature = "web")]
pub mod moderator;

#[cfg(feature = "web")]
pub mod user;
