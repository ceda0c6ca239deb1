pub mod about;
pub mod client;
pub mod config;
pub mod error;
pub mod pokemon;
pub mod users;
pub mod view;

pub use about::*;
pub use client::*;
pub use config::*;
pub use error::*;
pub use pokemon::*;
pub use users::*;
pub use view::*;
