mod backend;
pub mod client;
mod events;
pub mod fragment;
pub mod types;

pub use backend::AuthBackend;
pub use client::*;
pub use events::{AuthEvents, AuthListener, Subscription};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
