//! Client core: the state a marketplace app holds between screens.
//!
//! Each piece is an owned struct with an explicit lifecycle, injected
//! into whatever drives it (a UI layer, a test, a CLI):
//!
//! - [`SessionStore`]: the current token and decoded claim, persisted
//!   across restarts through a [`KeyValueStorage`];
//! - [`Cart`] and [`Favorites`]: in-memory collections keyed by product
//!   id, driven by single-threaded UI events;
//! - [`ApiClient`]: a thin HTTP client for the REST API that attaches
//!   the session's bearer token to authenticated calls.

pub mod api;
pub mod cart;
pub mod error;
pub mod favorites;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use cart::{Cart, CartItem};
pub use error::ClientError;
pub use favorites::{FavoriteProduct, Favorites};
pub use session::SessionStore;
pub use storage::KeyValueStorage;
