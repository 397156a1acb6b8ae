//! Shared application state for all routes.

use crate::auth::TokenService;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub tokens: TokenService,
}
