use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::users::store::{InMemoryUserStore, UserStore};
use crate::utils::jwt::TokenCodec;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub token_codec: TokenCodec,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    let jwt_config = JwtConfig::from_env();

    AppState {
        users: Arc::new(InMemoryUserStore::new()),
        token_codec: TokenCodec::new(&jwt_config),
        cors_config: CorsConfig::from_env(),
    }
}
