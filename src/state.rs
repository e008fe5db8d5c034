use crate::config::Config;
use crate::service::QueryService;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub service: QueryService,
    pub config: Config,
}

impl FromRef<AppState> for QueryService {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
