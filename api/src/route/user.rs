use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{change_password, get_current_user, register_user};

pub fn build_user_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_user))
        .route("/me", get(get_current_user))
        .route("/me/password", put(change_password));

    Router::new().nest("/users", routers)
}
