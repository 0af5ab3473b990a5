//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use backend::config::AppwriteConfig;
        use backend::server_extra::auth_routes;
        use dioxus::server::axum;

        let config = AppwriteConfig::from_env();
        Ok(dioxus::server::router(App)
            .route(
                "/_auth/email-token",
                axum::routing::post(auth_routes::request_email_token).with_state(config.clone()),
            )
            .route("/_auth/session", axum::routing::post(auth_routes::create_session).with_state(config.clone()))
            .route("/_auth/sign-out", axum::routing::post(auth_routes::sign_out).with_state(config)))
    });
}
