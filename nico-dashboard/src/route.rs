//! Navigation targets

use nico_client::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    SignIn,
}

/// Every view sends signed-out users to sign-in
pub async fn guard(session: &SessionStore) -> Route {
    if session.token().await.is_some() {
        Route::Dashboard
    } else {
        Route::SignIn
    }
}
