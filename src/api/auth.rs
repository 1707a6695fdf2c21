//! Auth Calls
//!
//! Login and signup; the only endpoints that go out without a bearer token.

use super::{ApiClient, Result};
use crate::models::{LoginRequest, SignupRequest, TokenResponse};

/// Exchange credentials for a bearer token.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<String> {
    let body = LoginRequest { username, password };
    let response: TokenResponse = client.post("/auth/login", &body).await?;
    Ok(response.token)
}

/// Create an account. The server replies with a confirmation message we
/// don't need; validation failures surface through the error taxonomy.
pub async fn signup(client: &ApiClient, username: &str, email: &str, password: &str) -> Result<()> {
    let body = SignupRequest {
        username,
        email,
        password,
    };
    let _: serde_json::Value = client.post("/auth/signup", &body).await?;
    Ok(())
}
