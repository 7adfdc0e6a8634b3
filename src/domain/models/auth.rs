use serde::{Deserialize, Serialize};

/// Claims carried by the `session` cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}
