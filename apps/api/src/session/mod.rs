//! Session identity via a signed cookie.
//!
//! The cookie value is `<uuid>.<hmac>` where the HMAC is computed over the
//! UUID with the server's session secret. The id scopes one browser's
//! in-progress application workflow; all workflow state stays server-side.

use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session";

type HmacSha256 = Hmac<Sha256>;

/// Signs a session id into a cookie value: `<uuid>.<hmac>`.
pub fn sign(id: Uuid, secret: &str) -> String {
    format!("{}.{}", id, signature(&id.to_string(), secret))
}

/// Verifies a cookie value and returns the session id if the signature holds.
pub fn verify(value: &str, secret: &str) -> Option<Uuid> {
    let (id_part, sig_part) = value.split_once('.')?;
    let id: Uuid = id_part.parse().ok()?;

    let expected = signature(id_part, secret);
    // Constant-time comparison to prevent timing attacks
    let matches: bool = expected.as_bytes().ct_eq(sig_part.as_bytes()).into();
    matches.then_some(id)
}

/// Extracts and verifies the session id from a request's Cookie header.
pub fn from_headers(headers: &HeaderMap, secret: &str) -> Option<Uuid> {
    let cookie_header = headers.get("Cookie")?.to_str().ok()?;
    let value = cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix(&format!("{SESSION_COOKIE}=")))?;
    verify(value, secret)
}

/// Builds the Set-Cookie value for a freshly minted session id.
pub fn set_cookie(id: Uuid, secret: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE,
        sign(id, secret)
    )
}

fn signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
