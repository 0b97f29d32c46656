use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::middleware::Next;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Action identifier the bulk rebuild nonce is scoped to.
pub const REBUILD_ACTION: &str = "rebuild_post_names";

pub fn security_headers<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();

    headers.insert(header::X_CONTENT_TYPE_OPTIONS, "nosniff".parse().unwrap());

    headers.insert(header::X_FRAME_OPTIONS, "DENY".parse().unwrap());

    headers.insert(
        header::REFERRER_POLICY,
        "strict-origin-when-cross-origin".parse().unwrap(),
    );

    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; frame-ancestors 'none'; base-uri 'self'; form-action 'self'".parse().unwrap(),
    );

    response
}

pub async fn apply_security_headers(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    security_headers(response)
}

/// Time-scoped, action-bound tokens gating the bulk rebuild endpoint.
///
/// A token is an HMAC over `tick|action` where a tick is half the
/// configured lifetime; the current and previous tick both verify, so a
/// token stays valid for between half and the full lifetime.
pub struct NonceManager {
    secret: String,
    ttl_secs: u64,
}

impl NonceManager {
    pub fn new(secret: Option<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.unwrap_or_else(Self::generate_secret),
            ttl_secs,
        }
    }

    pub fn generate_secret() -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    pub fn create(&self, action: &str) -> String {
        self.create_at(action, chrono::Utc::now().timestamp())
    }

    pub fn verify(&self, token: &str, action: &str) -> bool {
        self.verify_at(token, action, chrono::Utc::now().timestamp())
    }

    pub fn create_at(&self, action: &str, now: i64) -> String {
        self.hash(self.tick(now), action)
    }

    pub fn verify_at(&self, token: &str, action: &str, now: i64) -> bool {
        if token.is_empty() {
            return false;
        }
        let tick = self.tick(now);
        token == self.hash(tick, action) || token == self.hash(tick - 1, action)
    }

    fn tick(&self, now: i64) -> i64 {
        now / (self.ttl_secs as i64 / 2).max(1)
    }

    fn hash(&self, tick: i64, action: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC key length");
        mac.update(format!("{}|{}", tick, action).as_bytes());
        let digest = hex::encode(mac.finalize().into_bytes());
        digest[..16].to_string()
    }
}
