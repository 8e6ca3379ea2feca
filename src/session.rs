use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;

/// localStorage key the admin token is persisted under.
const TOKEN_KEY: &str = "admin_jwt";

/// Route the browser is sent to when the session is gone.
pub const LOGIN_PATH: &str = "/";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Hard navigation back to the login screen. Used by the response
/// interceptor so every view reacts to session expiry the same way.
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

/// Decodes the payload segment of a JWT without verifying the signature.
/// Display-only; the server remains the authority on the token.
pub fn decode_claims(token: &str) -> Option<Value> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Typed view of the logged-in admin, derived from the token and threaded
/// through context instead of a module-level role string.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub admin_name: String,
    pub admin_id: String,
    pub is_admin: bool,
}

impl Session {
    pub fn from_token(token: &str) -> Option<Session> {
        let claims = decode_claims(token)?;

        let claim_str = |keys: &[&str]| {
            keys.iter()
                .find_map(|k| claims.get(*k).and_then(Value::as_str))
                .map(str::to_string)
        };

        // The backend has emitted several claim spellings over time.
        let admin_name = claim_str(&["adminName", "name"]).unwrap_or_else(|| "Administrator".to_string());
        let admin_id = claim_str(&["sub", "adminId", "id"]).unwrap_or_default();
        let role = claim_str(&["role", "userType"]).unwrap_or_default();
        let is_admin = role.eq_ignore_ascii_case("admin") || role == "A";

        Some(Session {
            admin_name,
            admin_id,
            is_admin,
        })
    }
}

/// Session derived from the persisted token, if any.
pub fn current() -> Option<Session> {
    Session::from_token(&token()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_token(claims: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_payload_claims() {
        let token = fake_token(r#"{"adminName":"Alice","sub":"A001","role":"ADMIN"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims["adminName"], "Alice");
        assert_eq!(claims["sub"], "A001");
    }

    #[test]
    fn session_reads_primary_claims() {
        let token = fake_token(r#"{"adminName":"Alice","sub":"A001","role":"ADMIN"}"#);
        let session = Session::from_token(&token).unwrap();
        assert_eq!(session.admin_name, "Alice");
        assert_eq!(session.admin_id, "A001");
        assert!(session.is_admin);
    }

    #[test]
    fn session_falls_back_to_legacy_claims() {
        let token = fake_token(r#"{"name":"Bob","adminId":"A002","userType":"A"}"#);
        let session = Session::from_token(&token).unwrap();
        assert_eq!(session.admin_name, "Bob");
        assert_eq!(session.admin_id, "A002");
        assert!(session.is_admin);
    }

    #[test]
    fn non_admin_role_is_not_admin() {
        let token = fake_token(r#"{"name":"Carol","sub":"U001","role":"USER"}"#);
        let session = Session::from_token(&token).unwrap();
        assert!(!session.is_admin);
    }

    #[test]
    fn malformed_token_yields_nothing() {
        assert!(decode_claims("not-a-jwt").is_none());
        assert!(decode_claims("a.%%%.c").is_none());
        assert!(Session::from_token("").is_none());
    }
}
