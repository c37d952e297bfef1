//! Session cookie construction and parsing
//!
//! The cookie is `HttpOnly` and `SameSite=Lax`; `Secure` is added in
//! production. Parsing is lenient about whitespace between cookie
//! pairs but strict about the value itself.

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Build the `Set-Cookie` value for a freshly issued session.
pub(crate) fn build_session_cookie(value: &str, max_age_secs: u64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, value, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the session cookie (logout).
pub fn clear_session_cookie(secure: bool) -> String {
    build_session_cookie("", 0, secure)
}

/// Extract the session cookie value from a raw `Cookie` header.
pub(crate) fn find_session_cookie(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}
