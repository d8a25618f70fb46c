// src/flash.rs
//
// One-shot flash notifications carried in a signed cookie. At most one
// notification is pending per client; it is consumed and cleared on the
// next render.

use std::fmt;

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

const COOKIE_NAME: &str = "clinic.notice";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    #[allow(dead_code)]
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

// Used as a CSS class by the flash partial.
impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::Success => write!(f, "success"),
            NoticeKind::Error => write!(f, "error"),
        }
    }
}

/// Queues a notification for the next rendered page. Best-effort: a cookie
/// that fails to serialize is dropped with a warning, never an error page.
pub fn push(jar: SignedCookieJar, notice: Notice, ttl_minutes: i64) -> SignedCookieJar {
    let payload = match serde_json::to_string(&notice) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("flash notice dropped: {err}");
            return jar;
        }
    };

    let cookie = Cookie::build((COOKIE_NAME, payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(ttl_minutes));

    jar.add(cookie)
}

/// Reads and clears the pending notification, if any. A cookie that does not
/// parse (stale format, tampering already rejected by the signature) reads
/// as no notification.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Notice>) {
    let notice = jar
        .get(COOKIE_NAME)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok());

    // The removal cookie must carry the same path to match.
    let mut removal = Cookie::from(COOKIE_NAME);
    removal.set_path("/");

    (jar.remove(removal), notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    #[test]
    fn push_then_take_returns_the_notice_once() {
        let jar = SignedCookieJar::new(Key::generate());

        let jar = push(jar, Notice::success("Patient added successfully..!"), 60);
        let (jar, notice) = take(jar);

        assert_eq!(
            notice,
            Some(Notice::success("Patient added successfully..!"))
        );

        // consumed: a second take sees nothing
        let (_jar, notice) = take(jar);
        assert_eq!(notice, None);
    }

    #[test]
    fn take_on_empty_jar_is_none() {
        let jar = SignedCookieJar::new(Key::generate());
        let (_jar, notice) = take(jar);
        assert_eq!(notice, None);
    }
}
