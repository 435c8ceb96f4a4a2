use axum_extra::extract::cookie::Cookie;

use crate::config::SessionSettings;

/// How the session token travels to the client.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    // Create cookie and set the value to the passed-in token string
    pub fn create(&self, token: String) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.name.clone(), token))
            .path("/") // apply cookie to all URLs on the server
            .http_only(true) // prevent JavaScript from accessing the cookie
            .build();
        if self.secure {
            cookie.set_secure(true);
        }
        cookie
    }
}

impl From<&SessionSettings> for SessionCookie {
    fn from(settings: &SessionSettings) -> Self {
        Self::new(settings.cookie_name.clone(), settings.secure_cookie)
    }
}
