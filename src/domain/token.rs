use secrecy::Secret;

/// Opaque credential read from the auth cookie.
#[derive(Debug)]
pub struct AuthToken(Secret<String>);

impl AuthToken {
    pub fn parse(s: String) -> Result<Self, AuthTokenError> {
        if s.is_empty() {
            return Err(AuthTokenError::EmptyToken);
        }
        Ok(AuthToken(Secret::new(s)))
    }
}

impl AsRef<Secret<String>> for AuthToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

#[derive(Debug, PartialEq)]
pub enum AuthTokenError {
    EmptyToken,
}
