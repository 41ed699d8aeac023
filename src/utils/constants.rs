pub const DEFAULT_AUTH_COOKIE_NAME: &str = "auth-token";

pub mod prod {
    pub const VERIFY_AUTH_ROUTE: &str = "/api/auth/verify";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
