//! Connection provider: one synchronous session per command.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use mysql::{Conn, OptsBuilder};

pub struct Db {
    pub conn: Conn,
}

impl Db {
    /// Open an authenticated session using the explicit configuration.
    ///
    /// Fails with [`AppError::Connection`] on authentication failure,
    /// unreachable host, or unknown database. The session is released by
    /// Drop on every exit path; there is no explicit close.
    pub fn connect(cfg: &Config) -> AppResult<Self> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(cfg.host.clone()))
            .tcp_port(cfg.port)
            .user(Some(cfg.user.clone()))
            .pass(Some(cfg.password.clone()))
            .db_name(Some(cfg.database.clone()));

        let conn = Conn::new(opts).map_err(AppError::Connection)?;
        Ok(Self { conn })
    }
}
