//! Server Configuration
//!
//! Process-level settings read from the environment at startup.
//!
//! | Variable                   | Default                                           |
//! |----------------------------|---------------------------------------------------|
//! | `DATABASE_URL`             | required                                          |
//! | `BIND_ADDR`                | `0.0.0.0:31113`                                   |
//! | `DATABASE_MAX_CONNECTIONS` | `5`                                               |
//! | `FRONTEND_ORIGINS`         | `http://localhost:40922,http://127.0.0.1:40922`   |
//! | `BCRYPT_COST`              | `12`                                              |
//! | `ADMIN_LOGIN_ID`, `ADMIN_PASSWORD`, `ADMIN_NICKNAME`, `ADMIN_EMAIL` | unset |
//!
//! The four `ADMIN_*` variables are all-or-none.

use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

use crate::password::{DEFAULT_COST, MAX_COST, MIN_COST};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

const ADMIN_VARS: [&str; 4] = [
    "ADMIN_LOGIN_ID",
    "ADMIN_PASSWORD",
    "ADMIN_NICKNAME",
    "ADMIN_EMAIL",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("ADMIN_LOGIN_ID, ADMIN_PASSWORD, ADMIN_NICKNAME and ADMIN_EMAIL must be set together")]
    PartialAdminSeed,
}

/// Credentials for the administrator account created at startup
///
/// Values are raw; validation happens when the account is registered.
#[derive(Clone)]
pub struct AdminSeed {
    pub login_id: String,
    pub password: String,
    pub nickname: String,
    pub email: String,
}

impl fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeed")
            .field("login_id", &self.login_id)
            .field("password", &"[REDACTED]")
            .field("nickname", &self.nickname)
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub bcrypt_cost: u32,
    pub admin_seed: Option<AdminSeed>,
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), || {
            Ok(SocketAddr::from(([0, 0, 0, 0], 31113)))
        })?;

        let database_max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
            || Ok(DEFAULT_MAX_CONNECTIONS),
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), || Ok(DEFAULT_COST))?;
        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let admin_values: Vec<Option<String>> = ADMIN_VARS.iter().map(|name| get(name)).collect();
        let admin_seed = match admin_values.as_slice() {
            [Some(login_id), Some(password), Some(nickname), Some(email)] => Some(AdminSeed {
                login_id: login_id.clone(),
                password: password.clone(),
                nickname: nickname.clone(),
                email: email.clone(),
            }),
            values if values.iter().all(Option::is_none) => None,
            _ => return Err(ConfigError::PartialAdminSeed),
        };

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            frontend_origins,
            bcrypt_cost,
            admin_seed,
        })
    }
}

fn parse_or<T, D>(name: &'static str, value: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match value {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        None => default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/board")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/board");
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:40922", "http://127.0.0.1:40922"]
        );
        assert_eq!(config.bcrypt_cost, 12);
        assert!(config.admin_seed.is_none());
    }

    #[test]
    fn test_database_url_required() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let err = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/board"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("FRONTEND_ORIGINS", " https://a.example , ,https://b.example"),
            ("BCRYPT_COST", "4"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_max_connections, 20);
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn test_invalid_values() {
        let base = [("DATABASE_URL", "postgres://db/board")];

        let cases = [
            ("BIND_ADDR", "not-an-addr"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
            ("BCRYPT_COST", "3"),
            ("BCRYPT_COST", "32"),
        ];

        for (name, value) in cases {
            let mut vars = base.to_vec();
            vars.push((name, value));
            let err = ServerConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { name: n, .. } if n == name),
                "{name}={value} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_admin_seed_complete() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/board"),
            ("ADMIN_LOGIN_ID", "admin01"),
            ("ADMIN_PASSWORD", "Adm1n!pass"),
            ("ADMIN_NICKNAME", "관리자"),
            ("ADMIN_EMAIL", "admin@example.com"),
        ]))
        .unwrap();

        let seed = config.admin_seed.unwrap();
        assert_eq!(seed.login_id, "admin01");
        assert_eq!(seed.nickname, "관리자");

        let debug = format!("{seed:?}");
        assert!(!debug.contains("Adm1n!pass"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_admin_seed_partial_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/board"),
            ("ADMIN_LOGIN_ID", "admin01"),
            ("ADMIN_PASSWORD", "Adm1n!pass"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::PartialAdminSeed);
    }
}
