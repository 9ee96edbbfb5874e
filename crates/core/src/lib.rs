pub mod config;
pub mod error;
pub mod identity;
pub mod repository;
pub mod routes;
pub mod types;

pub use config::{AuthConfig, SiteConfig, parse_site_toml};
pub use error::{Error, Result};
pub use identity::{IdentityProvider, SessionCookie, SignInAction, StaticIdentity};
pub use repository::load_all;
pub use routes::{Resolution, RouteTable, enumerate_routes, resolve};
pub use types::*;
