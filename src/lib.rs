//! Chapel site: a server-rendered congregation website over PostgreSQL.
//!
//! Records come from a [`store::RecordStore`], are shaped by the query services in
//! [`service`], and are turned into HTML by a [`render::Renderer`].

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod render;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use cache::{CacheProbe, RedisProbe};
pub use config::{load_from_env, SiteConfig};
pub use error::{AppError, ConfigError};
pub use render::{MaudRenderer, Page, Renderer};
pub use routes::app;
pub use state::AppState;
pub use store::{MemoryStore, PgStore, RecordStore};
