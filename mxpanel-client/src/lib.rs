//! # mxpanel-client
//!
//! Client for the DirectAdmin-compatible control-panel API that backs the
//! mxpanel self-service layer.
//!
//! The panel speaks a plaintext query protocol over TLS on port 2222:
//! commands are HTTP requests against `/CMD_API_*` paths authenticated with
//! a per-request credential pair, and replies are URL-encoded `key=value`
//! bodies with an `error`/`details` failure convention. This crate owns the
//! three protocol concerns:
//!
//! - [`transport`] — the HTTPS session ([`HttpsTransport`]) and the
//!   [`PanelTransport`] seam the orchestration layer mocks in tests.
//! - [`codec`] — decoding of key/value bodies ([`ApiResponse`]) and the
//!   positional DKIM zone-line parser ([`extract_dkim_key`]).
//! - [`api`] — one typed method per command ([`PanelApi`]).
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — the platform's TLS implementation.
//! - **`rustls`** — rustls, for cross-compilation targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mxpanel_client::{HttpsTransport, LoginIdentity, PanelApi, SessionConfig};
//!
//! # async fn example() -> mxpanel_client::Result<()> {
//! let config = SessionConfig::new(
//!     "panel.example.net",
//!     LoginIdentity::sub_account("admin", "client7"),
//!     "api-key",
//! );
//! let api = PanelApi::new(Arc::new(HttpsTransport::new(config)));
//! for domain in api.show_domains().await? {
//!     println!("{domain}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Remote
//! business rejections surface as [`ClientError::CommandFailed`] with the
//! panel's `details` text verbatim; network and TLS failures are fatal for
//! the operation and are never retried by this crate.

pub mod api;
pub mod codec;
pub mod error;
pub mod transport;
mod utils;

pub use api::{LoginKeyRequest, PanelApi};
pub use codec::{extract_dkim_key, ApiResponse};
pub use error::{ClientError, Result};
pub use transport::{
    HttpsTransport, LoginIdentity, PanelTransport, SessionConfig, DEFAULT_ADMIN_PORT,
};
