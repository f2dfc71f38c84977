//! Password strength relay
//!
//! Connects an application shell to a password strength estimator through
//! a pair of message ports: passwords arrive on `checkPassword`, every one
//! is scored, and the report goes back on `passwordChecked`.
//!
//! # Features
//!
//! - `async` (default): Enables the tokio ports, relay loop and cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RELAY_CAPACITY`: Port buffer size (default: 16)
//! - `PWD_RELAY_MIN_SCORE`: Acceptance threshold 0-4 (default: 3)
//! - `PWD_RELAY_DICTIONARY_PATH`: Word list of user inputs for zxcvbn
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use pwd_relay::{PasswordRelay, RelayConfig, port, spawn_relay};
//! use secrecy::SecretString;
//! use tokio_util::sync::CancellationToken;
//!
//! let config = RelayConfig::from_env()?;
//! let relay = PasswordRelay::new(config.scorer()?);
//! let (mut app, ports) = port::channel(config.capacity);
//! let cancel = CancellationToken::new();
//! let handle = spawn_relay(relay, ports, cancel.clone());
//!
//! app.check_password(SecretString::new("MyP@ssw0rd!".to_string().into())).await?;
//! if let Some(report) = app.password_checked().await {
//!     println!("Score: {}", report.score);
//! }
//!
//! cancel.cancel();
//! handle.await??;
//! # Ok(())
//! # }
//! ```

// Internal modules
mod config;
mod dictionary;
mod error;
mod relay;
mod scorer;

#[cfg(feature = "async")]
pub mod port;

// Public API
pub use config::{
    CAPACITY_ENV, ConfigError, DEFAULT_CAPACITY, DICTIONARY_PATH_ENV, MIN_SCORE_ENV, RelayConfig,
};
pub use dictionary::{DictionaryError, UserDictionary};
pub use error::RelayError;
pub use relay::PasswordRelay;
pub use scorer::{
    CrackTimes, CrackTimesDisplay, DEFAULT_MIN_SCORE, MAX_SCORE, PasswordFeedback, Scorer,
    StrengthReport, ZxcvbnScorer,
};

#[cfg(feature = "async")]
pub use port::{AppPorts, RelayPorts};

#[cfg(feature = "async")]
pub use relay::spawn_relay;
