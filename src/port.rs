//! Message ports between the application shell and the relay.
//!
//! `checkPassword` carries passwords from the shell to the relay,
//! `passwordChecked` carries reports back.

use secrecy::SecretString;
use tokio::sync::mpsc;

use crate::error::RelayError;

/// Shell-side ends of both ports.
#[derive(Debug)]
pub struct AppPorts<R> {
    check_password: mpsc::Sender<SecretString>,
    password_checked: mpsc::Receiver<R>,
}

/// Relay-side ends of both ports.
#[derive(Debug)]
pub struct RelayPorts<R> {
    pub(crate) inbound: mpsc::Receiver<SecretString>,
    pub(crate) outbound: mpsc::Sender<R>,
}

/// Creates a connected pair of port ends, each buffering `capacity` messages.
///
/// # Panics
///
/// Panics if `capacity` is zero, like [`mpsc::channel`].
pub fn channel<R>(capacity: usize) -> (AppPorts<R>, RelayPorts<R>) {
    let (check_tx, check_rx) = mpsc::channel(capacity);
    let (checked_tx, checked_rx) = mpsc::channel(capacity);

    (
        AppPorts {
            check_password: check_tx,
            password_checked: checked_rx,
        },
        RelayPorts {
            inbound: check_rx,
            outbound: checked_tx,
        },
    )
}

impl<R> AppPorts<R> {
    /// Submits a password on `checkPassword`.
    ///
    /// # Errors
    ///
    /// [`RelayError::InboundClosed`] once the relay side is gone.
    pub async fn check_password(&self, password: SecretString) -> Result<(), RelayError> {
        self.check_password
            .send(password)
            .await
            .map_err(|_| RelayError::InboundClosed)
    }

    /// Waits for the next report on `passwordChecked`.
    ///
    /// Returns `None` when the relay is gone and every buffered report
    /// has been taken.
    pub async fn password_checked(&mut self) -> Option<R> {
        self.password_checked.recv().await
    }

    /// Splits into the raw channel halves.
    pub fn into_inner(self) -> (mpsc::Sender<SecretString>, mpsc::Receiver<R>) {
        (self.check_password, self.password_checked)
    }
}
