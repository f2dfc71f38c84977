//! Password-check relay - forwards each password to the scorer and
//! sends the report back.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio::task::JoinHandle;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::error::RelayError;

#[cfg(feature = "async")]
use crate::port::RelayPorts;

use crate::scorer::Scorer;

#[cfg(feature = "tracing")]
const TRACING_TARGET: &str = "pwd_relay::relay";

/// Relays passwords through a [`Scorer`].
///
/// Reports are never inspected or altered on the way through.
#[derive(Debug, Clone)]
pub struct PasswordRelay<S> {
    scorer: S,
}

impl<S: Scorer> PasswordRelay<S> {
    /// Wraps `scorer` in a relay.
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// The scorer every password is forwarded to.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Scores one password. A panicking scorer is not caught.
    pub fn check(&self, password: &SecretString) -> S::Report {
        self.scorer.score(password)
    }

    /// Scores one password and sends the report through `tx`.
    ///
    /// A closed receiver is logged and otherwise ignored.
    #[cfg(feature = "async")]
    pub async fn check_tx(&self, password: &SecretString, tx: mpsc::Sender<S::Report>) {
        let report = self.check(password);

        if tx.send(report).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::error!(
                target: TRACING_TARGET,
                "failed to send password report: receiver dropped"
            );
        }
    }

    /// Runs the subscribe loop until the inbound port closes or `cancel` fires.
    ///
    /// Every password taken from `checkPassword` produces exactly one report
    /// on `passwordChecked`, in arrival order. Cancellation is only observed
    /// between messages.
    ///
    /// # Returns
    /// The number of reports relayed.
    ///
    /// # Errors
    /// [`RelayError::OutboundClosed`] if the shell dropped its receiver.
    #[cfg(feature = "async")]
    pub async fn run(
        &self,
        ports: RelayPorts<S::Report>,
        cancel: CancellationToken,
    ) -> Result<usize, RelayError> {
        #[cfg(feature = "tracing")]
        tracing::info!(target: TRACING_TARGET, "password relay started");

        let result = self.run_inner(ports, cancel).await;

        #[cfg(feature = "tracing")]
        match &result {
            Ok(relayed) => {
                tracing::info!(target: TRACING_TARGET, relayed = relayed, "password relay stopped");
            }
            Err(err) => {
                tracing::error!(target: TRACING_TARGET, error = %err, "password relay failed");
            }
        }

        result
    }

    #[cfg(feature = "async")]
    async fn run_inner(
        &self,
        ports: RelayPorts<S::Report>,
        cancel: CancellationToken,
    ) -> Result<usize, RelayError> {
        let RelayPorts {
            mut inbound,
            outbound,
        } = ports;
        let mut relayed = 0;

        loop {
            let password = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    #[cfg(feature = "tracing")]
                    tracing::info!(target: TRACING_TARGET, "password relay shutdown requested");
                    break;
                }
                received = inbound.recv() => match received {
                    Some(password) => password,
                    None => break,
                },
            };

            let report = self.check(&password);
            outbound
                .send(report)
                .await
                .map_err(|_| RelayError::OutboundClosed)?;
            relayed += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(target: TRACING_TARGET, relayed = relayed, "password report sent");
        }

        Ok(relayed)
    }
}

/// Runs `relay` on its own tokio task.
#[cfg(feature = "async")]
pub fn spawn_relay<S>(
    relay: PasswordRelay<S>,
    ports: RelayPorts<S::Report>,
    cancel: CancellationToken,
) -> JoinHandle<Result<usize, RelayError>>
where
    S: Scorer + Send + Sync + 'static,
    S::Report: Send + 'static,
{
    tokio::spawn(async move { relay.run(ports, cancel).await })
}
