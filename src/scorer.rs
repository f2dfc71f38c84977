//! Password scorers - the black box behind the relay.
//!
//! The relay never looks inside a report. Anything implementing [`Scorer`]
//! can sit behind it; [`ZxcvbnScorer`] is the bundled one.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use zxcvbn::feedback::Feedback;
use zxcvbn::time_estimates::CrackTimeSeconds;
use zxcvbn::zxcvbn;

use crate::dictionary::UserDictionary;

#[cfg(feature = "tracing")]
const TRACING_TARGET: &str = "pwd_relay::scorer";

/// Default acceptance threshold on the 0-4 zxcvbn scale.
pub const DEFAULT_MIN_SCORE: u8 = 3;

/// Highest score zxcvbn hands out.
pub const MAX_SCORE: u8 = 4;

/// A password strength estimation function.
pub trait Scorer {
    /// Result of one estimation, relayed untouched.
    type Report;

    fn score(&self, password: &SecretString) -> Self::Report;
}

impl<F, R> Scorer for F
where
    F: Fn(&SecretString) -> R,
{
    type Report = R;

    fn score(&self, password: &SecretString) -> R {
        self(password)
    }
}

/// Strength report, shaped after the JavaScript zxcvbn result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Score from 0 (weakest) to 4 (strongest).
    pub score: u8,
    /// Estimated guesses required to crack the password.
    pub guesses: u64,
    pub guesses_log10: f64,
    pub crack_times_seconds: CrackTimes,
    pub crack_times_display: CrackTimesDisplay,
    pub feedback: PasswordFeedback,
}

/// Crack time estimates in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackTimes {
    /// Online attack, with throttling (100 guesses/hour).
    pub online_throttling_100_per_hour: f64,
    /// Online attack, no throttling (10 guesses/sec).
    pub online_no_throttling_10_per_second: f64,
    /// Offline attack, slow hashing (10K guesses/sec).
    pub offline_slow_hashing_1e4_per_second: f64,
    /// Offline attack, fast hashing (10B guesses/sec).
    pub offline_fast_hashing_1e10_per_second: f64,
}

/// Crack time estimates as human readable strings ("3 hours", "centuries").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrackTimesDisplay {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

/// Feedback for improving password strength.
///
/// Both fields are empty for passwords that already score well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordFeedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    /// Returns `true` if the score reaches `min_score`.
    pub fn meets(&self, min_score: u8) -> bool {
        self.score >= min_score
    }
}

/// Scorer backed by the zxcvbn algorithm.
#[derive(Debug, Clone)]
pub struct ZxcvbnScorer {
    min_score: u8,
    dictionary: UserDictionary,
}

impl ZxcvbnScorer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with a custom acceptance threshold.
    ///
    /// Values above 4 are clamped to 4.
    pub fn with_min_score(min_score: u8) -> Self {
        Self {
            min_score: min_score.min(MAX_SCORE),
            dictionary: UserDictionary::default(),
        }
    }

    /// Attaches user inputs that zxcvbn should treat as known to an attacker.
    pub fn with_dictionary(mut self, dictionary: UserDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Acceptance threshold used by [`ZxcvbnScorer::meets_requirements`].
    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// User inputs passed to zxcvbn on every evaluation.
    pub fn dictionary(&self) -> &UserDictionary {
        &self.dictionary
    }

    /// Runs zxcvbn and converts the result into a [`StrengthReport`].
    pub fn evaluate(&self, password: &str) -> StrengthReport {
        let inputs = self.dictionary.as_inputs();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: TRACING_TARGET,
            user_inputs_count = inputs.len(),
            "evaluating password strength"
        );

        let entropy = zxcvbn(password, &inputs);
        let times = entropy.crack_times();

        let crack_times_seconds = CrackTimes {
            online_throttling_100_per_hour: seconds(times.online_throttling_100_per_hour()),
            online_no_throttling_10_per_second: seconds(
                times.online_no_throttling_10_per_second(),
            ),
            offline_slow_hashing_1e4_per_second: seconds(
                times.offline_slow_hashing_1e4_per_second(),
            ),
            offline_fast_hashing_1e10_per_second: seconds(
                times.offline_fast_hashing_1e10_per_second(),
            ),
        };

        let crack_times_display = CrackTimesDisplay {
            online_throttling_100_per_hour: times.online_throttling_100_per_hour().to_string(),
            online_no_throttling_10_per_second: times
                .online_no_throttling_10_per_second()
                .to_string(),
            offline_slow_hashing_1e4_per_second: times
                .offline_slow_hashing_1e4_per_second()
                .to_string(),
            offline_fast_hashing_1e10_per_second: times
                .offline_fast_hashing_1e10_per_second()
                .to_string(),
        };

        let feedback = entropy
            .feedback()
            .map(convert_feedback)
            .unwrap_or_default();
        let score: u8 = entropy.score().into();

        // zxcvbn reports 0 guesses for "", which makes log10 -inf
        let guesses = entropy.guesses().max(1);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: TRACING_TARGET,
            score = score,
            guesses = guesses,
            has_warning = feedback.warning.is_some(),
            "password strength evaluation completed"
        );

        StrengthReport {
            score,
            guesses,
            guesses_log10: (guesses as f64).log10(),
            crack_times_seconds,
            crack_times_display,
            feedback,
        }
    }

    /// Checks the password against the configured threshold.
    pub fn meets_requirements(&self, password: &str) -> bool {
        self.evaluate(password).meets(self.min_score)
    }
}

impl Default for ZxcvbnScorer {
    #[inline]
    fn default() -> Self {
        Self::with_min_score(DEFAULT_MIN_SCORE)
    }
}

impl Scorer for ZxcvbnScorer {
    type Report = StrengthReport;

    fn score(&self, password: &SecretString) -> StrengthReport {
        self.evaluate(password.expose_secret())
    }
}

fn seconds(crack_time: CrackTimeSeconds) -> f64 {
    match crack_time {
        CrackTimeSeconds::Integer(i) => i as f64,
        CrackTimeSeconds::Float(f) => f,
    }
}

fn convert_feedback(feedback: &Feedback) -> PasswordFeedback {
    PasswordFeedback {
        warning: feedback.warning().map(|w| w.to_string()),
        suggestions: feedback
            .suggestions()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}
