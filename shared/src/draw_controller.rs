//! State machine behind the draw button.
//!
//! `Idle -> Requesting -> Animating -> Revealed -> Idle`, with failures during
//! `Requesting` dropping straight back to `Idle`. The controller only decides;
//! [`crate::draw_session::DrawSession`] performs the network call, waits out the
//! animation and talks to the view.

use rand::Rng;
use thiserror::Error;
use validator::Validate;

use crate::api::ApiError;
use crate::constants::*;
use crate::history::{render_history, HistoryLine};
use crate::settings::SpinSettings;
use crate::shared_roulette::{DrawRequest, DrawResponse};
use crate::spin::{plan_spin, SpinPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Requesting,
    Animating,
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// A draw is already running; the attempt is ignored.
    #[error("a draw is already in progress")]
    AlreadySpinning,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Request(String),
    #[error("{0}")]
    Transport(String),
    #[error("cannot {action} while {phase:?}")]
    InvalidTransition { action: &'static str, phase: DrawPhase },
}

impl DrawError {
    /// Message to show the user, or `None` when the error is silent.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            DrawError::AlreadySpinning | DrawError::InvalidTransition { .. } => None,
            DrawError::Validation(msg) | DrawError::Request(msg) | DrawError::Transport(msg) => {
                Some(msg.as_str())
            }
        }
    }
}

/// What the win modal and history panel show once the wheel has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub prize: String,
    pub history: Vec<HistoryLine>,
}

impl Reveal {
    pub fn title(&self) -> String {
        format!("{}{}", WIN_TITLE_PREFIX, self.prize)
    }
}

#[derive(Debug)]
pub struct DrawController {
    settings: SpinSettings,
    phase: DrawPhase,
    spinning: bool,
    current_rotation: f64,
    spins_completed: u64,
    pending: Option<Reveal>,
}

impl DrawController {
    pub fn new(settings: SpinSettings) -> Self {
        Self {
            settings,
            phase: DrawPhase::Idle,
            spinning: false,
            current_rotation: 0.0,
            spins_completed: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Resting angle of the wheel, in `[0, 360)`.
    pub fn current_rotation(&self) -> f64 {
        self.current_rotation
    }

    pub fn settings(&self) -> &SpinSettings {
        &self.settings
    }

    /// Validates the inputs and, if the wheel is free, marks it spinning and
    /// returns the request to dispatch. Rejected attempts leave state untouched.
    pub fn begin_spin(
        &mut self,
        config_id: Option<&str>,
        nickname: &str,
        draw_name: &str,
    ) -> Result<DrawRequest, DrawError> {
        if self.spinning {
            log::debug!("Ignoring spin request while {:?}", self.phase);
            return Err(DrawError::AlreadySpinning);
        }

        let request = DrawRequest::new(config_id, nickname, draw_name);
        if let Err(errors) = request.validate() {
            let fields = errors.field_errors();
            let message = if fields.contains_key("nickname") {
                NICKNAME_REQUIRED_ERROR
            } else {
                CONFIG_MISSING_ERROR
            };
            return Err(DrawError::Validation(message.to_string()));
        }

        self.spinning = true;
        self.phase = DrawPhase::Requesting;
        self.pending = None;
        log::debug!("Draw requested for config {}", request.config_id);
        Ok(request)
    }

    /// Consumes the server's answer. On success the returned plan describes the
    /// animation; on failure the controller is back to idle.
    pub fn on_response<R: Rng + ?Sized>(
        &mut self,
        outcome: Result<DrawResponse, ApiError>,
        rng: &mut R,
    ) -> Result<SpinPlan, DrawError> {
        if self.phase != DrawPhase::Requesting {
            return Err(DrawError::InvalidTransition {
                action: "accept a draw response",
                phase: self.phase,
            });
        }

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Draw request failed: {}", e);
                return Err(self.fail(DrawError::Transport(DRAW_NETWORK_ERROR.to_string())));
            }
        };

        if !response.success {
            let message = response
                .message
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| DRAW_FAILED_ERROR.to_string());
            return Err(self.fail(DrawError::Request(message)));
        }

        let target_angle = response.target_angle.unwrap_or(0.0);
        let sequence = self.spins_completed + 1;
        let plan = plan_spin(&self.settings, target_angle, self.current_rotation, sequence, rng);

        self.spins_completed = sequence;
        self.current_rotation = plan.resting_angle();
        self.pending = Some(Reveal {
            prize: response.prize.unwrap_or_default(),
            history: render_history(response.history.as_deref().unwrap_or_default()),
        });
        self.phase = DrawPhase::Animating;
        log::debug!(
            "Spinning to {:.2}deg over {:.2}s",
            plan.final_rotation,
            plan.duration_secs
        );
        Ok(plan)
    }

    /// Called when the reveal timer fires. Releases the spin lock.
    pub fn complete_reveal(&mut self) -> Result<Reveal, DrawError> {
        let pending = match (self.phase, self.pending.take()) {
            (DrawPhase::Animating, Some(reveal)) => reveal,
            (phase, pending) => {
                self.pending = pending;
                return Err(DrawError::InvalidTransition {
                    action: "reveal a result",
                    phase,
                });
            }
        };
        self.phase = DrawPhase::Revealed;
        self.spinning = false;
        Ok(pending)
    }

    /// The user closed the win modal.
    pub fn dismiss_reveal(&mut self) {
        if self.phase == DrawPhase::Revealed {
            self.phase = DrawPhase::Idle;
        }
    }

    fn fail(&mut self, error: DrawError) -> DrawError {
        self.phase = DrawPhase::Idle;
        self.spinning = false;
        self.pending = None;
        error
    }
}

impl Default for DrawController {
    fn default() -> Self {
        Self::new(SpinSettings::default())
    }
}
