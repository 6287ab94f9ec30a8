//! Drives a [`DrawController`] through one draw: dispatch, animate, reveal.
//!
//! The reveal is scheduled for `duration + reveal_buffer` after the animation
//! starts rather than waiting for an animation-end event, so it can never
//! precede the wheel settling.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::activity::{interpret_ack, prepare_new_activity, ActivityError};
use crate::api::{FormTransport, RouletteClient};
use crate::constants::*;
use crate::draw_controller::{DrawController, DrawError, DrawPhase, Reveal};
use crate::navigation::after_new_activity_url;
use crate::settings::SpinSettings;
use crate::view::{DrawView, Sleeper};

pub struct DrawSession<T: ?Sized, S: ?Sized, V: ?Sized> {
    controller: RefCell<DrawController>,
    config_id: Option<String>,
    client: RouletteClient<T>,
    sleeper: Rc<S>,
    view: Rc<V>,
    rng: RefCell<StdRng>,
}

impl<T, S, V> DrawSession<T, S, V>
where
    T: FormTransport + ?Sized,
    S: Sleeper + ?Sized,
    V: DrawView + ?Sized,
{
    pub fn new(
        settings: SpinSettings,
        config_id: Option<String>,
        client: RouletteClient<T>,
        sleeper: Rc<S>,
        view: Rc<V>,
    ) -> Self {
        Self {
            controller: RefCell::new(DrawController::new(settings)),
            config_id: config_id.filter(|id| !id.trim().is_empty()),
            client,
            sleeper,
            view,
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Replaces the entropy-seeded generator, for reproducible spins.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        *self.rng.get_mut() = rng;
        self
    }

    pub fn is_spinning(&self) -> bool {
        self.controller.borrow().is_spinning()
    }

    pub fn phase(&self) -> DrawPhase {
        self.controller.borrow().phase()
    }

    pub fn current_rotation(&self) -> f64 {
        self.controller.borrow().current_rotation()
    }

    pub fn config_id(&self) -> Option<&str> {
        self.config_id.as_deref()
    }

    /// Runs a full draw. Every failure is reported to the view before returning,
    /// except an attempt made while another draw is still running.
    pub async fn spin(&self, nickname: &str, draw_name: &str) -> Result<Reveal, DrawError> {
        let attempt = self
            .controller
            .borrow_mut()
            .begin_spin(self.config_id.as_deref(), nickname, draw_name);
        let request = match attempt {
            Ok(request) => request,
            Err(err) => return Err(self.report(err)),
        };
        self.view.set_spinning(true);

        let outcome = self.client.draw(&request).await;
        let planned = {
            let mut rng = self.rng.borrow_mut();
            self.controller.borrow_mut().on_response(outcome, &mut *rng)
        };
        let plan = match planned {
            Ok(plan) => plan,
            Err(err) => {
                self.view.set_spinning(false);
                return Err(self.report(err));
            }
        };

        self.view.start_animation(&plan);
        self.sleeper.sleep_ms(plan.reveal_delay_ms).await;

        let revealed = self.controller.borrow_mut().complete_reveal();
        match revealed {
            Ok(reveal) => {
                self.view.show_reveal(&reveal);
                self.view.set_spinning(false);
                log::info!("Revealed prize {}", reveal.prize);
                Ok(reveal)
            }
            Err(err) => {
                log::error!("Reveal failed: {}", err);
                self.view.set_spinning(false);
                Err(err)
            }
        }
    }

    pub fn dismiss_reveal(&self) {
        self.controller.borrow_mut().dismiss_reveal();
    }

    /// Archives the current draws under `activity_name` and reloads the page.
    /// Ignored while a draw is running.
    pub async fn new_activity(&self, activity_name: &str) -> Result<(), ActivityError> {
        if self.is_spinning() {
            return Err(ActivityError::Busy);
        }

        let result = match prepare_new_activity(activity_name, self.config_id.as_deref()) {
            Ok(request) => interpret_ack(
                self.client.new_activity(&request).await,
                NEW_ACTIVITY_FAILED_ERROR,
                NEW_ACTIVITY_NETWORK_ERROR,
            ),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.view
                    .navigate(&after_new_activity_url(self.config_id.as_deref()));
                Ok(())
            }
            Err(err) => {
                if let Some(message) = err.user_message() {
                    self.view.alert(message);
                }
                Err(err)
            }
        }
    }

    fn report(&self, err: DrawError) -> DrawError {
        if let Some(message) = err.user_message() {
            self.view.alert(message);
        }
        err
    }
}
