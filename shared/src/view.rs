use async_trait::async_trait;

use crate::draw_controller::Reveal;
use crate::spin::SpinPlan;

/// Blocking dialogs and page navigation.
pub trait Notifier {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn navigate(&self, url: &str);
}

/// Everything the draw flow needs from the page.
pub trait DrawView: Notifier {
    fn set_spinning(&self, spinning: bool);
    fn start_animation(&self, plan: &SpinPlan);
    fn show_reveal(&self, reveal: &Reveal);
}

#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep_ms(&self, ms: u32);
}
