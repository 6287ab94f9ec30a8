use yew::prelude::UseStateHandle;
use shared::draw_controller::Reveal;
use shared::history::HistoryLine;
use shared::spin::SpinPlan;
use shared::view::{DrawView, Notifier};
use crate::browser;

/// Bridges controller output into the draw page's component state.
pub struct YewDrawView {
    pub spinning: UseStateHandle<bool>,
    pub plan: UseStateHandle<Option<SpinPlan>>,
    pub win_title: UseStateHandle<Option<String>>,
    pub history: UseStateHandle<Vec<HistoryLine>>,
}

impl Notifier for YewDrawView {
    fn alert(&self, message: &str) {
        browser::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        browser::confirm(message)
    }

    fn navigate(&self, url: &str) {
        browser::navigate(url);
    }
}

impl DrawView for YewDrawView {
    fn set_spinning(&self, spinning: bool) {
        self.spinning.set(spinning);
    }

    fn start_animation(&self, plan: &SpinPlan) {
        self.plan.set(Some(plan.clone()));
    }

    fn show_reveal(&self, reveal: &Reveal) {
        self.win_title.set(Some(reveal.title()));
        self.history.set(reveal.history.clone());
    }
}
