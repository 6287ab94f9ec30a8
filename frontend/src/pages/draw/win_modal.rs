use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub title: Option<String>,
    pub ondismiss: Callback<MouseEvent>,
}

/// Click anywhere to close.
#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    let Some(title) = &props.title else {
        return html! {};
    };

    html! {
        <div id="win-modal" class={classes!("show", styles::MODAL_BACKDROP)} onclick={props.ondismiss.clone()}>
            <div class={styles::MODAL_CARD}>
                <h2 class={styles::MODAL_TITLE}>{title}</h2>
            </div>
        </div>
    }
}
