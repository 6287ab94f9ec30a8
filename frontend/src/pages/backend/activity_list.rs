use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::activity::{ActivityBoard, ActivityError};
use shared::api::RouletteClient;
use shared::navigation::activity_detail_url;
use crate::browser::{BrowserNotifier, BrowserTransport};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub activities: Vec<String>,
    pub config_id: Option<String>,
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let board = {
        let activities = props.activities.clone();
        use_memo((), move |_| {
            ActivityBoard::new(
                RouletteClient::new(Rc::new(BrowserTransport)),
                Rc::new(BrowserNotifier),
                activities,
            )
        })
    };
    let shown = use_state(|| board.activities());

    if shown.is_empty() {
        return html! { <p class={styles::TEXT_MUTED}>{"尚無活動紀錄"}</p> };
    }

    html! {
        <ul id="activity-list" class="divide-y divide-gray-200 dark:divide-gray-700">
            { for shown.iter().map(|name| {
                let on_delete = {
                    let board = board.clone();
                    let shown = shown.clone();
                    let name = name.clone();
                    Callback::from(move |_: MouseEvent| {
                        let board = board.clone();
                        let shown = shown.clone();
                        let name = name.clone();
                        spawn_local(async move {
                            match board.delete(&name).await {
                                Ok(()) => shown.set(board.activities()),
                                Err(ActivityError::ConfirmationDeclined) => {}
                                Err(e) => log::warn!("Could not delete activity {}: {}", name, e),
                            }
                        });
                    })
                };
                let href = activity_detail_url(props.config_id.as_deref(), name);

                html! {
                    <li key={name.clone()} class="flex items-center justify-between py-2">
                        <a class={styles::LINK} {href}>{name}</a>
                        <button type="button" class={styles::BUTTON_DANGER} onclick={on_delete}>{"刪除"}</button>
                    </li>
                }
            }) }
        </ul>
    }
}
