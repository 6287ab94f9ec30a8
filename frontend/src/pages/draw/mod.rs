mod history_list;
mod view;
mod wheel;
mod win_modal;

use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use shared::api::RouletteClient;
use shared::draw_session::DrawSession;
use shared::history::render_history;
use shared::navigation::draw_page_url;
use shared::spin::SpinPlan;
use shared::wheel_face::WheelFace;
use crate::browser::{self, BrowserSleeper, BrowserTransport};
use crate::components::ConfigSelect;
use crate::config::load_spin_settings;
use crate::hooks::use_page_data;
use crate::styles;

use history_list::HistoryList;
use view::YewDrawView;
use wheel::Wheel;
use win_modal::WinModal;

type PageSession = DrawSession<BrowserTransport, BrowserSleeper, YewDrawView>;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(DrawPage)]
pub fn draw_page() -> Html {
    let page_data = use_page_data();
    let spinning = use_state(|| false);
    let plan = use_state(|| None::<SpinPlan>);
    let win_title = use_state(|| None::<String>);
    let history = {
        let entries = page_data.history.clone();
        use_state(move || render_history(&entries))
    };
    let nickname_ref = use_node_ref();
    let draw_name_ref = use_node_ref();

    let session = {
        let view = YewDrawView {
            spinning: spinning.clone(),
            plan: plan.clone(),
            win_title: win_title.clone(),
            history: history.clone(),
        };
        let config_id = page_data.selected_id().map(str::to_string);
        use_memo((), move |_| -> PageSession {
            DrawSession::new(
                load_spin_settings(),
                config_id,
                RouletteClient::new(Rc::new(BrowserTransport)),
                Rc::new(BrowserSleeper),
                Rc::new(view),
            )
        })
    };

    let face = {
        let prizes = page_data
            .selected
            .as_ref()
            .map(|config| config.prizes.clone())
            .unwrap_or_default();
        use_memo((), move |_| WheelFace::from_prizes(&prizes))
    };

    let on_config_change = Callback::from(|config_id: String| {
        if let Some(url) = draw_page_url(&config_id) {
            browser::navigate(&url);
        }
    });

    let on_spin = {
        let session = session.clone();
        let nickname_ref = nickname_ref.clone();
        let draw_name_ref = draw_name_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let nickname = input_value(&nickname_ref);
            let draw_name = input_value(&draw_name_ref);
            spawn_local(async move {
                if let Err(e) = session.spin(&nickname, &draw_name).await {
                    log::warn!("Draw did not complete: {}", e);
                }
            });
        })
    };

    let on_new_activity = {
        let session = session.clone();
        let draw_name_ref = draw_name_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let activity_name = input_value(&draw_name_ref);
            spawn_local(async move {
                if let Err(e) = session.new_activity(&activity_name).await {
                    log::warn!("New activity not created: {}", e);
                }
            });
        })
    };

    let on_dismiss = {
        let session = session.clone();
        let win_title = win_title.clone();
        Callback::from(move |_: MouseEvent| {
            session.dismiss_reveal();
            win_title.set(None);
        })
    };

    let selected_name = page_data.selected.as_ref().map(|config| config.name.clone());

    html! {
        <div class={styles::CONTAINER}>
            <div class="max-w-4xl mx-auto space-y-6">
                <div class={classes!(styles::CARD, "space-y-4")}>
                    <h1 class={styles::TEXT_H1}>
                        { selected_name.unwrap_or_else(|| "幸運轉盤".to_string()) }
                    </h1>
                    <ConfigSelect
                        id="config-select"
                        configs={page_data.configs.clone()}
                        selected={page_data.selected_id().map(str::to_string)}
                        onchange={on_config_change}
                    />
                </div>

                <div class={classes!(styles::CARD, "space-y-6")}>
                    <Wheel
                        face={face}
                        plan={(*plan).clone()}
                        config_id={session.config_id().map(|id| AttrValue::from(id.to_string()))}
                    />

                    <div class="grid gap-4 sm:grid-cols-2">
                        <label class={styles::TEXT_LABEL}>
                            {"抽獎人暱稱"}
                            <input id="nickname" ref={nickname_ref} type="text" class={styles::INPUT} />
                        </label>
                        <label class={styles::TEXT_LABEL}>
                            {"抽獎名稱"}
                            <input id="draw-name" ref={draw_name_ref} type="text" class={styles::INPUT} />
                        </label>
                    </div>

                    <div class="flex flex-wrap gap-3">
                        <button id="spin-btn" class={styles::BUTTON_PRIMARY} disabled={*spinning} onclick={on_spin}>
                            { if *spinning { "抽獎中..." } else { "開始抽獎" } }
                        </button>
                        <button id="new-activity" class={styles::BUTTON_SECONDARY} onclick={on_new_activity}>
                            {"新活動"}
                        </button>
                    </div>
                </div>

                <div class={styles::CARD}>
                    <h2 class={styles::TEXT_H2}>{"中獎紀錄"}</h2>
                    <HistoryList lines={(*history).clone()} />
                </div>
            </div>

            <WinModal title={(*win_title).clone()} ondismiss={on_dismiss} />
        </div>
    }
}
