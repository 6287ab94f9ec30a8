mod activity_list;
mod prize_rows_editor;

use yew::prelude::*;
use shared::constants::UNNAMED_CONFIG;
use shared::history::render_history;
use shared::navigation::backend_page_url;
use crate::browser;
use crate::components::ConfigSelect;
use crate::hooks::use_page_data;
use crate::styles;

use activity_list::ActivityList;
use prize_rows_editor::PrizeRowsEditor;

const BACKEND_SELECT_ID: &str = "backend-config";

#[function_component(BackendPage)]
pub fn backend_page() -> Html {
    let page_data = use_page_data();
    let selected_id = page_data.selected_id().map(str::to_string);

    // Loading only happens on the button, not on change
    let chosen = {
        let initial = selected_id
            .clone()
            .or_else(|| page_data.configs.first().map(|config| config.id.clone()))
            .unwrap_or_default();
        use_state(move || initial)
    };

    let on_config_change = {
        let chosen = chosen.clone();
        Callback::from(move |config_id: String| chosen.set(config_id))
    };

    let on_load = {
        let chosen = chosen.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(url) = backend_page_url(&chosen) {
                browser::navigate(&url);
            }
        })
    };

    let title = page_data
        .selected
        .as_ref()
        .map(|config| config.name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNNAMED_CONFIG.to_string());

    html! {
        <div class={styles::CONTAINER}>
            <div class="max-w-4xl mx-auto space-y-6">
                <div class={classes!(styles::CARD, "space-y-4")}>
                    <h1 class={styles::TEXT_H1}>{"抽獎後台"}</h1>
                    <div class="flex gap-3">
                        <ConfigSelect
                            id={BACKEND_SELECT_ID}
                            configs={page_data.configs.clone()}
                            selected={selected_id.clone()}
                            onchange={on_config_change}
                        />
                        <button id="load-config" type="button" class={styles::BUTTON_SECONDARY} onclick={on_load}>
                            {"載入"}
                        </button>
                    </div>
                </div>

                <div class={classes!(styles::CARD, "space-y-4")}>
                    <h2 class={styles::TEXT_H2}>{title}</h2>
                    <PrizeRowsEditor selected={page_data.selected.clone()} />
                </div>

                <div class={classes!(styles::CARD, "space-y-4")}>
                    <h2 class={styles::TEXT_H2}>{"活動紀錄"}</h2>
                    <ActivityList activities={page_data.activities.clone()} config_id={selected_id} />
                </div>

                <div class={classes!(styles::CARD, "space-y-4")}>
                    <h2 id="history-heading" class={styles::TEXT_H2}>{page_data.history_heading()}</h2>
                    <ul class={styles::HISTORY_LIST}>
                        { for render_history(&page_data.history).iter().map(|line| html! { <li>{line.text()}</li> }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}
