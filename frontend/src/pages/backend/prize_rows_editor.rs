use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::constants::{BACKEND_PAGE_PATH, CSRF_FORM_FIELD, INVALID_PROBABILITY_ERROR};
use shared::prize_rows::PrizeRowList;
use shared::shared_roulette::SelectedConfig;
use crate::browser;
use crate::config::csrf_token;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeRowsEditorProps {
    pub selected: Option<SelectedConfig>,
}

/// Submitted natively so the server can redirect back with the saved config.
#[function_component(PrizeRowsEditor)]
pub fn prize_rows_editor(props: &PrizeRowsEditorProps) -> Html {
    let rows = {
        let prizes = props
            .selected
            .as_ref()
            .map(|config| config.prizes.clone())
            .unwrap_or_default();
        use_state(move || PrizeRowList::from_prizes(&prizes))
    };
    let config_id = props.selected.as_ref().map(|config| config.id.clone()).unwrap_or_default();
    let config_name = props.selected.as_ref().map(|config| config.name.clone()).unwrap_or_default();

    let onsubmit = {
        let rows = rows.clone();
        Callback::from(move |e: SubmitEvent| {
            if let Err((index, err)) = rows.validate() {
                e.prevent_default();
                log::warn!("Prize row {} rejected: {}", index, err);
                browser::alert(INVALID_PROBABILITY_ERROR);
            }
        })
    };

    let on_add = {
        let rows = rows.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*rows).clone();
            next.add_row();
            rows.set(next);
        })
    };

    let can_remove = rows.can_remove();
    let row_views = rows.rows().iter().enumerate().map(|(index, row)| {
        let on_name = {
            let rows = rows.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*rows).clone();
                next.set_name(index, input.value());
                rows.set(next);
            })
        };
        let on_probability = {
            let rows = rows.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*rows).clone();
                next.set_probability(index, input.value());
                rows.set(next);
            })
        };
        let on_remove = {
            let rows = rows.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*rows).clone();
                if next.remove_row(index) {
                    rows.set(next);
                }
            })
        };

        html! {
            <div key={index} class="row flex items-center gap-2">
                <input
                    type="text"
                    name="prize_name"
                    placeholder="獎項名稱"
                    class={styles::INPUT}
                    value={row.name.clone()}
                    oninput={on_name}
                />
                <input
                    type="text"
                    inputmode="decimal"
                    name="prize_prob"
                    placeholder="機率"
                    class={classes!(styles::INPUT, "w-28")}
                    value={row.probability.clone()}
                    oninput={on_probability}
                />
                <button type="button" class={classes!("add", styles::BUTTON_ICON)} onclick={on_add.clone()}>{"+"}</button>
                if can_remove {
                    <button type="button" class={classes!("remove", styles::BUTTON_ICON)} onclick={on_remove}>{"−"}</button>
                }
            </div>
        }
    });

    html! {
        <form method="post" action={BACKEND_PAGE_PATH} class="space-y-4" {onsubmit}>
            <input type="hidden" name={CSRF_FORM_FIELD} value={csrf_token()} />
            <input type="hidden" name="config_id" value={config_id} />
            <label class={styles::TEXT_LABEL}>
                {"抽獎名稱"}
                <input type="text" name="config_name" class={styles::INPUT} value={config_name} />
            </label>
            <div id="prize-rows" class="space-y-2">
                { for row_views }
            </div>
            <button type="submit" class={styles::BUTTON_PRIMARY}>{"儲存設定"}</button>
        </form>
    }
}
