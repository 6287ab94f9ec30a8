use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::shared_roulette::ConfigSummary;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConfigSelectProps {
    pub id: AttrValue,
    pub configs: Vec<ConfigSummary>,
    #[prop_or_default]
    pub selected: Option<String>,
    pub onchange: Callback<String>,
}

#[function_component(ConfigSelect)]
pub fn config_select(props: &ConfigSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <select id={props.id.clone()} class={styles::SELECT} {onchange}>
            if props.configs.is_empty() {
                <option value="" selected=true>{"尚無抽獎內容"}</option>
            }
            { for props.configs.iter().map(|config| {
                let selected = props.selected.as_deref() == Some(config.id.as_str());
                html! {
                    <option value={config.id.clone()} {selected}>{&config.name}</option>
                }
            }) }
        </select>
    }
}
