use yew::prelude::*;
use shared::history::HistoryLine;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub lines: Vec<HistoryLine>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <ul id="history-list" class={styles::HISTORY_LIST}>
            { for props.lines.iter().map(|line| {
                let class = if line.is_placeholder() { Some(styles::TEXT_MUTED) } else { None };
                html! { <li {class}>{line.text()}</li> }
            }) }
        </ul>
    }
}
