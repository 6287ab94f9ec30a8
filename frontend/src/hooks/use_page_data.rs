use std::rc::Rc;
use yew::prelude::*;
use shared::shared_roulette::PageData;
use crate::config::load_page_data;

/// Page bootstrap data, read from the DOM once per mount.
#[hook]
pub fn use_page_data() -> Rc<PageData> {
    use_memo((), |_| load_page_data())
}
