pub mod browser;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{backend::BackendPage, draw::DrawPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Draw,
   #[at("/backend")] Backend,
   #[at("/backend/")] BackendIndex,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Draw => html! { <DrawPage /> },
       Route::Backend | Route::BackendIndex => html! { <BackendPage /> },
       Route::NotFound => html! { <p class={styles::TEXT_BODY}>{"找不到頁面"}</p> },
   }
}
