use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/fusion-web.css"/>
        <Title text="Flavour Fusion - AI-Driven Recipe Blogging"/>
        <Meta name="description" content="AI-powered recipe blogs with a nutrition summary"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home/>
                </Routes>
            </main>
        </Router>
    }
}
