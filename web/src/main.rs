use std::sync::Arc;

use leptos::prelude::*;

use econogopher_web::components::ProductList;
use econogopher_web::services::{DynSession, DynSource, DynVotes, EmptySource, NullSession, NullVotes};

#[component]
fn App() -> impl IntoView {
    // The real session, vote, and product services are not built yet;
    // wire the inert implementations so the page renders its shell.
    let session: DynSession = Arc::new(NullSession);
    let votes: DynVotes = Arc::new(NullVotes);
    let source: DynSource = Arc::new(EmptySource);

    view! { <ProductList session=session votes=votes source=source /> }
}

fn main() {
    leptos::mount::mount_to_body(App)
}
