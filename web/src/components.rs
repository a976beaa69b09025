//! The product voting views.
//!
//! `ProductList` owns the product sequence and composes one
//! `ProductCard` per product; cards render their product and the vote
//! affordances. Class names target the Bootstrap 3 stylesheet loaded by
//! `index.html`.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::{Product, VoteState};
use crate::services::{DynSession, DynSource, DynVotes};

/// Landing-page container: welcome banner, logout affordance, and one
/// card per product in sequence order.
#[component]
pub fn ProductList(session: DynSession, votes: DynVotes, source: DynSource) -> impl IntoView {
    let products = RwSignal::new(source.products());

    view! {
        <div class="col-lg-12">
            <span class="pull-right">
                <a on:click=move |_| session.logout()>"Log out"</a>
            </span>
            <h2>"Welcome to EconoGopher"</h2>
            <p>"No better place for you to sit back relax and arm chair economic."</p>
            <div class="row">
                {move || {
                    products
                        .get()
                        .into_iter()
                        .map(|product| {
                            view! { <ProductCard product=product votes=Arc::clone(&votes) /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// One product panel with upvote/downvote affordances.
///
/// The vote indicator in the heading renders the card's `VoteState`,
/// which nothing writes yet; the handlers hand the product to the
/// injected `VoteService` and touch no local state.
#[component]
pub fn ProductCard(product: Product, votes: DynVotes) -> impl IntoView {
    let voted = RwSignal::new(VoteState::default());

    let upvote = {
        let votes = Arc::clone(&votes);
        let product = product.clone();
        move |_| votes.upvote(&product)
    };
    let downvote = {
        let votes = Arc::clone(&votes);
        let product = product.clone();
        move |_| votes.downvote(&product)
    };

    view! {
        <div class="col-xs-4">
            <div class="panel panel-default">
                <div class="panel-heading">
                    {product.name.clone()}
                    <span class="pull-right">{move || voted.get().indicator()}</span>
                </div>
                <div class="panel-body">{product.description.clone()}</div>
                <div class="panel-footer">
                    <a on:click=upvote class="btn btn-default">
                        <span class="glyphicon glyphicon-thumbs-up"></span>
                    </a>
                    <a on:click=downvote class="btn btn-default pull-right">
                        <span class="glyphicon glyphicon-thumbs-down"></span>
                    </a>
                </div>
            </div>
        </div>
    }
}
