//! Capabilities the views depend on but do not implement.
//!
//! The components take these as trait-object props so the presentation
//! layer stays free of I/O. The shipped implementations are inert: the
//! backend contracts (session termination, the feedback endpoint, the
//! products listing) are wired up elsewhere, not here.

use std::sync::Arc;

use crate::models::Product;

/// Terminates the authenticated session. Invoked once per click of the
/// "Log out" affordance, with no arguments.
pub trait SessionService {
    fn logout(&self);
}

/// Submits a vote for a product. The product carries its slug, which is
/// what the feedback endpoint keys on.
pub trait VoteService {
    fn upvote(&self, product: &Product);
    fn downvote(&self, product: &Product);
}

/// Supplies the product listing shown on the landing page.
pub trait ProductSource {
    fn products(&self) -> Vec<Product>;
}

pub type DynSession = Arc<dyn SessionService + Send + Sync>;
pub type DynVotes = Arc<dyn VoteService + Send + Sync>;
pub type DynSource = Arc<dyn ProductSource + Send + Sync>;

/// Session capability that does nothing.
pub struct NullSession;

impl SessionService for NullSession {
    fn logout(&self) {}
}

/// Vote capability that drops votes on the floor.
pub struct NullVotes;

impl VoteService for NullVotes {
    fn upvote(&self, _product: &Product) {}
    fn downvote(&self, _product: &Product) {}
}

/// Product source that yields no products.
pub struct EmptySource;

impl ProductSource for EmptySource {
    fn products(&self) -> Vec<Product> {
        Vec::new()
    }
}
