use yew_router::prelude::*;

/// The storefront's views.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Shop,
    #[at("/cart")]
    Cart,
    #[at("/checkout")]
    Checkout,
    #[at("/order-confirmation")]
    Confirmation,
    #[at("/404")]
    #[not_found]
    NotFound,
}
