//! Server-side render checks for every page component: each one is
//! prop-driven, so the views render on the host without a browser.

use futures::executor::block_on;
use storefront_cart::{Cart, Catalog, Product};
use storefront_web::pages::{
    cart::{CartPage, CartPageProps},
    checkout::{CheckoutPage, CheckoutPageProps},
    confirmation::ConfirmationPage,
    not_found::NotFound,
    shop::{ShopPage, ShopPageProps},
};
use yew::{Callback, LocalServerRenderer};

fn sample_catalog() -> Catalog {
    Catalog {
        products: vec![
            Product {
                id: String::from("woven-basket"),
                name: String::from("Woven Basket"),
                price: 250.0,
                image: String::from("static/img/products/woven-basket.jpg"),
                desc: String::from("Hand-woven palm basket."),
            },
            Product {
                id: String::from("clay-mug"),
                name: String::from("Clay Mug"),
                price: 45.0,
                image: String::from("static/img/products/clay-mug.jpg"),
                desc: String::new(),
            },
        ],
    }
}

fn sample_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add_item(
        "woven-basket",
        "Woven Basket",
        250.0,
        "static/img/products/woven-basket.jpg",
    );
    cart.update_quantity("woven-basket", 1);
    cart.add_item("clay-mug", "Clay Mug", 45.0, "static/img/products/clay-mug.jpg");
    cart
}

#[test]
fn shop_page_lists_products_with_add_controls() {
    let props = ShopPageProps {
        catalog: sample_catalog(),
        on_add_to_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ShopPage>::with_props(props).render());
    assert!(html.contains("Woven Basket"));
    assert!(html.contains("P250.00"));
    assert!(html.contains("Add to Cart"));
}

#[test]
fn empty_cart_shows_the_continue_shopping_block() {
    let props = CartPageProps {
        cart: Cart::new(),
        on_update_quantity: Callback::noop(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CartPage>::with_props(props).render());
    assert!(html.contains("Your cart is empty"));
    assert!(html.contains("Continue Shopping"));
    assert!(!html.contains("cart-item "));
}

#[test]
fn cart_page_renders_rows_and_pula_summary() {
    let props = CartPageProps {
        cart: sample_cart(),
        on_update_quantity: Callback::noop(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CartPage>::with_props(props).render());
    // 2 × 250 + 1 × 45 = 545, plus the flat 500 shipping fee.
    assert!(html.contains("data-product-id=\"woven-basket\""));
    assert!(html.contains("data-product-id=\"clay-mug\""));
    assert!(html.contains("P250.00"));
    assert!(html.contains("P545.00"));
    assert!(html.contains("P1045.00"));
    assert!(html.contains("Remove"));
    assert!(html.contains("Proceed to Checkout"));
}

#[test]
fn checkout_page_uses_the_iso_currency_label() {
    let props = CheckoutPageProps {
        cart: sample_cart(),
        placing: false,
        on_place_order: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutPage>::with_props(props).render());
    assert!(html.contains("Woven Basket × 2"));
    assert!(html.contains("BWP 500.00"));
    assert!(html.contains("BWP 545.00"));
    assert!(html.contains("BWP 1045.00"));
    assert!(html.contains("Place Order"));
    // The cart page label must not leak onto checkout.
    assert!(!html.contains("P545.00"));
}

#[test]
fn checkout_trigger_shows_busy_state_while_placing() {
    let props = CheckoutPageProps {
        cart: sample_cart(),
        placing: true,
        on_place_order: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutPage>::with_props(props).render());
    assert!(html.contains("Processing..."));
    assert!(html.contains("disabled"));
    // The order summary stays visible through the processing pause.
    assert!(html.contains("Woven Basket × 2"));
    assert!(html.contains("BWP 1045.00"));
}

#[test]
fn checkout_page_renders_nothing_for_an_empty_cart() {
    let props = CheckoutPageProps {
        cart: Cart::new(),
        placing: false,
        on_place_order: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutPage>::with_props(props).render());
    assert!(!html.contains("Place Order"));
}

#[test]
fn confirmation_and_not_found_render_standalone() {
    let html = block_on(LocalServerRenderer::<ConfirmationPage>::new().render());
    assert!(html.contains("Order Confirmed"));

    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Page not found"));
}
