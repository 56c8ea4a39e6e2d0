use storefront_cart::{Catalog, CurrencyLabel, Product};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopPageProps {
    pub catalog: Catalog,
    pub on_add_to_cart: Callback<Product>,
}

/// Product listing with one add-to-cart control per product.
#[function_component(ShopPage)]
pub fn shop_page(props: &ShopPageProps) -> Html {
    html! {
        <section class="shop" aria-label="Shop">
            <h1>{ "Shop" }</h1>
            <div class="product-grid">
                { for props.catalog.products.iter().map(|product| {
                    let on_add = {
                        let cb = props.on_add_to_cart.clone();
                        let product = product.clone();
                        Callback::from(move |_| cb.emit(product.clone()))
                    };
                    html! {
                        <div class="product-card" data-product-id={product.id.clone()}>
                            <img src={product.image.clone()} alt={product.name.clone()} />
                            <h3>{ product.name.clone() }</h3>
                            { if product.desc.is_empty() {
                                html! {}
                            } else {
                                html! { <p class="product-desc">{ product.desc.clone() }</p> }
                            }}
                            <p class="price">{ CurrencyLabel::Pula.format(product.price) }</p>
                            <button type="button" class="cta-button" onclick={on_add}>
                                { "Add to Cart" }
                            </button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
