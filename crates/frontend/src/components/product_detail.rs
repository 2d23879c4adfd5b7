//! Detail card for the selected product

use hexadmin_core::Product;
use yew::prelude::*;

/// Currency tail following the struck-through original price
pub(crate) fn price_suffix(price: f64) -> String {
    format!(" 元 / {price} 元")
}

#[derive(Properties, Clone, PartialEq)]
pub struct ProductDetailProps {
    #[prop_or_default]
    pub product: Option<Product>,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let Some(product) = &props.product else {
        return html! {
            <section class="bg-white rounded-lg shadow-sm p-6 text-center text-gray-500">
                {"Select a product to see its details"}
            </section>
        };
    };

    html! {
        <section class="bg-white rounded-lg shadow-sm overflow-hidden">
            if !product.image_url.is_empty() {
                <img
                    class="w-full h-64 object-cover"
                    src={product.image_url.clone()}
                    alt={product.title.clone()}
                />
            }
            <div class="p-6 space-y-3">
                <h2 class="text-xl font-semibold text-gray-900">
                    {&product.title}
                    <span class="ml-2 inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-800">
                        {&product.category}
                    </span>
                </h2>
                <p class="text-sm text-gray-700">
                    <span class="font-medium">{"Description: "}</span>
                    {&product.description}
                </p>
                <p class="text-sm text-gray-700">
                    <span class="font-medium">{"Content: "}</span>
                    {&product.content}
                </p>
                <p class="text-sm">
                    <del class="text-gray-400">{product.origin_price.to_string()}</del>
                    <span class="text-gray-900 font-medium">{price_suffix(product.price)}</span>
                </p>
                if !product.images_url.is_empty() {
                    <div>
                        <h3 class="text-sm font-medium text-gray-900 mb-2">{"More images"}</h3>
                        <div class="grid grid-cols-3 gap-2">
                            {product.images_url.iter().map(|url| html! {
                                <img
                                    key={url.clone()}
                                    class="w-full h-24 object-cover rounded"
                                    src={url.clone()}
                                    alt={product.title.clone()}
                                />
                            }).collect::<Html>()}
                        </div>
                    </div>
                }
            </div>
        </section>
    }
}
