//! Product table

use super::Spinner;
use hexadmin_core::Product;
use yew::prelude::*;

const HEADER_CLASS: &str =
    "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const CELL_CLASS: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-700";

pub(crate) const fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "Enabled" } else { "Disabled" }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ProductListProps {
    pub products: Vec<Product>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    /// Id of the selected product
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_select: Callback<String>,
    pub on_retry: Callback<()>,
}

#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    let body = if props.loading && props.products.is_empty() {
        html! {
            <tr>
                <td colspan="5"><Spinner text={Some("Loading products...".to_string())} /></td>
            </tr>
        }
    } else if let Some(error) = &props.error {
        let on_retry = props.on_retry.reform(|_: MouseEvent| ());
        html! {
            <tr>
                <td colspan="5" class="px-4 py-6 text-center text-sm text-red-700" role="alert">
                    <p class="mb-3">{format!("Could not load products: {error}")}</p>
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-red-300 hover:bg-red-50"
                        onclick={on_retry}
                    >
                        {"Retry"}
                    </button>
                </td>
            </tr>
        }
    } else if props.products.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="px-4 py-6 text-center text-sm text-gray-500">
                    {"No products yet"}
                </td>
            </tr>
        }
    } else {
        props
            .products
            .iter()
            .map(|product| {
                let is_selected = props.selected.as_deref() == Some(product.id.as_str());
                let on_select = {
                    let id = product.id.clone();
                    props.on_select.reform(move |_: MouseEvent| id.clone())
                };
                let status_class = if product.is_enabled {
                    "text-green-700"
                } else {
                    "text-gray-400"
                };

                html! {
                    <tr
                        key={product.id.clone()}
                        class={classes!(is_selected.then_some("bg-blue-50"))}
                    >
                        <td class={CELL_CLASS}>{&product.title}</td>
                        <td class={CELL_CLASS}>{product.origin_price.to_string()}</td>
                        <td class={CELL_CLASS}>{product.price.to_string()}</td>
                        <td class={classes!(CELL_CLASS, status_class)}>
                            {enabled_label(product.is_enabled)}
                        </td>
                        <td class={classes!(CELL_CLASS, "text-right")}>
                            <button
                                type="button"
                                class="text-blue-600 hover:text-blue-900"
                                onclick={on_select}
                            >
                                {"View details"}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <section class="bg-white rounded-lg shadow-sm overflow-x-auto">
            <h2 class="px-4 pt-4 text-xl font-semibold text-gray-900">{"Products"}</h2>
            <table class="w-full mt-2">
                <thead class="bg-gray-50">
                    <tr>
                        <th class={HEADER_CLASS}>{"Title"}</th>
                        <th class={HEADER_CLASS}>{"Original price"}</th>
                        <th class={HEADER_CLASS}>{"Price"}</th>
                        <th class={HEADER_CLASS}>{"Status"}</th>
                        <th class={HEADER_CLASS}></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    {body}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_flag_labels() {
        assert_eq!(enabled_label(true), "Enabled");
        assert_eq!(enabled_label(false), "Disabled");
    }
}
