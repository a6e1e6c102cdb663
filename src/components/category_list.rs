use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::icons::{icon_plus, icon_trash};
use crate::api::ApiClient;
use crate::forms::validate_category_name;
use crate::models::Category;
use crate::notify;

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub client: ApiClient,
    pub categories: Vec<Category>,
    pub on_delete: Callback<i64>,
    pub on_created: Callback<Category>,
}

#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    let new_name = use_state(|| "".to_string());
    let saving = use_state(|| false);

    let on_submit = {
        let new_name = new_name.clone();
        let saving = saving.clone();
        let client = props.client.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = match validate_category_name(&new_name) {
                Ok(name) => name,
                Err(err) => {
                    notify::alert(&err.to_string());
                    return;
                }
            };

            saving.set(true);
            let new_name = new_name.clone();
            let saving = saving.clone();
            let client = client.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match client.create_category(&name).await {
                    Ok(category) => {
                        log::info!("Created category {} ({})", category.name, category.id);
                        new_name.set("".to_string());
                        on_created.emit(category);
                    }
                    Err(err) => notify::report_error("Error adding category", &err),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h3 class="font-bold text-foreground text-lg mb-4">{"Categories"}</h3>
            <form id="addCategoryForm" class="flex gap-2 mb-4" onsubmit={on_submit}>
                <input
                    id="newCategoryName"
                    placeholder="New category"
                    class="flex-1 p-2 border rounded"
                    value={(*new_name).clone()}
                    oninput={{
                        let new_name = new_name.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            new_name.set(input.value());
                        })
                    }}
                />
                <button type="submit" class="flex items-center gap-1 bg-primary text-primary-foreground px-3 rounded" disabled={*saving}>
                    { icon_plus() }
                    {"Add"}
                </button>
            </form>
            <div id="categoriesList" class="divide-y divide-border">
                { for props.categories.iter().map(|category| {
                    let on_delete = props.on_delete.clone();
                    let id = category.id;
                    html! {
                        <div key={category.id} class="flex items-center justify-between py-2">
                            <div class="flex items-center gap-2">
                                <span class="category-name text-foreground">{ category.name.clone() }</span>
                                if category.is_default {
                                    <span class="badge badge-default text-[10px] uppercase tracking-widest text-muted-foreground">{"Default"}</span>
                                }
                            </div>
                            <button type="button" class="p-1 rounded bg-red-500 text-white disabled:opacity-40" aria-label="Delete category"
                                disabled={category.is_default}
                                onclick={Callback::from(move |_| on_delete.emit(id))}>
                                { icon_trash() }
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
