use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::icons::{icon_plus, icon_upload};
use crate::api::ApiClient;
use crate::forms::{validate_pdf_name, TransactionForm};
use crate::models::Category;
use crate::notify;

#[derive(Properties, PartialEq)]
pub struct AddTransactionProps {
    pub client: ApiClient,
    pub categories: Vec<Category>,
    pub currency_symbol: String,
    pub on_saved: Callback<()>,
}

#[function_component(AddTransactionForm)]
pub fn add_transaction_form(props: &AddTransactionProps) -> Html {
    let amount = use_state(|| "".to_string());
    let category_id = use_state(|| "".to_string());
    let transaction_type = use_state(|| "expense".to_string());
    let description = use_state(|| "".to_string());
    let saving = use_state(|| false);

    let on_submit = {
        let amount = amount.clone();
        let category_id = category_id.clone();
        let transaction_type = transaction_type.clone();
        let description = description.clone();
        let saving = saving.clone();
        let client = props.client.clone();
        let categories = props.categories.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = TransactionForm {
                amount: (*amount).clone(),
                category_id: (*category_id).clone(),
                transaction_type: (*transaction_type).clone(),
                description: (*description).clone(),
            };
            let request = match form.validate(&categories) {
                Ok(request) => request,
                Err(err) => {
                    notify::alert(&err.to_string());
                    return;
                }
            };

            saving.set(true);
            let amount = amount.clone();
            let category_id = category_id.clone();
            let transaction_type = transaction_type.clone();
            let description = description.clone();
            let saving = saving.clone();
            let client = client.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match client.add_transaction(&request).await {
                    Ok(created) => {
                        log::info!("Added transaction {}", created.id);
                        amount.set("".to_string());
                        category_id.set("".to_string());
                        transaction_type.set("expense".to_string());
                        description.set("".to_string());
                        on_saved.emit(());
                    }
                    Err(err) => notify::report_error("Error adding transaction", &err),
                }
                saving.set(false);
            });
        })
    };

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };
    let on_category = {
        let category_id = category_id.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value());
        })
    };
    let on_type = {
        let transaction_type = transaction_type.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            transaction_type.set(select.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    html! {
        <form id="transactionForm" class="bg-card rounded-[10px] p-6 border border-border space-y-3" onsubmit={on_submit}>
            <h3 class="font-bold text-foreground text-lg">{"Add Transaction"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <input id="amount" type="number" step="0.01" min="0" placeholder={format!("Amount ({})", props.currency_symbol)}
                    value={(*amount).clone()} oninput={on_amount} class="p-2 border rounded" />
                <select id="category" class="p-2 border rounded" onchange={on_category}>
                    <option value="" selected={category_id.is_empty()}>{"Select a category"}</option>
                    { for props.categories.iter().map(|category| {
                        let value = category.id.to_string();
                        let selected = *category_id == value;
                        html! { <option value={value} selected={selected}>{ category.name.clone() }</option> }
                    }) }
                </select>
                <select id="transactionType" class="p-2 border rounded" onchange={on_type}>
                    <option value="expense" selected={*transaction_type == "expense"}>{"Expense"}</option>
                    <option value="income" selected={*transaction_type == "income"}>{"Income"}</option>
                </select>
                <input id="description" placeholder="Description (optional)" value={(*description).clone()}
                    oninput={on_description} class="p-2 border rounded" />
            </div>
            <button type="submit" class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90" disabled={*saving}>
                { icon_plus() }
                { if *saving { "Saving..." } else { "Add Transaction" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct UploadPdfProps {
    pub client: ApiClient,
    pub on_uploaded: Callback<()>,
}

#[function_component(UploadPdfForm)]
pub fn upload_pdf_form(props: &UploadPdfProps) -> Html {
    let file_input = use_node_ref();
    let uploading = use_state(|| false);

    let on_submit = {
        let file_input = file_input.clone();
        let uploading = uploading.clone();
        let client = props.client.clone();
        let on_uploaded = props.on_uploaded.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = file_input.cast::<HtmlInputElement>() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            if let Err(err) = validate_pdf_name(file.as_ref().map(|f| f.name()).as_deref()) {
                notify::alert(&err.to_string());
                return;
            }
            let Some(file) = file else {
                return;
            };

            uploading.set(true);
            let uploading = uploading.clone();
            let client = client.clone();
            let on_uploaded = on_uploaded.clone();
            spawn_local(async move {
                match client.upload_pdf(&file).await {
                    Ok(outcome) => {
                        log::info!(
                            "Processed {}: {} transactions added",
                            file.name(),
                            outcome.added_count()
                        );
                        input.set_value("");
                        on_uploaded.emit(());
                    }
                    Err(err) => notify::report_error("Error processing PDF", &err),
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <form id="pdfForm" class="bg-card rounded-[10px] p-6 border border-border space-y-3" onsubmit={on_submit}>
            <h3 class="font-bold text-foreground text-lg">{"Import Statement"}</h3>
            <input id="pdfFile" type="file" accept=".pdf,application/pdf" ref={file_input} class="block w-full text-sm" />
            <button type="submit" class="flex items-center gap-2 bg-accent text-white px-4 py-2 rounded-xl font-bold text-sm" disabled={*uploading}>
                { icon_upload() }
                { if *uploading { "Uploading..." } else { "Upload PDF" } }
            </button>
        </form>
    }
}
