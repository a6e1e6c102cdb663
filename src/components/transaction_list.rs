use yew::prelude::*;

use super::icons::icon_trash;
use crate::format::format_date;
use crate::models::{Transaction, TransactionType};
use crate::presenter::Presenter;

#[derive(Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Transaction>),
    SignedOut,
}

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub state: ListState,
    pub presenter: Presenter,
    pub on_delete: Callback<i64>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let placeholder = |text: &'static str| html! { <div class="px-6 py-6 text-center text-muted-foreground">{ text }</div> };

    let transactions = match &props.state {
        ListState::Loading => return placeholder("Loading..."),
        ListState::SignedOut => return placeholder("Please log in to view transactions"),
        ListState::Loaded(list) if list.is_empty() => return placeholder("No transactions found"),
        ListState::Loaded(list) => list,
    };

    html! {
        <div id="transactionsList" class="divide-y divide-border">
            { for transactions.iter().map(|tx| {
                let tone = match tx.transaction_type {
                    TransactionType::Income => "text-green-600",
                    TransactionType::Expense => "text-red-600",
                };
                let amount_class = format!("transaction-amount {} font-semibold {}", tx.transaction_type.as_str(), tone);
                let description = tx
                    .description
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or("No description")
                    .to_string();
                let on_delete = props.on_delete.clone();
                let id = tx.id;

                html! {
                    <div key={tx.id} class="transaction-item flex items-center justify-between px-6 py-4 text-sm hover:bg-muted/30 transition-colors">
                        <div class="transaction-info">
                            <div class="transaction-category font-semibold text-foreground">{ tx.category.clone() }</div>
                            <div class="transaction-description text-muted-foreground">{ description }</div>
                            <div class="transaction-date text-xs text-muted-foreground">{ format_date(&tx.date) }</div>
                        </div>
                        <div class="flex items-center gap-4">
                            <div class={amount_class}>{ props.presenter.format_currency(tx.amount.abs()) }</div>
                            <button type="button" class="p-2 rounded-lg bg-red-500 text-white hover:opacity-90" aria-label="Delete transaction"
                                onclick={Callback::from(move |_| on_delete.emit(id))}>
                                { icon_trash() }
                            </button>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
