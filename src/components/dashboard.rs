use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::category_list::CategoryList;
use super::chart_views::{CategoryChart, MonthlyChart};
use super::entry_forms::{AddTransactionForm, UploadPdfForm};
use super::stat_card::{StatCard, StatIcon, StatTone};
use super::transaction_list::{ListState, TransactionList};
use crate::api::{ApiClient, SessionState};
use crate::charts::{ChartKind, ChartSlot, ChartSlots};
use crate::models::Category;
use crate::notify;
use crate::presenter::{self, Presenter, SummaryView};

/// Handles for the three independent reloads that follow any change.
///
/// Each reload runs in its own task and tolerates its own failure; late
/// responses are applied in arrival order.
#[derive(Clone)]
struct Loaders {
    client: ApiClient,
    presenter: Presenter,
    transactions: UseStateHandle<ListState>,
    summary: UseStateHandle<SummaryView>,
    categories: UseStateHandle<Vec<Category>>,
    charts: Rc<RefCell<ChartSlots>>,
}

impl Loaders {
    fn load_transactions(&self) {
        let client = self.client.clone();
        let transactions = self.transactions.clone();
        spawn_local(async move {
            match client.fetch_summary().await {
                Ok(payload) => transactions.set(ListState::Loaded(payload.transactions)),
                Err(err) => {
                    log::error!("Error loading transactions: {}", err);
                    transactions.set(ListState::SignedOut);
                }
            }
        });
    }

    fn load_summary(&self) {
        let this = self.clone();
        spawn_local(async move {
            let payload = presenter::load_summary(&this.client).await;
            let view = this.presenter.present(&payload);
            this.charts
                .borrow_mut()
                .redraw(&view.categories, &view.monthly, &this.presenter);
            this.summary.set(view);
        });
    }

    fn load_categories(&self) {
        let client = self.client.clone();
        let categories = self.categories.clone();
        spawn_local(async move {
            match client.fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(err) => log::error!("Error loading categories: {}", err),
            }
        });
    }

    fn load_all(&self) {
        self.load_categories();
        self.load_transactions();
        self.load_summary();
    }

    fn show_signed_out(&self) {
        self.charts.borrow_mut().redraw(&Vec::new(), &Vec::new(), &self.presenter);
        self.transactions.set(ListState::SignedOut);
        self.summary.set(self.presenter.empty_view());
        self.categories.set(Vec::new());
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub client: ApiClient,
    pub session: SessionState,
    pub presenter: Presenter,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardProps) -> Html {
    let transactions = use_state(|| ListState::Loading);
    let summary = {
        let presenter = props.presenter.clone();
        use_state(move || presenter.empty_view())
    };
    let categories = use_state(Vec::<Category>::new);
    let charts = use_mut_ref(ChartSlots::default);

    let loaders = Loaders {
        client: props.client.clone(),
        presenter: props.presenter.clone(),
        transactions: transactions.clone(),
        summary: summary.clone(),
        categories: categories.clone(),
        charts: charts.clone(),
    };

    {
        let loaders = loaders.clone();
        use_effect_with_deps(
            move |(session, _, _)| {
                match session {
                    SessionState::Authenticated => loaders.load_all(),
                    SessionState::Unauthenticated => loaders.show_signed_out(),
                    SessionState::Checking => {}
                }
                || ()
            },
            (
                props.session,
                props.client.clone(),
                props.presenter.clone(),
            ),
        );
    }

    let on_transaction_saved = {
        let loaders = loaders.clone();
        Callback::from(move |_| {
            loaders.load_transactions();
            loaders.load_summary();
        })
    };

    let on_delete_transaction = {
        let loaders = loaders.clone();
        Callback::from(move |id: i64| {
            if !notify::confirm("Are you sure you want to delete this transaction?") {
                return;
            }
            let loaders = loaders.clone();
            spawn_local(async move {
                match loaders.client.delete_transaction(id).await {
                    Ok(()) => {
                        log::info!("Deleted transaction {}", id);
                        loaders.load_transactions();
                        loaders.load_summary();
                    }
                    Err(err) => notify::report_error("Error deleting transaction", &err),
                }
            });
        })
    };

    let on_category_created = {
        let loaders = loaders.clone();
        Callback::from(move |_| loaders.load_categories())
    };

    let on_delete_category = {
        let loaders = loaders.clone();
        Callback::from(move |id: i64| {
            if !notify::confirm(
                "Are you sure you want to delete this category? All transactions in this category will be moved to a default category.",
            ) {
                return;
            }
            let loaders = loaders.clone();
            spawn_local(async move {
                match loaders.client.delete_category(id).await {
                    Ok(()) => {
                        log::info!("Deleted category {}", id);
                        loaders.load_all();
                    }
                    Err(err) => notify::report_error("Error deleting category", &err),
                }
            });
        })
    };

    let (pie, line) = {
        let slots = charts.borrow();
        let pie = match slots.get(ChartSlot::Category).map(|c| &c.kind) {
            Some(ChartKind::Pie(chart)) => Some(chart.clone()),
            _ => None,
        };
        let line = match slots.get(ChartSlot::Monthly).map(|c| &c.kind) {
            Some(ChartKind::Line(chart)) => Some(chart.clone()),
            _ => None,
        };
        (pie, line)
    };

    let signed_in = props.session == SessionState::Authenticated;
    let balance_tone = if summary.balance_negative {
        StatTone::Danger
    } else {
        StatTone::Success
    };

    html! {
        <div class="p-6 space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard title="Total Income" value={summary.income.clone()} icon={StatIcon::UpRight} />
                <StatCard title="Total Expenses" value={summary.expenses.clone()} icon={StatIcon::CreditCard} />
                <StatCard title="Current Balance" value={summary.balance.clone()} icon={StatIcon::Wallet} tone={balance_tone} />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-foreground text-lg mb-4">{"Spending by Category"}</h3>
                    <CategoryChart chart={pie} />
                </div>
                <div class="bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-foreground text-lg mb-4">{"Monthly Balance"}</h3>
                    <MonthlyChart chart={line} />
                </div>
            </div>

            if signed_in {
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <AddTransactionForm
                        client={props.client.clone()}
                        categories={(*categories).clone()}
                        currency_symbol={props.presenter.currency_symbol().to_string()}
                        on_saved={on_transaction_saved.clone()}
                    />
                    <CategoryList
                        client={props.client.clone()}
                        categories={(*categories).clone()}
                        on_delete={on_delete_category}
                        on_created={on_category_created}
                    />
                    <UploadPdfForm client={props.client.clone()} on_uploaded={on_transaction_saved} />
                </div>
            }

            <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                <div class="p-6 flex justify-between items-center border-b border-border">
                    <h3 class="font-bold text-foreground text-lg">{"Recent Transactions"}</h3>
                </div>
                <TransactionList
                    state={(*transactions).clone()}
                    presenter={props.presenter.clone()}
                    on_delete={on_delete_transaction}
                />
            </div>
        </div>
    }
}
