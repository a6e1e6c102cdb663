use yew::prelude::*;

use super::icons::{icon_arrow_up_right, icon_credit_card, icon_wallet};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    UpRight,
    CreditCard,
    Wallet,
}

/// Positive or zero balances render green, negative ones red.
#[derive(Clone, Copy, PartialEq)]
pub enum StatTone {
    Neutral,
    Success,
    Danger,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
    #[prop_or(StatTone::Neutral)]
    pub tone: StatTone,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value_class = match props.tone {
        StatTone::Neutral => "text-2xl font-bold text-[#1D617A] tracking-tight",
        StatTone::Success => "text-2xl font-bold text-green-600 tracking-tight",
        StatTone::Danger => "text-2xl font-bold text-red-600 tracking-tight",
    };

    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class={value_class}>{ props.value.clone() }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::UpRight => icon_arrow_up_right(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}
