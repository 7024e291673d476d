use yew::prelude::*;

use super::icons::{icon_calendar, icon_dollar, icon_trending_up};
use crate::format::format_currency;
use crate::models::DashboardSummary;

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    Dollar,
    Trending,
    Calendar,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-lg shadow">
            <div class="flex items-center">
                {
                    match props.icon {
                        StatIcon::Dollar => icon_dollar(),
                        StatIcon::Trending => icon_trending_up(),
                        StatIcon::Calendar => icon_calendar(),
                    }
                }
                <div class="ml-4">
                    <p class="text-sm font-medium text-gray-600">{ props.title }</p>
                    <p class="text-2xl font-bold text-gray-900">{ props.value.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsCardsProps {
    pub summary: Option<DashboardSummary>,
    pub budget_count: usize,
}

#[function_component(StatsCards)]
pub fn stats_cards(props: &StatsCardsProps) -> Html {
    let (total_spent, transactions) = props
        .summary
        .as_ref()
        .map(|s| (s.total_spent, s.transaction_count))
        .unwrap_or_default();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard title="Total Spent This Month" value={format_currency(total_spent)} icon={StatIcon::Dollar} />
            <StatCard title="Transactions" value={transactions.to_string()} icon={StatIcon::Trending} />
            <StatCard title="Active Budgets" value={props.budget_count.to_string()} icon={StatIcon::Calendar} />
        </div>
    }
}
