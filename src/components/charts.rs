use yew::prelude::*;

use super::layout::panel;
use crate::chart::{bar_layout, chart_view, pie_slices, ChartDatum, ChartView};
use crate::format::{format_currency, format_percent};
use crate::models::{DashboardSummary, Expense};

const PIE_RADIUS: f64 = 100.0;
const BAR_WIDTH: f64 = 400.0;
const BAR_HEIGHT: f64 = 220.0;

#[derive(Properties, PartialEq)]
pub struct ChartsProps {
    pub summary: Option<DashboardSummary>,
}

#[function_component(Charts)]
pub fn charts(props: &ChartsProps) -> Html {
    let (pie, bars) = match chart_view(props.summary.as_ref()) {
        ChartView::Empty => (empty_state(), empty_state()),
        ChartView::Data(data) => (pie_chart(&data), bar_chart(&data)),
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            { panel("Spending by Category", pie) }
            { panel("Category Breakdown", bars) }
        </div>
    }
}

fn empty_state() -> Html {
    html! { <p class="text-gray-500 text-center py-8">{"No expenses to display"}</p> }
}

fn legend(data: &[ChartDatum]) -> Html {
    html! {
        <ul class="mt-4 space-y-1">
            { for data.iter().map(|d| html! {
                <li class="flex items-center justify-between text-sm">
                    <span class="flex items-center gap-2 text-gray-700">
                        <span class="inline-block w-3 h-3 rounded-full" style={format!("background-color: {}", d.color)}></span>
                        { d.name.clone() }
                    </span>
                    <span class="font-semibold text-gray-900">{ format_currency(d.value) }</span>
                </li>
            }) }
        </ul>
    }
}

fn pie_chart(data: &[ChartDatum]) -> Html {
    let view_box = format!("{r} {r} {d} {d}", r = -PIE_RADIUS, d = PIE_RADIUS * 2.0);
    html! {
        <>
            <svg viewBox={view_box} class="w-64 h-64 mx-auto">
                { for pie_slices(data, PIE_RADIUS).into_iter().map(|slice| html! {
                    <path d={slice.path} fill={slice.color} stroke="#ffffff" stroke-width="1">
                        <title>{ format!("{} {}", slice.name, format_percent(slice.percent)) }</title>
                    </path>
                }) }
            </svg>
            { legend(data) }
        </>
    }
}

fn bar_chart(data: &[ChartDatum]) -> Html {
    let view_box = format!("0 0 {} {}", BAR_WIDTH, BAR_HEIGHT + 24.0);
    html! {
        <svg viewBox={view_box} class="w-full h-72">
            { for bar_layout(data, BAR_WIDTH, BAR_HEIGHT).into_iter().map(|bar| {
                let label_x = format!("{:.2}", bar.x + bar.width / 2.0);
                html! {
                    <g>
                        <rect x={format!("{:.2}", bar.x)} y={format!("{:.2}", bar.y)} width={format!("{:.2}", bar.width)} height={format!("{:.2}", bar.height)} fill={bar.color}>
                            <title>{ format!("{}: {}", bar.name, format_currency(bar.value)) }</title>
                        </rect>
                        <text x={label_x} y={format!("{:.2}", BAR_HEIGHT + 16.0)} text-anchor="middle" font-size="12" fill="#4B5563">{ bar.name.clone() }</text>
                    </g>
                }
            }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentExpensesProps {
    pub expenses: Vec<Expense>,
}

#[function_component(RecentExpenses)]
pub fn recent_expenses(props: &RecentExpensesProps) -> Html {
    let body = if props.expenses.is_empty() {
        html! { <p class="text-gray-500">{"No recent expenses"}</p> }
    } else {
        html! {
            <div class="space-y-3">
                { for props.expenses.iter().map(|expense| html! {
                    <div key={expense.id.to_string()} class="flex justify-between items-center p-3 bg-gray-50 rounded-md">
                        <div>
                            <p class="font-medium text-gray-900">{ expense.description.clone() }</p>
                            <p class="text-sm text-gray-500">{ expense.category.clone() }</p>
                        </div>
                        <p class="font-bold text-gray-900">{ format_currency(expense.amount) }</p>
                    </div>
                }) }
            </div>
        }
    };

    panel("Recent Expenses", body)
}
