use yew::prelude::*;

use crate::components::charts::{
    CategoryBarChart, Last7DaysAreaChart, StatusDistributionDonut, ThreeMonthsDonut,
};

/// Full statistics page: per-status activity over the last week, the current
/// and 3-month status distributions, and (outside sector-admin views) the
/// category breakdown.
#[function_component(StatisticsPage)]
pub fn statistics_page() -> Html {
    html! {
        <main class="statistics-page">
            <h2>{"Statistics"}</h2>
            <div class="charts-grid">
                <section class="chart-section">
                    <h3>{"Last 7 Days"}</h3>
                    <Last7DaysAreaChart />
                </section>
                <section class="chart-section">
                    <h3>{"Status Distribution"}</h3>
                    <StatusDistributionDonut />
                </section>
                <section class="chart-section">
                    <h3>{"Last 3 Months"}</h3>
                    <ThreeMonthsDonut />
                </section>
                <section class="chart-section">
                    <h3>{"By Category"}</h3>
                    <CategoryBarChart />
                </section>
            </div>
        </main>
    }
}
