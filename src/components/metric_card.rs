use leptos::prelude::*;

/// Accent colour for a metric card's glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricAccent {
    Blue,
    Green,
    Red,
    Purple,
}

impl MetricAccent {
    fn class(self) -> &'static str {
        match self {
            MetricAccent::Blue => "metric-icon accent-blue",
            MetricAccent::Green => "metric-icon accent-green",
            MetricAccent::Red => "metric-icon accent-red",
            MetricAccent::Purple => "metric-icon accent-purple",
        }
    }
}

/// Single summary card on the dashboard grid.
#[component]
pub fn MetricCard(
    /// Card heading, e.g. "Total Expense"
    title: &'static str,
    /// Pre-formatted display value
    #[prop(into)] value: String,
    /// Glyph shown opposite the heading
    icon: &'static str,
    accent: MetricAccent,
) -> impl IntoView {
    let icon_class = accent.class();

    view! {
        <div class="card metric-card">
            <div class="metric-card-header">
                <span class="metric-title">{title}</span>
                <span class=icon_class>{icon}</span>
            </div>
            <div class="metric-value">{value}</div>
        </div>
    }
}
