//! Financial transparency cards, funding progress and operating costs.

use crate::api::FundingReport;
use crate::site::helpers::{html_escape, usd};

pub(crate) fn render(report: &FundingReport) -> String {
    let vehicle_label = if report.estimated {
        "Vehicle Cost - estimated"
    } else {
        "Vehicle Cost"
    };
    let revenue_note = if report.panels_funded == 0 {
        "No active panels".to_string()
    } else {
        format!("{} active panels", report.panels_funded)
    };
    let percent = format!("{:.0}%", report.funding_percent);

    let mut cost_rows = String::new();
    for (category, amount) in &report.operating_costs {
        cost_rows.push_str(&format!(
            r##"<div class="cost-row"><span>{}</span><span>{}/month</span></div>"##,
            html_escape(category),
            usd(*amount)
        ));
    }

    format!(
        r##"<section id="transparency" class="section section-light">
<div class="container">
<div class="section-head">
<h2>Financial Transparency</h2>
<p>Every dollar visible. Every metric open. Your advertising funds only the project &mdash; no profit, no markup.</p>
</div>
<div class="card-grid four">
<div class="card">
<div class="card-kicker">{vehicle_label}</div>
<div class="card-big">{vehicle_cost}</div>
<div class="card-sub">Total financed</div>
</div>
<div class="card">
<div class="card-kicker">Monthly Payment</div>
<div class="card-big">{monthly_payment}</div>
<div class="card-sub">Fixed monthly cost</div>
</div>
<div class="card">
<div class="card-kicker">Panels Funded</div>
<div class="card-big">{funded} / {total}</div>
<div class="card-sub">{percent} funded</div>
</div>
<div class="card">
<div class="card-kicker">Monthly Revenue</div>
<div class="card-big">{revenue}</div>
<div class="card-sub">{revenue_note}</div>
</div>
</div>
<div class="panel-card">
<h3>Funding Progress</h3>
<div class="progress-labels"><span>Vehicle Cost Coverage</span><span>{percent}</span></div>
<div class="progress-track"><div class="progress-fill" style="width: {percent}"></div></div>
<div class="card-grid three progress-stats">
<div class="mini-stat"><div class="mini-value">{funded}</div><div class="mini-label">Panels Active</div></div>
<div class="mini-stat"><div class="mini-value">{available}</div><div class="mini-label">Panels Available</div></div>
<div class="mini-stat"><div class="mini-value">{months}</div><div class="mini-label">Months to Full Funding</div></div>
</div>
</div>
<div class="panel-card">
<h3>Operating Costs</h3>
{cost_rows}
<div class="cost-row cost-total"><span>Total Operating Costs</span><span>{cost_total}/month</span></div>
</div>
</div>
</section>
"##,
        vehicle_cost = usd(report.vehicle_cost),
        monthly_payment = usd(report.monthly_payment),
        funded = report.panels_funded,
        total = report.total_panels,
        revenue = usd(report.total_revenue),
        available = report.panels_available,
        months = report.months_to_full_funding,
        cost_total = usd(report.total_operating_costs),
    )
}
