//! Pricing tier cards built from the live catalog.

use crate::api::{CatalogData, TierInfo};
use crate::site::helpers::{html_escape, usd};

pub(crate) fn render(catalog: &CatalogData) -> String {
    let mut cards = String::new();
    for tier in &catalog.tiers {
        cards.push_str(&tier_card(tier));
    }

    format!(
        r##"<section id="panels" class="section section-light">
<div class="container">
<div class="section-head">
<h2>Panel Tiers</h2>
<p>Choose the perfect size for your advertising needs</p>
</div>
<div class="card-grid three">{cards}</div>
<p class="pricing-disclaimer">Pricing shown is an estimated projection based on an assumed vehicle value of $70,000 financed over 24 months. Final panel pricing will be recalculated and locked in, once the vehicle purchase is completed and actual costs are confirmed.</p>
</div>
</section>
"##
    )
}

fn tier_card(tier: &TierInfo) -> String {
    let badge = if tier.highlight {
        r##"<span class="tier-badge">Most Visible</span>"##
    } else {
        ""
    };
    let action = if tier.available == 0 {
        r##"<span class="btn btn-disabled">Sold Out</span>"##.to_string()
    } else {
        r##"<a class="btn btn-primary" href="/reserve">Select Panel</a>"##.to_string()
    };
    let mut positions = String::new();
    for position in &tier.positions {
        positions.push_str(&format!("<li>{}</li>", html_escape(position)));
    }

    format!(
        r##"<div class="tier-card{highlight}">{badge}
<h3>{name}</h3>
<div class="tier-size">{dims}</div>
<div class="tier-price">{price}<span class="tier-per"> per month</span></div>
<div class="tier-note">Formula-based pricing</div>
<div class="tier-availability">{available} of {count} Available</div>
<ul class="tier-positions">{positions}</ul>
{action}
</div>"##,
        highlight = if tier.highlight { " highlight" } else { "" },
        name = html_escape(&tier.name),
        dims = html_escape(&tier.dimensions_label),
        price = usd(tier.monthly_cost),
        available = tier.available,
        count = tier.count,
    )
}
