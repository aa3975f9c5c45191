//! Project overview cards and the mission banner.

use crate::api::CatalogData;
use crate::models::PanelSize;

pub(crate) fn render(catalog: &CatalogData) -> String {
    let count_for = |size: PanelSize| {
        catalog
            .tiers
            .iter()
            .find(|t| t.size == size)
            .map(|t| t.count)
            .unwrap_or(0)
    };
    let small = count_for(PanelSize::Small);
    let medium = count_for(PanelSize::Medium);
    let large = count_for(PanelSize::Large);
    let total = small + medium + large;

    format!(
        r##"<section id="about" class="section section-light">
<div class="container">
<div class="section-head">
<h2>About the Project</h2>
<p>A fully transparent, zero-profit approach to local mobile advertising</p>
</div>
<div class="card-grid four">
<div class="card">
<h3>One VW ID Buzz</h3>
<p>A single electric Volkswagen ID Buzz van equipped with {total} premium advertising panels</p>
</div>
<div class="card">
<h3>{total} Ad Panels</h3>
<p>{small} small, {medium} medium, and {large} large panels positioned for maximum visibility city-wide</p>
</div>
<div class="card">
<h3>Zero Profit Model</h3>
<p>All revenue strictly covers vehicle costs over 48 months with no markup or margin</p>
</div>
<div class="card">
<h3>Full Transparency</h3>
<p>All finances, routes, and impression data are publicly visible in real time</p>
</div>
</div>
<div class="mission-banner">
<h3>Why This Project Exists</h3>
<p>This is a 48-month proof of concept designed to prove that mobile advertising can be both powerful and completely transparent. This project is not built for profit. Every dollar collected is used solely to cover the cost of the vehicle. By exposing all operational and financial data publicly, the goal is to create maximum trust with local businesses and give them absolute clarity on their investment.</p>
<p class="mission-aside">... Oh and have some fun too.</p>
</div>
</div>
</section>
"##
    )
}
