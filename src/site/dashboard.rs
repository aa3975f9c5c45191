//! Advertiser dashboard feature preview.

const FEATURES: [(&str, &str, bool); 6] = [
    (
        "Panel Preview",
        "See your artwork displayed on the van in real-time with our 3D visualization",
        false,
    ),
    (
        "Route History",
        "View detailed maps of where your ad has been displayed each day",
        false,
    ),
    (
        "Impression Analytics",
        "Track daily, weekly, and monthly impressions with detailed breakdowns",
        false,
    ),
    (
        "Cost Contribution",
        "See exactly how your monthly payment contributes to vehicle costs",
        false,
    ),
    (
        "AI Validation",
        "Future: Real vehicle counts to validate GPS impression estimates",
        true,
    ),
    (
        "Performance Reports",
        "Download monthly reports with detailed analytics and insights",
        false,
    ),
];

const BANNER_STATS: [(&str, &str); 4] = [
    ("24/7", "Dashboard Access"),
    ("100%", "Data Transparency"),
    ("Real-Time", "GPS Tracking"),
    ("Daily", "Report Updates"),
];

pub(crate) fn render() -> String {
    let mut cards = String::new();
    for (title, blurb, phase2) in FEATURES {
        let chip = if phase2 {
            r##"<span class="phase-chip">Phase 2 - Coming Soon</span>"##
        } else {
            ""
        };
        cards.push_str(&format!(
            r##"<div class="card card-glass"><h3>{title}</h3><p>{blurb}</p>{chip}</div>"##
        ));
    }

    let mut stats = String::new();
    for (value, label) in BANNER_STATS {
        stats.push_str(&format!(
            r##"<div class="stat"><div class="stat-value">{value}</div><div class="stat-label">{label}</div></div>"##
        ));
    }

    format!(
        r##"<section id="dashboard" class="section section-night">
<div class="container">
<div class="section-head">
<h2>Advertiser Dashboard</h2>
<p>Track your ad performance with complete transparency and real-time data</p>
</div>
<div class="card-grid three">{cards}</div>
<div class="dash-banner">
<h3>Real-Time Access to Everything</h3>
<p>Your advertiser dashboard provides 24/7 access to all performance metrics, route data, and financial transparency information. No hidden data &mdash; see everything we see, whenever you want.</p>
<div class="stat-grid">{stats}</div>
</div>
</div>
</section>
"##
    )
}
