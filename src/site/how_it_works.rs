//! The four-step onboarding walkthrough.

const STEPS: [(&str, &str); 4] = [
    (
        "Select Your Panel",
        "Choose from small, medium, or large panels on our interactive 3D van model",
    ),
    (
        "Upload Your Design",
        "Submit your artwork and see it previewed on the van in real-time",
    ),
    (
        "Daily Exposure",
        "Your business drives through high-traffic areas every day",
    ),
    (
        "Track Impressions",
        "Monitor your ad performance with public GPS tracking and impression data",
    ),
];

pub(crate) fn render() -> String {
    let mut cards = String::new();
    for (i, (title, blurb)) in STEPS.iter().enumerate() {
        cards.push_str(&format!(
            r##"<div class="step-card"><div class="step-number">{}</div><h3>{}</h3><p>{}</p></div>"##,
            i + 1,
            title,
            blurb
        ));
    }

    format!(
        r##"<section id="how-it-works" class="section">
<div class="container">
<div class="section-head">
<h2>How It Works</h2>
<p>Get your business live on the road in four simple steps</p>
</div>
<div class="card-grid four">{cards}</div>
</div>
</section>
"##
    )
}
