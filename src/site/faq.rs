//! Frequently asked questions, rendered as native disclosure widgets.

const FAQS: [(&str, &str); 7] = [
    (
        "How long is the commitment?",
        "The agreement term is a full 24 months. Advertisers may choose from three flexible payment options: 100% upfront payment for the full term, estimated at $6,500, or 50% upfront payment, estimated at $3,250, with the balance spread over the term, or month-to-month billing, estimated at $250 per month. Final pricing may vary slightly based on panel size and placement, but all options cover the complete 24-month advertising term.",
    ),
    (
        "How are traffic impressions estimated?",
        "We use GPS tracking combined with Google Maps Traffic Density API to estimate the number of vehicles (impressions) that see your ad each day. In Phase 2, we'll add an AI camera system to validate these estimates with real vehicle counts. All data is publicly accessible.",
    ),
    (
        "Can I buy multiple panels?",
        "Yes! Local businesses can reserve multiple panels to increase visibility. Mix and match sizes based on your budget and messaging needs. Contact us to discuss multi-panel packages.",
    ),
    (
        "When does the van operate?",
        "The van operates daily during peak traffic hours (typically 7am-7pm on weekdays, with modified weekend schedules). Routes are planned to maximize exposure through high-traffic commercial and residential areas.",
    ),
    (
        "How is financial transparency handled?",
        "Every financial metric is publicly visible on this website: vehicle cost, monthly payments, panel revenue, operating costs, and funding progress. We don't take any profit. 100% of revenue covers vehicle and operating costs only.",
    ),
    (
        "What happens if all panels aren't funded?",
        "The project continues with partial funding. We've designed the pricing to ensure sustainability even without full panel sales, though reaching 100% funding means the vehicle cost is completely covered by advertisers.",
    ),
    (
        "What about the AI camera in Phase 2?",
        "The AI camera will count vehicles only. No video recording, no personal data collection. It validates our GPS impression estimates by providing real traffic counts. Privacy and transparency are our top priorities.",
    ),
];

pub(crate) fn render() -> String {
    let mut entries = String::new();
    for (i, (question, answer)) in FAQS.iter().enumerate() {
        let open = if i == 0 { " open" } else { "" };
        entries.push_str(&format!(
            r##"<details class="faq-entry"{open}><summary>{question}</summary><p>{answer}</p></details>"##
        ));
    }

    format!(
        r##"<section id="faq" class="section">
<div class="container narrow">
<div class="section-head">
<h2>Frequently Asked Questions</h2>
<p>Everything you need to know about the Id Buzz Project</p>
</div>
{entries}
<div class="cta-card">
<h3>Still Have Questions?</h3>
<p>We're here to help! Reach out and we'll get back to you promptly.</p>
<a class="btn btn-light" href="#reserve">Contact Us</a>
</div>
</div>
</section>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_entries_first_open() {
        let html = render();
        assert_eq!(html.matches("faq-entry").count(), 7);
        assert_eq!(html.matches("<details class=\"faq-entry\" open>").count(), 1);
        assert!(html.starts_with("<section id=\"faq\""));
    }

    #[test]
    fn test_questions_present() {
        let html = render();
        for (question, _) in FAQS {
            assert!(html.contains(question));
        }
    }
}
