//! Landing hero with the headline stats.

pub(crate) fn render() -> String {
    r##"<section id="hero" class="hero">
<div class="container">
<span class="hero-badge">Proof of Concept &bull; 48 Months &bull; Full Transparency</span>
<h1 class="hero-title"><span class="gradient-text">ID BUZZ</span> PROJECT</h1>
<p class="hero-tagline">FULLY TRANSPARENT MOBILE ADVERTISING VAN</p>
<div class="hero-actions">
<a class="btn btn-primary" href="#reserve">Reserve a Panel</a>
<a class="btn btn-ghost" href="#gps">View Live Routes</a>
</div>
<div class="stat-grid">
<div class="stat"><div class="stat-value">15</div><div class="stat-label">Ad Panels</div></div>
<div class="stat"><div class="stat-value">1</div><div class="stat-label">ID Buzz Van</div></div>
<div class="stat"><div class="stat-value">48</div><div class="stat-label">Months</div></div>
<div class="stat"><div class="stat-value">100%</div><div class="stat-label">Transparent</div></div>
</div>
</div>
</section>
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_headline_and_actions() {
        let html = render();
        assert!(html.contains(r#"id="hero""#));
        assert!(html.contains("ID BUZZ"));
        assert!(html.contains("FULLY TRANSPARENT MOBILE ADVERTISING VAN"));
        assert!(html.contains(r##"href="#reserve""##));
        assert!(html.contains(r##"href="#gps""##));
    }
}
