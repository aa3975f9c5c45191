//! Page assembly.
//!
//! The whole site is two server-rendered pages sharing one shell: the
//! single marketing page and the reservation form page. Styling ships
//! inline so the binary serves everything itself.

use crate::api::{CatalogData, FundingReport, TrackingData};
use crate::site::{
    about, dashboard, faq, footer, gps, hero, how_it_works, reserve, tiers, transparency, upload,
    van_tool,
};

/// Render the single page, sections in their fixed order.
pub fn render_index(
    catalog: &CatalogData,
    tracking: &TrackingData,
    report: &FundingReport,
) -> String {
    let mut body = String::new();
    body.push_str(&hero::render());
    body.push_str(&about::render(catalog));
    body.push_str(&how_it_works::render());
    body.push_str(&tiers::render(catalog));
    body.push_str(&van_tool::render());
    body.push_str(&upload::render());
    body.push_str(&gps::render(tracking));
    body.push_str(&transparency::render(report));
    body.push_str(&dashboard::render());
    body.push_str(&faq::render());
    body.push_str(&reserve::render_cta());
    body.push_str(&footer::render());
    shell("Id Buzz Project | Fully Transparent Mobile Advertising", &body)
}

/// Render the reservation form page; `submitted` swaps in the success
/// state.
pub fn render_reserve_page(catalog: &CatalogData, submitted: bool) -> String {
    let mut body = String::new();
    body.push_str(&reserve::render_form_page(catalog, submitted));
    body.push_str(&footer::render());
    shell("Reserve Your Panel | Id Buzz Project", &body)
}

fn shell(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLESHEET}</style>
</head>
<body>
{body}</body>
</html>
"##
    )
}

const STYLESHEET: &str = r##"
* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: #0f172a; background: #fff; line-height: 1.6; }
.container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
.container.narrow { max-width: 760px; }
.container.center { text-align: center; }
.section { padding: 5rem 0; }
.section-light { background: #f8fafc; }
.section-night { background: linear-gradient(180deg, #0f172a, #1e3a5f); color: #e2e8f0; }
.section-night .section-head p { color: #bfdbfe; }
.section-accent { background: linear-gradient(135deg, #0284c7, #2563eb); color: #fff; }
.section-head { text-align: center; margin-bottom: 3rem; }
.section-head h2 { font-size: 2.25rem; font-weight: 800; margin-bottom: 0.75rem; }
.section-head p { font-size: 1.15rem; color: #475569; max-width: 48rem; margin: 0 auto; }
.gradient-text { background: linear-gradient(90deg, #38bdf8, #2563eb); -webkit-background-clip: text; background-clip: text; color: transparent; }
.gradient-warm { background: linear-gradient(90deg, #d946ef, #fb923c, #fbbf24); -webkit-background-clip: text; background-clip: text; color: transparent; }
.hero { padding: 7rem 0 6rem; text-align: center; background: linear-gradient(180deg, #0f172a, #1e3a8a, #0c4a6e); color: #fff; }
.hero-badge { display: inline-block; padding: 0.4rem 1.1rem; border: 1px solid rgba(255,255,255,0.3); border-radius: 999px; font-size: 0.85rem; letter-spacing: 0.05em; margin-bottom: 1.5rem; }
.hero-title { font-size: 3.75rem; font-weight: 900; letter-spacing: -0.02em; }
.hero-tagline { margin-top: 1rem; font-size: 1.1rem; letter-spacing: 0.25em; color: #bae6fd; }
.hero-actions { margin: 2.5rem 0; display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.btn { display: inline-block; padding: 0.85rem 2rem; border-radius: 0.6rem; font-weight: 700; text-decoration: none; border: none; cursor: pointer; font-size: 1rem; transition: filter 0.2s; }
.btn:hover { filter: brightness(1.08); }
.btn-primary { background: #0284c7; color: #fff; }
.btn-ghost { background: rgba(255,255,255,0.1); color: #fff; border: 1px solid rgba(255,255,255,0.4); }
.btn-dark { background: #1f2937; color: #fff; }
.btn-light { background: #fff; color: #0369a1; }
.btn-disabled { background: #cbd5e1; color: #64748b; cursor: not-allowed; padding: 0.85rem 2rem; border-radius: 0.6rem; font-weight: 700; display: inline-block; }
.btn-wide { width: 100%; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 1.5rem; max-width: 48rem; margin: 0 auto; }
.stat-value { font-size: 2.25rem; font-weight: 800; }
.stat-label { font-size: 0.9rem; opacity: 0.8; }
.card-grid { display: grid; gap: 1.5rem; }
.card-grid.three { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.card-grid.four { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 1rem; padding: 1.75rem; box-shadow: 0 8px 24px rgba(15,23,42,0.06); }
.card h3 { margin-bottom: 0.5rem; }
.card-glass { background: rgba(255,255,255,0.08); border: 1px solid rgba(255,255,255,0.2); color: inherit; box-shadow: none; }
.card-kicker { font-size: 0.85rem; opacity: 0.75; margin-bottom: 0.35rem; }
.card-big { font-size: 1.9rem; font-weight: 800; }
.card-sub { font-size: 0.9rem; opacity: 0.75; margin-top: 0.35rem; }
.mission-banner { margin-top: 3rem; padding: 2.5rem; border-radius: 1rem; background: linear-gradient(135deg, #0369a1, #1d4ed8); color: #fff; }
.mission-banner h3 { font-size: 1.6rem; margin-bottom: 1rem; }
.mission-aside { margin-top: 1rem; font-weight: 700; }
.step-card { text-align: center; background: #fff; border: 1px solid #e2e8f0; border-radius: 1rem; padding: 2rem 1.5rem; }
.step-number { width: 3rem; height: 3rem; margin: 0 auto 1rem; border-radius: 50%; background: #0284c7; color: #fff; font-weight: 800; font-size: 1.3rem; display: flex; align-items: center; justify-content: center; }
.tier-card { position: relative; background: #fff; border: 2px solid #e2e8f0; border-radius: 1rem; padding: 2rem; display: flex; flex-direction: column; gap: 0.5rem; }
.tier-card.highlight { border-color: #0284c7; box-shadow: 0 12px 32px rgba(2,132,199,0.18); }
.tier-badge { position: absolute; top: -0.8rem; left: 50%; transform: translateX(-50%); background: #0284c7; color: #fff; padding: 0.25rem 1rem; border-radius: 999px; font-size: 0.8rem; font-weight: 700; }
.tier-size { color: #64748b; font-size: 0.95rem; }
.tier-price { font-size: 2rem; font-weight: 800; color: #0369a1; }
.tier-per { font-size: 1rem; font-weight: 400; color: #64748b; }
.tier-note { font-size: 0.8rem; color: #94a3b8; }
.tier-availability { font-weight: 700; color: #059669; }
.tier-positions { list-style: none; margin: 0.5rem 0 1rem; font-size: 0.9rem; color: #475569; }
.tier-positions li { padding: 0.2rem 0; border-bottom: 1px dashed #e2e8f0; }
.pricing-disclaimer { margin-top: 2.5rem; text-align: center; font-size: 0.85rem; color: #64748b; max-width: 52rem; margin-left: auto; margin-right: auto; }
.van-canvas { position: relative; max-width: 960px; margin: 0 auto; background: #fff; border-radius: 1rem; padding: 1.5rem; box-shadow: 0 16px 40px rgba(15,23,42,0.12); }
.van-editor svg { display: block; width: 100%; height: auto; user-select: none; }
.upload-chip { position: absolute; top: 2rem; right: 2rem; z-index: 10; background: #fff; border: 1px solid #e2e8f0; border-radius: 0.6rem; padding: 0.6rem 1rem; font-size: 0.85rem; font-weight: 700; cursor: pointer; box-shadow: 0 4px 12px rgba(15,23,42,0.12); }
.van-model { margin-top: 3rem; text-align: center; }
.van-model iframe { width: 100%; height: 600px; border: 0; border-radius: 1rem; margin-top: 1rem; box-shadow: 0 16px 40px rgba(15,23,42,0.2); }
.upload-panel { background: linear-gradient(135deg, #f0f9ff, #eff6ff); border: 2px solid #bae6fd; border-radius: 1rem; padding: 2rem; }
.upload-zone { border: 3px dashed #cbd5e1; border-radius: 0.9rem; background: #fff; padding: 3rem 1.5rem; text-align: center; transition: border-color 0.2s, background 0.2s; }
.upload-zone.drag-active { border-color: #0284c7; background: #e0f2fe; }
.upload-zone p { color: #64748b; margin: 0.5rem 0 1.25rem; }
.upload-hint { font-size: 0.85rem; margin-top: 1rem; }
.upload-result img { display: block; max-width: 100%; max-height: 16rem; margin: 1rem auto; border-radius: 0.6rem; }
.upload-status { display: flex; justify-content: space-between; align-items: center; font-weight: 700; color: #047857; }
.upload-meta { text-align: center; font-size: 0.85rem; color: #64748b; }
.link-button { background: none; border: none; color: #dc2626; font-weight: 600; cursor: pointer; }
.guidelines { margin-top: 1.5rem; background: #fefce8; border: 2px solid #fde68a; border-radius: 0.9rem; padding: 1.5rem; }
.guidelines ul { margin-top: 0.75rem; padding-left: 1.25rem; font-size: 0.9rem; color: #854d0e; }
.map-placeholder { margin-top: 2.5rem; aspect-ratio: 16 / 9; border-radius: 1rem; background: linear-gradient(135deg, #075985, #1e3a8a); display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.5rem; text-align: center; padding: 1.5rem; }
.demo-badge { background: rgba(2,132,199,0.85); padding: 0.4rem 1.2rem; border-radius: 999px; font-size: 0.85rem; margin-top: 0.75rem; }
.map-note { text-align: center; font-size: 0.9rem; margin-top: 1.25rem; color: #bfdbfe; }
.feature-callout { margin-top: 1.5rem; border: 2px solid #f59e0b; background: rgba(245,158,11,0.15); border-radius: 1rem; padding: 1.5rem; }
.feature-callout h3 { margin-bottom: 0.5rem; }
.panel-card { margin-top: 2.5rem; background: #fff; border: 1px solid #e2e8f0; border-radius: 1rem; padding: 2.5rem; box-shadow: 0 8px 24px rgba(15,23,42,0.06); }
.panel-card h3 { font-size: 1.5rem; margin-bottom: 1.25rem; }
.progress-labels { display: flex; justify-content: space-between; font-size: 0.9rem; color: #475569; margin-bottom: 0.5rem; }
.progress-track { height: 1.1rem; background: #e2e8f0; border-radius: 999px; overflow: hidden; }
.progress-fill { height: 100%; background: linear-gradient(90deg, #0ea5e9, #2563eb); border-radius: 999px; }
.progress-stats { margin-top: 2rem; }
.mini-stat { text-align: center; background: #f0f9ff; border-radius: 0.9rem; padding: 1.25rem; }
.mini-value { font-size: 1.8rem; font-weight: 800; color: #0369a1; }
.mini-label { font-size: 0.85rem; color: #475569; }
.cost-row { display: flex; justify-content: space-between; padding: 0.65rem 0; border-bottom: 1px solid #f1f5f9; }
.cost-total { border-top: 1px solid #e2e8f0; border-bottom: none; font-weight: 800; margin-top: 0.5rem; }
.dash-banner { margin-top: 3rem; background: linear-gradient(135deg, #0284c7, #2563eb); border-radius: 1rem; padding: 3rem 2rem; text-align: center; }
.dash-banner h3 { font-size: 1.7rem; margin-bottom: 1rem; }
.dash-banner p { max-width: 46rem; margin: 0 auto 2rem; color: #e0f2fe; }
.phase-chip { display: inline-block; margin-top: 0.75rem; border: 1px solid #facc15; color: #fde047; padding: 0.2rem 0.8rem; border-radius: 999px; font-size: 0.75rem; font-weight: 700; }
.faq-entry { background: #fff; border: 2px solid #e2e8f0; border-radius: 0.9rem; margin-bottom: 1rem; padding: 1.1rem 1.4rem; }
.faq-entry summary { font-weight: 700; font-size: 1.05rem; cursor: pointer; }
.faq-entry p { margin-top: 0.75rem; color: #475569; }
.cta-card { margin-top: 3rem; background: linear-gradient(90deg, #0284c7, #2563eb); color: #fff; border-radius: 1rem; padding: 2.5rem; text-align: center; }
.cta-card h3 { font-size: 1.5rem; margin-bottom: 0.75rem; }
.cta-card p { margin-bottom: 1.5rem; color: #e0f2fe; }
.section-accent h2 { font-size: 2.25rem; margin-bottom: 0.75rem; }
.section-accent p { margin-bottom: 2rem; color: #e0f2fe; }
.form-page { background: linear-gradient(135deg, #f0f9ff, #eff6ff); min-height: 80vh; }
.close-link { display: inline-block; margin-bottom: 1.5rem; color: #64748b; text-decoration: none; font-weight: 600; }
.form-card { background: #fff; border-radius: 1rem; padding: 2.5rem; box-shadow: 0 20px 50px rgba(15,23,42,0.12); }
.form-card label { display: block; font-weight: 700; font-size: 0.9rem; margin: 1.1rem 0 0.4rem; }
.form-card input, .form-card select, .form-card textarea { width: 100%; padding: 0.8rem 1rem; border: 2px solid #cbd5e1; border-radius: 0.6rem; font-size: 1rem; font-family: inherit; }
.form-card input:focus, .form-card select:focus, .form-card textarea:focus { outline: none; border-color: #0284c7; }
.field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
.form-card button[type=submit] { margin-top: 1.75rem; }
.form-error { background: #fef2f2; border: 2px solid #fecaca; color: #b91c1c; border-radius: 0.8rem; padding: 1rem; margin-bottom: 1rem; }
.form-footnote { margin-top: 1rem; font-size: 0.85rem; color: #94a3b8; text-align: center; }
.artwork-note { margin-top: 1.25rem; background: #f0fdf4; border: 2px solid #bbf7d0; border-radius: 0.8rem; padding: 1rem; color: #047857; }
.success-card { background: #fff; border-radius: 1rem; padding: 3.5rem 2.5rem; text-align: center; box-shadow: 0 20px 50px rgba(15,23,42,0.12); }
.success-mark { width: 4.5rem; height: 4.5rem; margin: 0 auto 1.5rem; border-radius: 50%; background: #dcfce7; color: #16a34a; font-size: 2.2rem; display: flex; align-items: center; justify-content: center; }
.success-card h2 { margin-bottom: 0.75rem; }
.success-card p { color: #475569; margin-bottom: 2rem; }
.footer { background: #111827; color: #d1d5db; padding: 3.5rem 0 2rem; }
.footer h3 { color: #fff; margin-bottom: 0.75rem; }
.footer h4 { color: #fff; margin-bottom: 0.75rem; }
.footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 2rem; font-size: 0.9rem; }
.footer ul { list-style: none; }
.footer ul li { margin-bottom: 0.5rem; }
.footer a { color: inherit; text-decoration: none; }
.footer a:hover { color: #38bdf8; }
.footer-base { border-top: 1px solid #1f2937; margin-top: 2.5rem; padding-top: 1.5rem; display: flex; justify-content: space-between; flex-wrap: wrap; gap: 0.5rem; font-size: 0.85rem; color: #9ca3af; }
.hidden { display: none; }
@media (max-width: 640px) {
  .hero-title { font-size: 2.5rem; }
  .field-row { grid-template-columns: 1fr; }
  .van-model iframe { height: 360px; }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{build_catalog_data, build_funding_report, build_tracking_data};

    fn index_html() -> String {
        render_index(
            &build_catalog_data(&[]),
            &build_tracking_data(&[]),
            &build_funding_report(None),
        )
    }

    #[test]
    fn test_index_has_all_section_anchors_in_order() {
        let html = index_html();
        let anchors = [
            "hero",
            "about",
            "how-it-works",
            "panels",
            "van",
            "upload",
            "gps",
            "transparency",
            "dashboard",
            "faq",
            "reserve",
        ];
        let mut last = 0;
        for anchor in anchors {
            let needle = format!(r#"id="{}""#, anchor);
            let at = html.find(&needle).unwrap_or_else(|| {
                panic!("missing section anchor {}", anchor);
            });
            assert!(at > last, "section {} out of order", anchor);
            last = at;
        }
    }

    #[test]
    fn test_index_smooth_scrolling_and_shell() {
        let html = index_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("scroll-behavior: smooth"));
        assert!(html.contains("<title>Id Buzz Project"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_index_renders_from_empty_repository() {
        // Read failures surface as empty datasets; the page still carries
        // every section.
        let html = index_html();
        assert!(html.contains("No routes yet"));
        assert!(html.contains("Sold Out"));
        assert!(html.contains("$59,000"));
    }

    #[test]
    fn test_reserve_page_form_and_success_states() {
        let catalog = build_catalog_data(&[]);
        let form = render_reserve_page(&catalog, false);
        assert!(form.contains("<title>Reserve Your Panel"));
        assert!(form.contains(r#"id="reserve-form""#));
        assert!(form.contains("Id Buzz Project"));

        let success = render_reserve_page(&catalog, true);
        assert!(success.contains("Reservation Submitted!"));
        assert!(!success.contains(r#"id="reserve-form""#));
    }
}
