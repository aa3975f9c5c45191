//! Public GPS tracking view.
//!
//! Rendered from the newest route samples; the inline script then follows
//! the live feed so the cards keep counting while the page is open. The
//! map itself is still a placeholder.

use crate::api::TrackingData;
use crate::site::helpers::thousands;

pub(crate) fn render(tracking: &TrackingData) -> String {
    let (location, coords) = match &tracking.latest {
        Some(point) => (
            "Active Route",
            format!("Lat: {:.4} | Lng: {:.4}", point.latitude, point.longitude),
        ),
        None => ("No routes yet", String::new()),
    };
    let demo_badge = if tracking.simulated && tracking.latest.is_some() {
        r##"<div class="demo-badge">Demo Mode: Simulated Routes Active</div>"##
    } else {
        ""
    };

    format!(
        r##"<section id="gps" class="section section-night">
<div class="container">
<div class="section-head">
<h2 class="gradient-warm">Live GPS Tracking</h2>
<p>Real-time location, movement patterns, and impression data &mdash; tracked in a transparent way.</p>
</div>
<div class="card-grid three">
<div class="card card-glass">
<div class="card-kicker">Current Location</div>
<div id="gps-location" class="card-big">{location}</div>
<div id="gps-coords" class="card-sub">{coords}</div>
</div>
<div class="card card-glass">
<div class="card-kicker">Total Impressions</div>
<div id="gps-impressions" class="card-big">{impressions}</div>
<div class="card-sub">Traffic-based visibility estimate</div>
</div>
<div class="card card-glass">
<div class="card-kicker">Data Points</div>
<div id="gps-count" class="card-big">{count}</div>
<div class="card-sub">Last 24 hours</div>
</div>
</div>
<div class="map-placeholder">
<h3>Interactive Map View</h3>
<p>Coming Soon: Live route visualization</p>
{demo_badge}
</div>
<p class="map-note">GPS tracking uses Google Traffic data for impression estimates. AI camera verification launches in <strong>Phase 2</strong>.</p>
<div class="feature-callout">
<h3>GPS Tracking System &mdash; Coming Soon</h3>
<p>A next-generation GPS system will provide ultra-precise movement tracking, route reconstruction, and real-time motion analytics using enhanced sensor fusion.</p>
</div>
<div class="feature-callout">
<h3>AI Camera &mdash; Coming Soon</h3>
<p>A vehicle-mounted sensor will count nearby cars to validate impression estimates in real-time. No video is stored and no personal data is collected &mdash; only object counts for accuracy.</p>
</div>
</div>
<script>{script}</script>
</section>
"##,
        impressions = thousands(tracking.total_impressions),
        count = tracking.point_count,
        script = STREAM_SCRIPT,
    )
}

/// Follows `/v1/routes/stream`. The first batch replays the same backlog
/// the page was rendered from, so the counters are rebuilt from zero
/// instead of added to the server-rendered numbers.
const STREAM_SCRIPT: &str = r##"
(function () {
  if (typeof EventSource === 'undefined') return;
  var locationCard = document.getElementById('gps-location');
  var coords = document.getElementById('gps-coords');
  var impressions = document.getElementById('gps-impressions');
  var count = document.getElementById('gps-count');
  if (!locationCard || !coords || !impressions || !count) return;
  var total = 0;
  var points = 0;
  var feed = new EventSource('/v1/routes/stream');
  feed.onmessage = function (evt) {
    var point;
    try {
      point = JSON.parse(evt.data);
    } catch (ignored) {
      return;
    }
    total += point.estimated_impressions;
    points += 1;
    locationCard.textContent = 'Active Route';
    coords.textContent = 'Lat: ' + point.latitude.toFixed(4) + ' | Lng: ' + point.longitude.toFixed(4);
    impressions.textContent = total.toLocaleString();
    count.textContent = points;
  };
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RoutePointId;
    use crate::models::RoutePoint;
    use crate::services::build_tracking_data;
    use chrono::Utc;

    fn point(id: i64, impressions: i64) -> RoutePoint {
        RoutePoint {
            id: RoutePointId::new(id),
            timestamp: Utc::now(),
            latitude: 44.9778,
            longitude: -93.265,
            speed: 25.0,
            estimated_impressions: impressions,
            is_simulated: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_renders_totals_and_demo_badge() {
        let tracking = build_tracking_data(&[point(1, 1_200), point(2, 800)]);
        let html = render(&tracking);
        assert!(html.contains("2,000"));
        assert!(html.contains("Lat: 44.9778"));
        assert!(html.contains("Demo Mode: Simulated Routes Active"));
    }

    #[test]
    fn test_empty_state_has_no_badge() {
        let html = render(&build_tracking_data(&[]));
        assert!(html.contains("No routes yet"));
        assert!(!html.contains("Demo Mode"));
        assert!(html.contains("Coming Soon: Live route visualization"));
    }

    #[test]
    fn test_script_subscribes_to_stream() {
        let html = render(&build_tracking_data(&[]));
        assert!(html.contains("/v1/routes/stream"));
        assert!(html.contains("EventSource"));
    }
}
