//! Reservation call-to-action and the standalone form page.

use crate::api::CatalogData;
use crate::models::PanelSize;
use crate::site::helpers::usd;

/// Closing call-to-action on the single page.
pub(crate) fn render_cta() -> String {
    r##"<section id="reserve" class="section section-accent">
<div class="container narrow center">
<h2>Ready to Get Started?</h2>
<p>Reserve your panel today and start driving local awareness for your business</p>
<a class="btn btn-light" href="/reserve">Reserve Your Panel Now</a>
</div>
</section>
"##
    .to_string()
}

/// The `/reserve` page body: the form, or the success state after a
/// completed submission.
pub(crate) fn render_form_page(catalog: &CatalogData, submitted: bool) -> String {
    if submitted {
        return r##"<section class="section form-page">
<div class="container narrow">
<div class="success-card">
<div class="success-mark">&#10003;</div>
<h2>Reservation Submitted!</h2>
<p>Thank you for your interest in the Id Buzz Project. We'll contact you shortly to finalize your panel placement.</p>
<a class="btn btn-primary" href="/">Back to Home</a>
</div>
</div>
</section>
"##
        .to_string();
    }

    let mut options = String::new();
    for tier in &catalog.tiers {
        let selected = if tier.size == PanelSize::Large {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r##"<option value="{value}"{selected}>{label} - {price}/month</option>"##,
            value = tier.size.as_str(),
            label = size_label(tier.size),
            price = usd(tier.monthly_cost),
        ));
    }

    format!(
        r##"<section class="form-page section">
<div class="container narrow">
<a class="close-link" href="/">&times; Close Form</a>
<div class="form-card">
<div class="section-head">
<h2>Reserve Your Panel</h2>
<p>Complete the form below to request a panel reservation</p>
</div>
<p id="form-error" class="form-error hidden"></p>
<form id="reserve-form">
<label for="business_name">Business Name *</label>
<input type="text" id="business_name" name="business_name" required placeholder="Your Business Name">
<label for="contact_name">Contact Name *</label>
<input type="text" id="contact_name" name="contact_name" required placeholder="Your Name">
<div class="field-row">
<div>
<label for="email">Email *</label>
<input type="email" id="email" name="email" required placeholder="your@email.com">
</div>
<div>
<label for="phone">Phone</label>
<input type="tel" id="phone" name="phone" placeholder="(555) 123-4567">
</div>
</div>
<label for="panel_size_requested">Panel Size Preference *</label>
<select id="panel_size_requested" name="panel_size_requested" required>{options}</select>
<label for="notes">Additional Notes</label>
<textarea id="notes" name="notes" rows="4" placeholder="Any special requests or questions..."></textarea>
<div id="artwork-note" class="artwork-note hidden">
<strong>Artwork Uploaded</strong>
<p>Your design will be included with this reservation</p>
</div>
<button id="reserve-submit" class="btn btn-primary btn-wide" type="submit">Request Panel Reservation</button>
<p class="form-footnote">* By submitting, you agree to be contacted about your panel reservation. No payment required at this time.</p>
</form>
</div>
</div>
<script>{script}</script>
</section>
"##,
        script = FORM_SCRIPT,
    )
}

fn size_label(size: PanelSize) -> &'static str {
    match size {
        PanelSize::Small => "Small",
        PanelSize::Medium => "Medium",
        PanelSize::Large => "Large",
    }
}

/// Submits the form as JSON. On failure the typed fields are left alone
/// so the same request can be sent again; on success the browser moves to
/// the server-rendered success state.
const FORM_SCRIPT: &str = r##"
(function () {
  var form = document.getElementById('reserve-form');
  if (!form) return;
  var errorBox = document.getElementById('form-error');
  var submitBtn = document.getElementById('reserve-submit');
  var artworkNote = document.getElementById('artwork-note');
  var STORAGE_KEY = 'vanads.artwork';
  var artworkUrl = null;
  try {
    artworkUrl = window.localStorage.getItem(STORAGE_KEY);
  } catch (ignored) {}
  if (artworkUrl && artworkNote) {
    artworkNote.classList.remove('hidden');
  }

  function fieldValue(name) {
    var field = form.elements.namedItem(name);
    return field && field.value ? field.value.trim() : '';
  }

  form.addEventListener('submit', function (evt) {
    evt.preventDefault();
    errorBox.classList.add('hidden');
    submitBtn.disabled = true;
    submitBtn.textContent = 'Submitting...';

    var payload = {
      business_name: fieldValue('business_name'),
      contact_name: fieldValue('contact_name'),
      email: fieldValue('email'),
      phone: fieldValue('phone') || null,
      panel_size_requested: fieldValue('panel_size_requested'),
      artwork_url: artworkUrl,
      notes: fieldValue('notes') || null
    };

    fetch('/v1/reservations', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    })
      .then(function (response) {
        if (response.ok) {
          try {
            window.localStorage.removeItem(STORAGE_KEY);
          } catch (ignored) {}
          window.location = '/reserve?submitted=1';
          return;
        }
        return response.json().then(function (data) {
          throw new Error((data && data.message) || 'Failed to submit reservation. Please try again.');
        }, function () {
          throw new Error('Failed to submit reservation. Please try again.');
        });
      })
      .catch(function (err) {
        errorBox.textContent = err.message;
        errorBox.classList.remove('hidden');
        submitBtn.disabled = false;
        submitBtn.textContent = 'Request Panel Reservation';
      });
  });
})();
"##;
