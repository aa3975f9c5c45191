//! Shared page footer.

use chrono::{Datelike, Utc};

pub(crate) fn render() -> String {
    format!(
        r##"<footer class="footer">
<div class="container">
<div class="footer-grid">
<div>
<h3>Id Buzz Project</h3>
<p>The world's first fully transparent local mobile advertising platform powered by the VW ID Buzz.</p>
</div>
<div>
<h4>Quick Links</h4>
<ul>
<li><a href="/#hero">Home</a></li>
<li><a href="/#about">About</a></li>
<li><a href="/#panels">Panel Tiers</a></li>
<li><a href="/#reserve">Reserve Panel</a></li>
</ul>
</div>
<div>
<h4>Features</h4>
<ul>
<li><a href="/#van">3D Van Preview</a></li>
<li><a href="/#gps">GPS Tracking</a></li>
<li><a href="/#transparency">Transparency</a></li>
<li><a href="/#faq">FAQ</a></li>
</ul>
</div>
<div>
<h4>Contact</h4>
<ul>
<li>info@idbuzzproject.com</li>
<li>(555) 123-4567</li>
<li>Local Routes<br>Your City, ST</li>
</ul>
</div>
</div>
<div class="footer-base">
<p>&copy; {year} Id Buzz Project. All rights reserved.</p>
<p>Fully Transparent Local Advertising &bull; 48-Month Proof of Concept</p>
</div>
</div>
</footer>
"##,
        year = Utc::now().year(),
    )
}
