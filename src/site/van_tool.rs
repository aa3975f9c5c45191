//! Interactive panel-outline tool and the embedded 3D model.
//!
//! The server renders the editor's initial state with
//! [`OverlayEditor::render_svg`]; the inline script then re-renders the
//! same SVG structure client-side as the visitor drags corners, adds
//! points and previews an uploaded image.

use crate::overlay::OverlayEditor;

pub(crate) const EDITOR_WIDTH: u32 = 960;
pub(crate) const EDITOR_HEIGHT: u32 = 600;

/// Photo the outline is traced over.
const VAN_IMAGE_URL: &str = "https://i.ibb.co/fVwGCrMM/ID-Buzz-Yellow-Img.avif";

const SKETCHFAB_EMBED_URL: &str =
    "https://sketchfab.com/models/65a859a640a5463f9835fd06f684b0bb/embed?autostart=1&amp;ui_controls=1&amp;ui_infos=0";

pub(crate) fn render() -> String {
    let editor_svg =
        OverlayEditor::new().render_svg(EDITOR_WIDTH, EDITOR_HEIGHT, Some(VAN_IMAGE_URL));

    format!(
        r##"<section id="van" class="section">
<div class="container">
<div class="section-head">
<h2 class="gradient-warm">Drag &amp; Click to Preview Your Logo on the Van</h2>
<p>Drag circles or add points to match panel shape.</p>
</div>
<div class="van-canvas">
<label class="upload-chip" for="van-file">Upload Image</label>
<input type="file" id="van-file" accept="image/*" hidden>
<div id="van-editor" class="van-editor">{editor_svg}</div>
</div>
<div class="van-model">
<button id="van-reload" class="btn btn-dark" type="button">Reset View</button>
<iframe id="van-frame" title="Volkswagen ID Buzz 3D Model" allow="autoplay; fullscreen; xr-spatial-tracking" allowfullscreen src="{embed}"></iframe>
</div>
</div>
<script>{script}</script>
</section>
"##,
        embed = SKETCHFAB_EMBED_URL,
        script = EDITOR_SCRIPT,
    )
}

/// Client-side half of the overlay editor. Mirrors the server renderer:
/// same node classes, same handle geometry, same dim-while-previewing
/// opacities.
const EDITOR_SCRIPT: &str = r##"
(function () {
  var wrap = document.getElementById('van-editor');
  if (!wrap) return;
  var svg = wrap.querySelector('svg');
  var clip = svg.querySelector('#polyClip polygon');
  if (!clip) return;
  var SVG_NS = 'http://www.w3.org/2000/svg';
  var corners = clip.getAttribute('points').trim().split(/\s+/).map(function (pair) {
    var xy = pair.split(',');
    return { x: parseFloat(xy[0]), y: parseFloat(xy[1]) };
  });
  var artworkUrl = null;
  var dragIndex = null;

  function pointsAttr() {
    return corners.map(function (c) { return c.x + ',' + c.y; }).join(' ');
  }

  function toLocal(evt) {
    var rect = svg.getBoundingClientRect();
    var box = svg.viewBox.baseVal;
    return {
      x: (evt.clientX - rect.left) * box.width / rect.width,
      y: (evt.clientY - rect.top) * box.height / rect.height
    };
  }

  function redraw() {
    clip.setAttribute('points', pointsAttr());
    svg.querySelectorAll('.panel-tint, .panel-artwork, .corner-handle, .midpoint-handle')
      .forEach(function (node) { node.remove(); });

    if (artworkUrl) {
      var xs = corners.map(function (c) { return c.x; });
      var ys = corners.map(function (c) { return c.y; });
      var minX = Math.min.apply(null, xs);
      var minY = Math.min.apply(null, ys);
      var image = document.createElementNS(SVG_NS, 'image');
      image.setAttribute('class', 'panel-artwork');
      image.setAttribute('href', artworkUrl);
      image.setAttribute('x', minX);
      image.setAttribute('y', minY);
      image.setAttribute('width', Math.max.apply(null, xs) - minX);
      image.setAttribute('height', Math.max.apply(null, ys) - minY);
      image.setAttribute('preserveAspectRatio', 'xMidYMid slice');
      image.setAttribute('clip-path', 'url(#polyClip)');
      svg.appendChild(image);
    } else {
      var tint = document.createElementNS(SVG_NS, 'polygon');
      tint.setAttribute('class', 'panel-tint');
      tint.setAttribute('points', pointsAttr());
      tint.setAttribute('fill', 'rgba(125, 200, 255, 0.25)');
      svg.appendChild(tint);
    }

    var nodeOpacity = artworkUrl ? 0.18 : 1;
    var plusOpacity = artworkUrl ? 0.15 : 1;

    corners.forEach(function (c, i) {
      var dot = document.createElementNS(SVG_NS, 'circle');
      dot.setAttribute('class', 'corner-handle');
      dot.setAttribute('data-corner', i);
      dot.setAttribute('cx', c.x);
      dot.setAttribute('cy', c.y);
      dot.setAttribute('r', 7);
      dot.setAttribute('fill', '#f472b6');
      dot.setAttribute('stroke', 'white');
      dot.setAttribute('opacity', nodeOpacity);
      dot.addEventListener('mousedown', function () { dragIndex = i; });
      svg.appendChild(dot);
    });

    corners.forEach(function (c, i) {
      var next = corners[(i + 1) % corners.length];
      var mx = (c.x + next.x) / 2;
      var my = (c.y + next.y) / 2;
      var group = document.createElementNS(SVG_NS, 'g');
      group.setAttribute('class', 'midpoint-handle');
      group.setAttribute('data-edge', i);
      group.setAttribute('opacity', plusOpacity);
      var ring = document.createElementNS(SVG_NS, 'circle');
      ring.setAttribute('cx', mx);
      ring.setAttribute('cy', my);
      ring.setAttribute('r', 8);
      ring.setAttribute('fill', '#facc15');
      ring.setAttribute('stroke', 'white');
      var label = document.createElementNS(SVG_NS, 'text');
      label.setAttribute('x', mx);
      label.setAttribute('y', my);
      label.setAttribute('text-anchor', 'middle');
      label.setAttribute('dominant-baseline', 'central');
      label.setAttribute('font-size', '11');
      label.setAttribute('font-weight', 'bold');
      label.textContent = '+';
      group.appendChild(ring);
      group.appendChild(label);
      group.addEventListener('click', function () {
        corners.splice(i + 1, 0, { x: mx, y: my });
        redraw();
      });
      svg.appendChild(group);
    });
  }

  svg.addEventListener('mousemove', function (evt) {
    if (dragIndex === null) return;
    corners[dragIndex] = toLocal(evt);
    redraw();
  });
  document.addEventListener('mouseup', function () { dragIndex = null; });
  svg.addEventListener('mouseleave', function () { dragIndex = null; });

  var fileInput = document.getElementById('van-file');
  if (fileInput) {
    fileInput.addEventListener('change', function () {
      var file = fileInput.files && fileInput.files[0];
      if (!file || file.type.indexOf('image/') !== 0) return;
      var reader = new FileReader();
      reader.onload = function (evt) {
        artworkUrl = evt.target.result;
        redraw();
      };
      reader.readAsDataURL(file);
    });
  }

  var reload = document.getElementById('van-reload');
  var frame = document.getElementById('van-frame');
  if (reload && frame) {
    reload.addEventListener('click', function () {
      frame.src = frame.getAttribute('src');
    });
  }

  redraw();
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_rendered_editor_svg() {
        let html = render();
        assert!(html.contains(r#"id="van-editor""#));
        assert!(html.contains(r#"clipPath id="polyClip""#));
        assert!(html.contains("corner-handle"));
    }

    #[test]
    fn test_embeds_model_viewer_and_script() {
        let html = render();
        assert!(html.contains("sketchfab.com/models/65a859a640a5463f9835fd06f684b0bb"));
        assert!(html.contains("Reset View"));
        assert!(html.contains("readAsDataURL"));
    }
}
