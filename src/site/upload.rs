//! Artwork upload and preview.
//!
//! Uploads go through `POST /v1/artwork` so the server vets the file and
//! returns the canonical data URL. An accepted upload is kept in
//! `localStorage` for the reservation form to attach.

pub(crate) fn render() -> String {
    format!(
        r##"<section id="upload" class="section section-light">
<div class="container narrow">
<div class="section-head">
<h2>Upload &amp; Preview Your Artwork</h2>
<p>Images only, up to 2 MB. Accepted artwork is attached to your reservation automatically.</p>
</div>
<div class="upload-panel">
<div id="upload-zone" class="upload-zone">
<h3>Upload Your Artwork</h3>
<p>Drag and drop your image here, or click to browse</p>
<button id="upload-browse" class="btn btn-primary" type="button">Choose File</button>
<p class="upload-hint">Supported formats: PNG, JPG, SVG</p>
<input type="file" id="upload-input" accept="image/*" hidden>
</div>
<div id="upload-result" class="upload-result hidden">
<div class="upload-status">
<span>Uploaded</span>
<button id="upload-clear" class="link-button" type="button">Remove</button>
</div>
<img id="upload-preview" alt="Artwork preview">
<p id="upload-meta" class="upload-meta"></p>
</div>
<p id="upload-error" class="form-error hidden"></p>
<div class="guidelines">
<h4>Design Guidelines</h4>
<ul>
<li>High resolution recommended (minimum 300 DPI)</li>
<li>Match the aspect ratio of your chosen panel size</li>
<li>Use bold, readable fonts for maximum visibility</li>
<li>Keep important elements away from edges</li>
<li>Detailed guidelines coming soon</li>
</ul>
</div>
</div>
</div>
<script>{script}</script>
</section>
"##,
        script = UPLOAD_SCRIPT,
    )
}

const UPLOAD_SCRIPT: &str = r##"
(function () {
  var zone = document.getElementById('upload-zone');
  if (!zone) return;
  var input = document.getElementById('upload-input');
  var browse = document.getElementById('upload-browse');
  var result = document.getElementById('upload-result');
  var preview = document.getElementById('upload-preview');
  var meta = document.getElementById('upload-meta');
  var errorBox = document.getElementById('upload-error');
  var clearBtn = document.getElementById('upload-clear');
  var STORAGE_KEY = 'vanads.artwork';

  function showError(message) {
    errorBox.textContent = message;
    errorBox.classList.remove('hidden');
  }

  function upload(file) {
    errorBox.classList.add('hidden');
    var body = new FormData();
    body.append('artwork', file, file.name);
    fetch('/v1/artwork', { method: 'POST', body: body })
      .then(function (response) {
        if (response.status === 413) {
          throw new Error('Artwork must stay under 2 MB.');
        }
        if (response.status === 429) {
          throw new Error('Too many uploads. Please wait a minute and try again.');
        }
        if (!response.ok) {
          throw new Error('Upload failed. Please try again.');
        }
        return response.json();
      })
      .then(function (data) {
        if (!data.accepted) {
          showError('Only image files can be previewed.');
          return;
        }
        try {
          window.localStorage.setItem(STORAGE_KEY, data.data_url);
        } catch (ignored) {}
        preview.src = data.data_url;
        var kb = Math.max(1, Math.round(data.size_bytes / 1024));
        meta.textContent = data.content_type + ', ' + kb + ' KB, checksum ' + data.checksum.slice(0, 12);
        zone.classList.add('hidden');
        result.classList.remove('hidden');
      })
      .catch(function (err) {
        showError(err.message);
      });
  }

  browse.addEventListener('click', function () { input.click(); });
  input.addEventListener('change', function () {
    if (input.files && input.files[0]) upload(input.files[0]);
  });
  zone.addEventListener('dragover', function (evt) {
    evt.preventDefault();
    zone.classList.add('drag-active');
  });
  zone.addEventListener('dragleave', function () {
    zone.classList.remove('drag-active');
  });
  zone.addEventListener('drop', function (evt) {
    evt.preventDefault();
    zone.classList.remove('drag-active');
    if (evt.dataTransfer.files && evt.dataTransfer.files[0]) {
      upload(evt.dataTransfer.files[0]);
    }
  });
  clearBtn.addEventListener('click', function () {
    try {
      window.localStorage.removeItem(STORAGE_KEY);
    } catch (ignored) {}
    preview.removeAttribute('src');
    result.classList.add('hidden');
    zone.classList.remove('hidden');
  });
})();
"##;
