use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::assets::{MANIFEST, SERVICE_WORKER};
use crate::error::{PatchError, Result};

pub const INDEX_HTML: &str = "index.html";

pub const HEAD_TAGS: [&str; 2] = [
    r##"<link rel="manifest" href="manifest.json">"##,
    r##"<meta name="theme-color" content="#7700FF">"##,
];

pub const BODY_SNIPPET: &str = r#"<script>
if ("serviceWorker" in navigator) {
  window.addEventListener("load", () => {
    navigator.serviceWorker.register("service-worker.js");
  });
}
</script>"#;

const HEAD_CLOSE: &str = "</head>";
const BODY_CLOSE: &str = "</body>";

/// Which snippets a patch inserted. Both false means the input already had them.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct PatchOutcome {
    pub manifest_linked: bool,
    pub worker_registered: bool,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        self.manifest_linked || self.worker_registered
    }
}

/// Insert the manifest link before the first `</head>` and the service worker
/// registration before the last `</body>`, each only if its filename is not
/// already referenced. Tag matching ignores ASCII case.
pub fn patch_html(html: &str) -> Result<(String, PatchOutcome)> {
    let mut out = html.to_owned();
    let mut outcome = PatchOutcome::default();

    if !out.contains(MANIFEST) {
        let at = find_tag(&out, HEAD_CLOSE, false)
            .ok_or(PatchError::MalformedDocument { tag: HEAD_CLOSE })?;
        let block = format!("\n{}\n", HEAD_TAGS.join("\n"));
        out.insert_str(at, &block);
        outcome.manifest_linked = true;
    }

    if !out.contains(SERVICE_WORKER) {
        let at = find_tag(&out, BODY_CLOSE, true)
            .ok_or(PatchError::MalformedDocument { tag: BODY_CLOSE })?;
        let block = format!("\n{}\n", BODY_SNIPPET);
        out.insert_str(at, &block);
        outcome.worker_registered = true;
    }

    Ok((out, outcome))
}

/// Byte offset of `tag` in `haystack`, ignoring ASCII case.
///
/// Only ASCII is folded so offsets stay valid in the original string.
fn find_tag(haystack: &str, tag: &str, last: bool) -> Option<usize> {
    let lowered = haystack.to_ascii_lowercase();
    if last {
        lowered.rfind(tag)
    } else {
        lowered.find(tag)
    }
}

/// Patch `build_dir/index.html` in place. The file is rewritten only when a
/// snippet was actually inserted.
pub fn patch_index_html(build_dir: &Path) -> Result<PatchOutcome> {
    let index = build_dir.join(INDEX_HTML);
    if !index.is_file() {
        return Err(PatchError::NotFound(index));
    }
    let html = fs::read_to_string(&index).map_err(PatchError::io("read", &index))?;
    let (patched, outcome) = patch_html(&html)?;

    if outcome.manifest_linked {
        log::info!("linked {} in {}", MANIFEST, index.display());
    }
    if outcome.worker_registered {
        log::info!("registered {} in {}", SERVICE_WORKER, index.display());
    }
    if outcome.changed() {
        fs::write(&index, patched).map_err(PatchError::io("write", &index))?;
    } else {
        log::info!("{} already patched", index.display());
    }
    Ok(outcome)
}
