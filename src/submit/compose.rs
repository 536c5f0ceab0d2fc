//! Body composition
//!
//! Pure transformations deciding what body string goes on the wire: new
//! posts gain an attribution footer, updates may ship as a patch against
//! the published revision when that is cheaper than the full text.

/// A patch candidate for an update submission
///
/// The composer only produces the candidate and the size comparison;
/// whether to send the patch or the full body is the caller's policy.
#[derive(Debug, Clone)]
pub struct BodyPatch {
    /// Unified patch transforming the published body into the new body
    pub patch: String,
    /// True when the patch is strictly smaller than the full new body
    pub smaller: bool,
}

/// Append the attribution footer to a new post's body
///
/// The footer links back to the post's canonical page on the platform
/// frontend, separated from the content by a horizontal rule.
pub fn attributed_body(
    body: &str,
    frontend_url: &str,
    category: &str,
    author: &str,
    permlink: &str,
) -> String {
    let frontend_url = frontend_url.trim_end_matches('/');
    let label = frontend_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    format!(
        "{body}<br /><hr/><em>Open Source Contribution posted via \
         <a href=\"{frontend_url}/{category}/@{author}/{permlink}\">{label}</a></em><hr/>"
    )
}

/// Produce the patch candidate for an update
pub fn patch_candidate(original: &str, updated: &str) -> BodyPatch {
    let patch = diffy::create_patch(original, updated).to_string();
    let smaller = patch.len() < updated.len();
    BodyPatch { patch, smaller }
}
