//! Avatar asset resolution.
//!
//! Avatars are a fixed set of bundled images addressed by numeric id. An id
//! outside the supported range resolves to nothing, which tells the caller to
//! fall back to an initial-letter badge.

// ============================================================================
// Constants
// ============================================================================

/// Lowest valid avatar id.
pub const MIN_AVATAR_ID: u32 = 1;

/// Highest valid avatar id.
pub const MAX_AVATAR_ID: u32 = 8;

/// Badge shown when a username is empty.
const FALLBACK_BADGE: char = '?';

// ============================================================================
// Resolution
// ============================================================================

/// Returns true if the id addresses a bundled avatar.
pub fn is_valid_avatar_id(pic_id: u32) -> bool {
    (MIN_AVATAR_ID..=MAX_AVATAR_ID).contains(&pic_id)
}

/// Resolves an avatar id to its static asset path.
///
/// Ids outside 1-8 (including the server's 0 = unset) resolve to `None`.
pub fn avatar_url(pic_id: u32) -> Option<String> {
    is_valid_avatar_id(pic_id).then(|| format!("/img/avatars/avatar-{pic_id}.png"))
}

/// Returns the initial-letter badge for a username.
///
/// Used wherever no avatar is available: the first character, uppercased.
pub fn initial_badge(username: &str) -> char {
    username
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or(FALLBACK_BADGE)
}

// ============================================================================
// Tests
// ============================================================================
