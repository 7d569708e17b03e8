//! Reduced-motion preference detection.
//!
//! Reads `prefers-reduced-motion` so entrance animations can collapse their
//! delays for users who opt out of motion. Requires a browser environment;
//! on the server the answer is always `false` and the stylesheet's
//! reduced-motion rules still apply.

/// Whether the user agent reports a reduced-motion preference.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
