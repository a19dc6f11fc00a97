//! Property tests for the home page header and counter.

use petal_core::{html_escape, AppConfig};
use petal_pages::{host, Header, LIKE_BUTTON};
use petal_render::{HostPhase, RenderHost};
use proptest::prelude::*;

fn home_host() -> RenderHost {
    let mut host = host(&AppConfig::default()).unwrap();
    host.navigate("/").unwrap();
    host
}

fn likes(host: &RenderHost) -> String {
    host.tree().unwrap().texts_of("button").join("")
}

// ── Header ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn header_shows_any_non_empty_title(title in "\\PC{1,24}") {
        let node = Header::new(title.as_str()).render();

        prop_assert_eq!(node.texts_of("h1"), vec![title.clone()]);
        prop_assert_eq!(node.to_html(), format!("<h1>{}</h1>", html_escape(&title)));
    }
}

// ── Counter ─────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn n_flushed_clicks_display_n(n in 0u64..200) {
        let mut host = home_host();
        for _ in 0..n {
            host.click(LIKE_BUTTON).unwrap();
            host.flush().unwrap();
        }

        prop_assert_eq!(likes(&host), n.to_string());
        prop_assert_eq!(host.phase(), HostPhase::Idle);
    }

    #[test]
    fn n_queued_clicks_display_n_after_one_flush(n in 1u64..200) {
        let mut host = home_host();
        for _ in 0..n {
            host.click(LIKE_BUTTON).unwrap();
        }
        prop_assert_eq!(host.phase(), HostPhase::UpdatePending);
        prop_assert_eq!(likes(&host), "0");

        let patches = host.flush().unwrap();
        prop_assert_eq!(patches.len(), 1);
        prop_assert_eq!(likes(&host), n.to_string());
    }
}
