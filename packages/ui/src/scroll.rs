use dioxus::prelude::*;
use serde::Deserialize;

/// Header height at the top of the page, in px.
pub const HEADER_HEIGHT_EXPANDED: f64 = 96.0;
/// Header height once the hero has scrolled away.
pub const HEADER_HEIGHT_COMPACT: f64 = 64.0;
/// Viewports narrower than this use the mobile header.
pub const MOBILE_BREAKPOINT: f64 = 1024.0;

const MAX_BACKGROUND_OPACITY: f64 = 0.95;

/// Window measurements reported by the browser listener.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub hero_height: f64,
    pub viewport_width: f64,
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            hero_height: 0.0,
            viewport_width: MOBILE_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTone {
    /// Light text over the hero image.
    Light,
    /// Dark text over the opaque header.
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderAppearance {
    pub progress: f64,
    pub background_opacity: f64,
    pub height: f64,
    pub tone: HeaderTone,
    pub elevated: bool,
}

impl HeaderAppearance {
    pub fn style(&self) -> String {
        format!(
            "background-color: rgba(255, 255, 255, {:.3}); height: {:.1}px;",
            self.background_opacity, self.height
        )
    }

    pub fn class(&self) -> &'static str {
        match (self.tone, self.elevated) {
            (HeaderTone::Light, _) => "site_header tone_light",
            (HeaderTone::Dark, false) => "site_header tone_dark",
            (HeaderTone::Dark, true) => "site_header tone_dark elevated",
        }
    }
}

impl HeaderAppearance {
    fn from_progress(progress: f64) -> Self {
        Self {
            progress,
            background_opacity: progress * MAX_BACKGROUND_OPACITY,
            height: HEADER_HEIGHT_EXPANDED
                - (HEADER_HEIGHT_EXPANDED - HEADER_HEIGHT_COMPACT) * progress,
            tone: if progress < 0.5 {
                HeaderTone::Light
            } else {
                HeaderTone::Dark
            },
            elevated: progress >= 1.0,
        }
    }

    /// Fully scrolled look, for pages without a hero.
    pub fn solid() -> Self {
        Self::from_progress(1.0)
    }
}

/// Map scroll position over the hero to the header's look.
///
/// Progress runs from 0 at the top to 1 once the hero's bottom edge reaches
/// the expanded header. A missing or collapsed hero reports no progress.
pub fn header_appearance(scroll_y: f64, hero_height: f64) -> HeaderAppearance {
    let progress = if hero_height <= 0.0 || !scroll_y.is_finite() {
        0.0
    } else {
        let travel = (hero_height - HEADER_HEIGHT_EXPANDED).max(1.0);
        (scroll_y / travel).clamp(0.0, 1.0)
    };

    HeaderAppearance::from_progress(progress)
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

const JS_SCROLL_LISTENER: &str = r#"
    if (window.__pgScrollTeardown) { window.__pgScrollTeardown(); }
    let pending = false;
    const report = () => {
        pending = false;
        const hero = document.getElementById('hero');
        dioxus.send({
            scrollY: window.scrollY || 0,
            heroHeight: hero ? hero.offsetHeight : 0,
            viewportWidth: window.innerWidth || 0,
        });
    };
    const onChange = () => {
        if (pending) { return; }
        pending = true;
        window.requestAnimationFrame(report);
    };
    window.addEventListener('scroll', onChange, { passive: true });
    window.addEventListener('resize', onChange);
    window.__pgScrollTeardown = () => {
        window.removeEventListener('scroll', onChange);
        window.removeEventListener('resize', onChange);
        window.__pgScrollTeardown = null;
    };
    report();
    await new Promise(() => {});
"#;

const JS_SCROLL_TEARDOWN: &str =
    "if (window.__pgScrollTeardown) { window.__pgScrollTeardown(); } return '';";

/// Live window metrics, updated at most once per animation frame.
fn use_scroll_metrics() -> Signal<ScrollMetrics> {
    let mut metrics = use_signal(ScrollMetrics::default);

    use_future(move || async move {
        let mut listener = document::eval(JS_SCROLL_LISTENER);
        loop {
            match listener.recv::<ScrollMetrics>().await {
                Ok(next) => {
                    if *metrics.peek() != next {
                        metrics.set(next);
                    }
                }
                Err(e) => {
                    tracing::debug!("scroll.listener_closed: {e:?}");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        let _ = document::eval(JS_SCROLL_TEARDOWN);
    });

    metrics
}

/// Install one window listener and share its metrics with the tree below.
#[component]
pub fn ScrollProvider(children: Element) -> Element {
    let metrics = use_scroll_metrics();
    use_context_provider(|| metrics);

    rsx! { {children} }
}

/// Metrics from the nearest `ScrollProvider`, or a static default without one.
pub fn use_viewport() -> Signal<ScrollMetrics> {
    match try_use_context::<Signal<ScrollMetrics>>() {
        Some(metrics) => metrics,
        None => use_signal(ScrollMetrics::default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_transparent_and_tall() {
        let look = header_appearance(0.0, 800.0);
        assert_eq!(look.progress, 0.0);
        assert_eq!(look.background_opacity, 0.0);
        assert_eq!(look.height, HEADER_HEIGHT_EXPANDED);
        assert_eq!(look.tone, HeaderTone::Light);
        assert!(!look.elevated);
    }

    #[test]
    fn halfway_switches_to_dark_tone() {
        // travel = 800 - 96 = 704
        let look = header_appearance(352.0, 800.0);
        assert!((look.progress - 0.5).abs() < 1e-9);
        assert!((look.background_opacity - 0.475).abs() < 1e-9);
        assert!((look.height - 80.0).abs() < 1e-9);
        assert_eq!(look.tone, HeaderTone::Dark);
        assert!(!look.elevated);
    }

    #[test]
    fn past_hero_is_compact_and_elevated() {
        let look = header_appearance(5_000.0, 800.0);
        assert_eq!(look.progress, 1.0);
        assert!((look.background_opacity - 0.95).abs() < 1e-9);
        assert_eq!(look.height, HEADER_HEIGHT_COMPACT);
        assert!(look.elevated);
        assert_eq!(look.class(), "site_header tone_dark elevated");
    }

    #[test]
    fn missing_hero_reports_no_progress() {
        assert_eq!(header_appearance(300.0, 0.0).progress, 0.0);
        assert_eq!(header_appearance(300.0, -20.0).progress, 0.0);
    }

    #[test]
    fn short_hero_uses_minimum_travel() {
        // hero shorter than the header: travel clamps to 1px
        assert_eq!(header_appearance(0.5, 50.0).progress, 0.5);
        assert_eq!(header_appearance(3.0, 50.0).progress, 1.0);
    }

    #[test]
    fn negative_scroll_clamps_to_zero() {
        // iOS rubber-band scrolling reports negative offsets
        assert_eq!(header_appearance(-40.0, 800.0).progress, 0.0);
    }

    #[test]
    fn solid_matches_scrolled_past_hero() {
        assert_eq!(HeaderAppearance::solid(), header_appearance(10_000.0, 700.0));
    }

    #[test]
    fn mobile_breakpoint() {
        assert!(is_mobile(375.0));
        assert!(is_mobile(1023.9));
        assert!(!is_mobile(1024.0));
        assert!(!is_mobile(1440.0));
    }

    #[test]
    fn metrics_deserialize_from_listener_payload() {
        let metrics: ScrollMetrics = serde_json::from_str(
            r#"{"scrollY": 120.5, "heroHeight": 900, "viewportWidth": 1280}"#,
        )
        .unwrap();
        assert_eq!(metrics.scroll_y, 120.5);
        assert_eq!(metrics.hero_height, 900.0);
        assert!(!is_mobile(metrics.viewport_width));
    }
}
