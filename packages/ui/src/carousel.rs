use dioxus::prelude::*;
use std::time::Duration;

/// Delay between automatic slide changes in an open modal.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(4000);

/// Index into a fixed-length image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step forward, wrapping to the first image after the last.
    pub fn advance(&mut self) {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Carousel state that advances on its own every `CAROUSEL_INTERVAL`.
///
/// The timer lives as long as the calling component, so mounting the modal
/// fresh for each open item starts at the first image.
pub fn use_carousel(len: usize) -> Signal<Carousel> {
    let mut carousel = use_signal(|| Carousel::new(len));

    use_future(move || async move {
        if len < 2 {
            return;
        }
        loop {
            gloo_timers::future::sleep(CAROUSEL_INTERVAL).await;
            carousel.with_mut(Carousel::advance);
        }
    });

    carousel
}

#[derive(Props, Clone, PartialEq)]
pub struct CarouselViewProps {
    pub carousel: Signal<Carousel>,
    pub images: Vec<&'static str>,
    pub alt: String,
}

/// Current image plus one indicator dot per slide.
#[component]
pub fn CarouselView(props: CarouselViewProps) -> Element {
    let mut carousel = props.carousel;
    let current = carousel().index();
    let lang = crate::use_lang();
    let image_label = crate::t(lang, "common.image");

    let Some(src) = props.images.get(current).copied() else {
        return rsx! {};
    };

    rsx! {
        div { class: "carousel",
            img { class: "carousel_image", src: "{src}", alt: "{props.alt}" }
            if props.images.len() > 1 {
                div { class: "carousel_dots",
                    for idx in 0..props.images.len() {
                        button {
                            key: "{idx}",
                            r#type: "button",
                            class: if idx == current { "carousel_dot active" } else { "carousel_dot" },
                            "aria-label": "{image_label} {idx + 1}",
                            "aria-current": if idx == current { "true" } else { "false" },
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                carousel.with_mut(|c| c.select(idx));
                            },
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let mut c = Carousel::new(3);
        c.advance();
        c.advance();
        assert_eq!(c.index(), 2);
        c.advance();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut c = Carousel::new(4);
        c.select(2);
        assert_eq!(c.index(), 2);
        c.select(4);
        assert_eq!(c.index(), 2);
        c.select(usize::MAX);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn reset_returns_to_first_image() {
        let mut c = Carousel::new(10);
        c.select(7);
        c.reset();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn single_and_empty_lists_stay_put() {
        let mut single = Carousel::new(1);
        single.advance();
        assert_eq!(single.index(), 0);

        let mut empty = Carousel::new(0);
        assert!(empty.is_empty());
        empty.advance();
        empty.select(0);
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn interval_is_four_seconds() {
        assert_eq!(CAROUSEL_INTERVAL.as_millis(), 4000);
    }
}
