//! # Image carousel
//!
//! [`Carousel`] is the index arithmetic, wrapping at both ends.
//! [`ImageCarousel`] renders it with arrows, indicator dots and a position
//! badge, and can auto-advance on a timer that lives exactly as long as the
//! component. [`use_slides`] holds that per-instance state.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::platform::sleep;
use crate::Icon;

/// Shown in place of an image that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x400?text=No+Image";

/// Position within a fixed number of slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
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

    /// More than one slide, so arrows, dots and the timer apply.
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        Self { index, ..self }
    }

    /// Jump to a slide. Out-of-range indexes are ignored.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// One-based position, e.g. `"2/5"`.
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            String::new()
        } else {
            format!("{}/{}", self.index + 1, self.len)
        }
    }
}

/// Slide state owned by one carousel instance.
#[derive(Clone, Copy, PartialEq)]
pub struct Slides {
    pub position: Signal<Carousel>,
    /// Indexes whose image failed to load.
    pub failed: Signal<Vec<usize>>,
}

/// Track the slides for `images`, advancing every `auto_advance_secs`
/// (0 keeps it manual) while there is more than one image.
///
/// A new image list resets the position and the failed indexes and
/// restarts the timer. The timer is cancelled when the component drops.
pub fn use_slides(images: Vec<String>, auto_advance_secs: u64) -> Slides {
    let len = images.len();
    let mut position = use_signal(|| Carousel::new(len));
    let mut failed = use_signal(Vec::<usize>::new);
    let mut timer = use_signal(|| Option::<Task>::None);

    use_effect(use_reactive(
        (&images, &auto_advance_secs),
        move |(images, auto_advance_secs)| {
            if let Some(task) = *timer.peek() {
                task.cancel();
            }
            let fresh = Carousel::new(images.len());
            position.set(fresh);
            failed.set(Vec::new());

            let task = (auto_advance_secs > 0 && fresh.is_navigable()).then(|| {
                let interval = Duration::from_secs(auto_advance_secs);
                spawn(async move {
                    loop {
                        sleep(interval).await;
                        let next = position.peek().next();
                        position.set(next);
                    }
                })
            });
            timer.set(task);
        },
    ));

    use_drop(move || {
        if let Some(task) = *timer.peek() {
            task.cancel();
        }
    });

    Slides { position, failed }
}

#[component]
pub fn ImageCarousel(
    images: Vec<String>,
    #[props(default = "Car image".to_string())] alt: String,
    /// Advance every `auto_advance_secs`; 0 keeps it manual.
    #[props(default)]
    auto_advance_secs: u64,
    /// Rendered when there are no images. Nothing is rendered if unset.
    #[props(default)]
    empty_label: Option<String>,
    #[props(default = "h-48".to_string())] class: String,
) -> Element {
    let Slides {
        position: mut state,
        mut failed,
    } = use_slides(images.clone(), auto_advance_secs);

    // Until the reset effect runs, a stale position may not fit the new list.
    let current = match state() {
        c if c.len() == images.len() => c,
        _ => Carousel::new(images.len()),
    };
    if current.is_empty() {
        return match empty_label {
            Some(label) => rsx! {
                div {
                    class: "{class} w-full bg-gray-200 dark:bg-gray-700 flex items-center justify-center",
                    span { class: "text-gray-500 dark:text-gray-400", "{label}" }
                }
            },
            None => rsx! {},
        };
    }

    let index = current.index();
    let position = current.position_label();
    let alt_text = format!("{alt} {}", index + 1);
    let src = if failed.read().contains(&index) {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        images[index].clone()
    };

    rsx! {
        div {
            class: "relative group {class} overflow-hidden",
            img {
                key: "{index}",
                class: "w-full h-full object-cover",
                src: "{src}",
                alt: "{alt_text}",
                onerror: move |_| {
                    if !failed.peek().contains(&index) {
                        failed.write().push(index);
                    }
                },
            }
            div {
                class: "absolute top-2 right-2 bg-black/50 text-white px-2 py-1 rounded text-sm",
                "{position}"
            }

            if current.is_navigable() {
                button {
                    class: "absolute left-2 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 text-white hover:bg-black/75",
                    aria_label: "Previous image",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        state.set(current.prev());
                    },
                    Icon { icon: FaChevronLeft, width: 16, height: 16 }
                }
                button {
                    class: "absolute right-2 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 text-white hover:bg-black/75",
                    aria_label: "Next image",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        state.set(current.next());
                    },
                    Icon { icon: FaChevronRight, width: 16, height: 16 }
                }
                div {
                    class: "absolute bottom-2 left-0 right-0 flex justify-center gap-2",
                    for dot in 0..current.len() {
                        button {
                            key: "{dot}",
                            class: if dot == index { "w-2 h-2 rounded-full bg-white" } else { "w-2 h-2 rounded-full bg-white/50" },
                            aria_label: format!("Show image {}", dot + 1),
                            onclick: move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                state.set(current.select(dot));
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
    fn test_wraps_at_both_ends() {
        let c = Carousel::new(3);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.next().next().index(), 2);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.select(2).next().index(), 0);
    }

    #[test]
    fn test_single_and_empty() {
        let one = Carousel::new(1);
        assert!(!one.is_navigable());
        assert_eq!(one.next().index(), 0);
        assert_eq!(one.prev().index(), 0);

        let none = Carousel::new(0);
        assert!(none.is_empty());
        assert_eq!(none.next(), none);
        assert_eq!(none.prev(), none);
        assert_eq!(none.position_label(), "");
    }

    #[test]
    fn test_select() {
        let c = Carousel::new(4).select(3);
        assert_eq!(c.index(), 3);
        assert_eq!(c.position_label(), "4/4");
        assert_eq!(c.select(9).index(), 3);
    }

    mod slides {
        use std::cell::RefCell;
        use std::rc::Rc;

        use dioxus::core::{NoOpMutations, VirtualDom};
        use tokio::time::Instant;

        use super::*;

        type Seen = Rc<RefCell<Vec<(usize, usize)>>>;

        /// Starts with one image, then gains two more after 12 s.
        #[allow(non_snake_case)]
        fn GrowingCard() -> Element {
            let seen = use_context::<Seen>();
            let mut images = use_signal(|| vec!["a.jpg".to_string()]);
            let slides = use_slides(images(), 5);

            use_effect(move || {
                let c = (slides.position)();
                let mut seen = seen.borrow_mut();
                let entry = (c.len(), c.index());
                if seen.last() != Some(&entry) {
                    seen.push(entry);
                }
            });

            use_hook(|| {
                spawn(async move {
                    tokio::time::sleep(Duration::from_secs(12)).await;
                    images.set(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()]);
                })
            });

            rsx! {}
        }

        #[tokio::test(start_paused = true)]
        async fn test_timer_starts_when_images_arrive() {
            let seen: Seen = Rc::default();
            let mut dom = VirtualDom::new(GrowingCard).with_root_context(seen.clone());
            dom.rebuild_in_place();

            let deadline = Instant::now() + Duration::from_secs(23);
            loop {
                tokio::select! {
                    _ = dom.wait_for_work() => {}
                    _ = tokio::time::sleep_until(deadline) => break,
                }
                dom.render_immediate(&mut NoOpMutations);
            }

            // Static while single, reset to the start on the new list, then
            // advancing at 17 s and 22 s.
            assert_eq!(*seen.borrow(), vec![(1, 0), (3, 0), (3, 1), (3, 2)]);
        }
    }
}
