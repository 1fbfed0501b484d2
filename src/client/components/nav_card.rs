use dioxus::prelude::*;
use dioxus::router::RouterService;

use crate::routes::Page;

pub trait Navigator {
    fn navigate(&self, route: &str);
}

impl Navigator for RouterService {
    fn navigate(&self, route: &str) {
        self.push_route(route, None, None);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Card {
    pub to: Page,
    pub icon: &'static str,
    pub accent: &'static str,
}

impl Card {
    pub fn title(&self) -> &'static str {
        self.to.title()
    }
}

pub fn open_card(nav: &impl Navigator, card: &Card) {
    log::debug!("navigating to {}", card.to);
    nav.navigate(card.to.path());
}

#[inline_props]
pub fn NavCard<'a>(cx: Scope<'a>, card: &'a Card) -> Element {
    let router = use_router(&cx);
    let title = card.title();
    cx.render(rsx!(
        div {
            class: "col",
            div {
                class: "card",
                onclick: move |_| open_card(router, card),
                div {
                    class: "card-body",
                    i {
                        class: "bi {card.icon}",
                        style: "color: {card.accent}",
                    }
                    h5 {
                        class: "card-title",
                        "{title}"
                    }
                    button {
                        class: "btn",
                        "Check Now!"
                    }
                }
            }
        }
    ))
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingNavigator(std::cell::RefCell<Vec<String>>);

#[cfg(test)]
impl RecordingNavigator {
    pub fn routes(self) -> Vec<String> {
        self.0.into_inner()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.0.borrow_mut().push(route.to_string());
    }
}
