use dioxus::prelude::*;

use crate::routes::Page;

#[inline_props]
fn BalancePage(cx: Scope, page: Page) -> Element {
    let title = page.title();
    let standard = page.standard().unwrap_or_default();
    cx.render(rsx!(
        div {
            class: "container",
            Link {
                to: Page::Home.path(),
                class: "back-link",
                i {
                    class: "bi bi-arrow-left",
                }
                " Back"
            }
            h2 {
                "{title} Balance"
            }
            p {
                class: "lead",
                "Check the {standard} holdings of a wallet address."
            }
        }
    ))
}

pub fn Erc20Balance(cx: Scope) -> Element {
    cx.render(rsx!(BalancePage {
        page: Page::Erc20Balance
    }))
}

pub fn NftBalance(cx: Scope) -> Element {
    cx.render(rsx!(BalancePage {
        page: Page::NftBalance
    }))
}

pub fn Erc1155Balance(cx: Scope) -> Element {
    cx.render(rsx!(BalancePage {
        page: Page::Erc1155Balance
    }))
}
