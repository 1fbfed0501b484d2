#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::routes::Page;

mod balance;
mod home;

pub fn app(cx: Scope) -> Element {
    cx.render(rsx! {
        Router {
            div {
                class: "app",
                Route {
                    to: Page::Home.path(),
                    home::Home {}
                }
                Route {
                    to: Page::Erc20Balance.path(),
                    balance::Erc20Balance {}
                }
                Route {
                    to: Page::NftBalance.path(),
                    balance::NftBalance {}
                }
                Route {
                    to: Page::Erc1155Balance.path(),
                    balance::Erc1155Balance {}
                }
            }
        }
    })
}
