use dioxus::prelude::*;

use crate::{
    client::components::{Card, NavCard},
    routes::Page,
};

pub static CARDS: [Card; 3] = [
    Card {
        to: Page::NftBalance,
        icon: "bi-file-earmark-zip-fill",
        accent: "#007bff",
    },
    Card {
        to: Page::Erc20Balance,
        icon: "bi-currency-dollar",
        accent: "#28a745",
    },
    Card {
        to: Page::Erc1155Balance,
        icon: "bi-stack",
        accent: "#ff7f50",
    },
];

pub fn Home(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "container",
            h2 {
                "Welcome to TokenHub"
            }
            h3 {
                class: "section-title",
                "Balance Check"
            }
            div {
                class: "row",
                CARDS.iter().map(|card| rsx!(
                    NavCard {
                        key: "{card.to}",
                        card: card,
                    }
                ))
            }
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::components::{open_card, RecordingNavigator};

    #[test]
    fn cards_navigate_to_their_balance_pages() {
        let expected = ["/nft-balance", "/erc20-balance", "/erc1155-balance"];
        for (card, path) in CARDS.iter().zip(expected) {
            let nav = RecordingNavigator::default();
            open_card(&nav, card);
            assert_eq!(nav.routes(), vec![path.to_string()]);
        }
    }

    #[test]
    fn cards_keep_landing_page_order() {
        let titles: Vec<_> = CARDS.iter().map(Card::title).collect();
        assert_eq!(titles, ["NFT (ERC721)", "Token (ERC20)", "ERC1155"]);
    }

    #[test]
    fn no_card_leads_home_or_off_the_route_table() {
        for card in &CARDS {
            assert_ne!(card.to, Page::Home);
            assert_eq!(Page::from_path(card.to.path()), Some(card.to));
        }
    }
}
