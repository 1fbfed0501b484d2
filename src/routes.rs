use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Erc20Balance,
    NftBalance,
    Erc1155Balance,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::Erc20Balance,
        Page::NftBalance,
        Page::Erc1155Balance,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Erc20Balance => "/erc20-balance",
            Page::NftBalance => "/nft-balance",
            Page::Erc1155Balance => "/erc1155-balance",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Erc20Balance => "Token (ERC20)",
            Page::NftBalance => "NFT (ERC721)",
            Page::Erc1155Balance => "ERC1155",
        }
    }

    pub const fn standard(self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::Erc20Balance => Some("ERC20"),
            Page::NftBalance => Some("ERC721"),
            Page::Erc1155Balance => Some("ERC1155"),
        }
    }

    /// Resolves a browser location to the page registered for it.
    ///
    /// Query and fragment are ignored, as is a single trailing slash on
    /// anything but the root.
    pub fn from_path(location: &str) -> Option<Page> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
