use axum::http::StatusCode;
use include_dir::{include_dir, Dir, File};
use mime_guess::Mime;

use crate::routes::Page;

static STATIC: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

pub const SHELL: &str = "index.html";

pub enum Asset {
  File(&'static File<'static>),
  Shell(StatusCode),
  Missing,
}

impl Asset {
  pub fn outcome(&self) -> &'static str {
    match self {
      Asset::File(_) => "asset",
      Asset::Shell(_) => "shell",
      Asset::Missing => "missing",
    }
  }
}

pub fn shell() -> Option<&'static File<'static>> {
  STATIC.get_file(SHELL)
}

pub fn mime_for(file: &File<'_>) -> Mime {
  mime_guess::from_path(file.path()).first_or_octet_stream()
}

/// Decides how a request path is answered: an embedded file, the client
/// shell, or nothing.
pub fn resolve(path: &str) -> Asset {
  if Page::from_path(path).is_some() {
    return Asset::Shell(StatusCode::OK);
  }
  let relative = path.trim_start_matches('/');
  if relative.split('/').any(|segment| segment == "..") {
    return Asset::Missing;
  }
  if relative == "api" || relative.starts_with("api/") {
    return Asset::Missing;
  }
  if let Some(file) = STATIC.get_file(relative) {
    return Asset::File(file);
  }
  let last = relative.rsplit('/').next().unwrap_or_default();
  if last.contains('.') {
    Asset::Missing
  } else {
    // Unknown client route: the router renders no match.
    Asset::Shell(StatusCode::NOT_FOUND)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_routes_get_the_shell() {
    for page in Page::ALL {
      assert!(matches!(resolve(page.path()), Asset::Shell(StatusCode::OK)));
    }
    assert!(matches!(resolve("/nft-balance/"), Asset::Shell(StatusCode::OK)));
  }

  #[test]
  fn embedded_files_are_served_with_their_mime() {
    let Asset::File(file) = resolve("/style.css") else {
      panic!("style.css is not embedded");
    };
    assert_eq!(mime_for(file), mime_guess::mime::TEXT_CSS);
    assert!(shell().is_some());
  }

  #[test]
  fn unknown_routes_boot_the_shell_as_not_found() {
    assert!(matches!(resolve("/wallets"), Asset::Shell(StatusCode::NOT_FOUND)));
    assert!(matches!(
      resolve("/nft-balance/42"),
      Asset::Shell(StatusCode::NOT_FOUND)
    ));
  }

  #[test]
  fn missing_files_traversal_and_api_are_refused() {
    for path in [
      "/pkg/missing.js",
      "/favicon.ico",
      "/../Cargo.toml",
      "/pkg/../index.html",
      "/api",
      "/api/balance/erc20",
    ] {
      assert!(matches!(resolve(path), Asset::Missing), "{path}");
    }
  }
}
