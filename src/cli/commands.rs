use std::fs;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{AppContext, ReaderError, Result};
use crate::config::Config;
use crate::router::Router;
use crate::view::{DocumentFile, RenderSink};

const DEFAULT_BROWSE_FILE: &str = "hnreader.html";

/// Visit `fragments` in order within one session and emit the final page.
pub async fn render(ctx: &AppContext, fragments: &[String], output: Option<PathBuf>) -> Result<()> {
    let mut router = ctx.router(ctx.shell()?);

    if fragments.is_empty() {
        router.navigate("").await?;
    }
    for fragment in fragments {
        router.navigate(&normalize_fragment(fragment)).await?;
    }

    let html = router.into_sink().to_html();
    match ctx.output_path(output) {
        Some(path) => {
            fs::write(&path, html)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

/// Interactive session: every stdin line is a fragment change.
pub async fn browse(ctx: &AppContext, output: Option<PathBuf>, open_browser: bool) -> Result<()> {
    let path = ctx
        .output_path(output)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_BROWSE_FILE));
    let mut router = ctx.router(DocumentFile::new(ctx.shell()?, &path));

    navigate_and_report(&mut router, "").await;

    if open_browser {
        if let Err(e) = open::that(&path) {
            eprintln!("Failed to open browser: {}", e);
        }
    }

    println!("Rendering into {}", path.display());
    println!("Enter a fragment per line (#/page/<n>, #/show/<id>, empty for the current page). Ctrl+D quits.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        navigate_and_report(&mut router, &normalize_fragment(&line)).await;
    }

    Ok(())
}

pub fn show_config(ctx: &AppContext, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::default_config_path()?,
    };
    let settings =
        toml::to_string_pretty(&ctx.config).map_err(|e| ReaderError::Other(e.to_string()))?;

    println!("# {}", path.display());
    print!("{}", settings);
    Ok(())
}

/// A failed navigation is reported and the session carries on; the user
/// just navigates again.
async fn navigate_and_report<S: RenderSink>(router: &mut Router<S>, fragment: &str) {
    match router.navigate(fragment).await {
        Ok(route) => println!("{:?}", route),
        Err(e) => eprintln!("Could not open {:?}: {}", fragment, e),
    }
}

/// Accept fragments typed with or without the leading `#`.
pub fn normalize_fragment(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() || input.starts_with('#') {
        input.to_string()
    } else {
        format!("#{}", input)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ApiConfig;
    use crate::fetcher::testing::{feed_json, StubFetcher, FEED_URL, ITEM_URL};

    fn context(stub: Arc<StubFetcher>) -> AppContext {
        let config = Config {
            api: ApiConfig {
                feed_url: FEED_URL.into(),
                item_url: ITEM_URL.into(),
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        AppContext::with_fetcher(config, stub)
    }

    #[test]
    fn test_normalize_fragment() {
        assert_eq!(normalize_fragment(""), "");
        assert_eq!(normalize_fragment("  "), "");
        assert_eq!(normalize_fragment("#/page/2"), "#/page/2");
        assert_eq!(normalize_fragment("/show/42\n"), "#/show/42");
    }

    #[test]
    fn test_render_writes_final_page() {
        let stub = Arc::new(
            StubFetcher::new()
                .with(FEED_URL, &feed_json(30))
                .with(
                    "https://api.test/item/7.json",
                    r#"{"id": 7, "title": "Seven", "content": "", "comments": []}"#,
                ),
        );
        let ctx = context(stub.clone());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        let fragments = vec![
            "#/page/2".to_string(),
            "/show/7".to_string(),
            "#/page/2".to_string(),
        ];
        tokio_test::block_on(render(&ctx, &fragments, Some(path.clone()))).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("bg-yellow-500").count(), 1);
        assert!(html.contains("href=\"#/page/3\""));
        assert_eq!(stub.request_count(FEED_URL), 1);
    }

    #[test]
    fn test_render_stops_at_first_failure() {
        let stub = Arc::new(StubFetcher::new().with(FEED_URL, &feed_json(3)));
        let ctx = context(stub);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        let result = tokio_test::block_on(render(&ctx, &[], Some(path.clone())));

        assert!(matches!(result, Err(ReaderError::PageOutOfRange { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_custom_shell() {
        let dir = tempfile::tempdir().unwrap();
        let shell = dir.path().join("shell.html");
        fs::write(&shell, r#"<main><div id="root">loading</div></main>"#).unwrap();

        let mut ctx = context(Arc::new(StubFetcher::new()));
        ctx.config.output.shell = Some(shell);

        assert_eq!(ctx.shell().unwrap().root(), Some("loading"));
    }
}
