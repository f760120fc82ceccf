use std::fmt::Write;
use std::ops::Range;

use html_escape::encode_text;

use crate::app::{ReaderError, Result};
use crate::config::ViewConfig;
use crate::domain::{FeedItem, Page};
use crate::fetcher::ResourceClient;
use crate::store::Session;
use crate::view::template::Template;

const FEED_PAGE: Template = Template::new(
    r##"
  <div class="bg-gray-600 min-h-screen">
  <div class="bg-white text-xl">
    <div class="mx-auto px-4">
      <div class="flex justify-between items-center py-6">
        <div class="flex justify-start">
          <h1 class="font-extrabold">Hacker News</h1>
        </div>
        <div class="items-center justify-end">
          <a href="#/page/{{__prev_page__}}" class="text-gray-500">
            Previous
          </a>
          <a href="#/page/{{__next_page__}}" class="text-gray-500 ml-4">
            Next
          </a>
        </div>
      </div>
    </div>
  </div>
  <div class="p-4 text-2xl text-gray-700">
    {{__news_feed__}}
  </div>
</div>
  "##,
    &["news_feed", "prev_page", "next_page"],
);

/// Feed page for `page`, loading the listing into `session` if needed.
pub async fn render(
    session: &mut Session,
    client: &ResourceClient,
    config: &ViewConfig,
    page: Page,
) -> Result<String> {
    let items = session.get_or_load_feed(client).await?;
    render_page(items, page, config)
}

/// Indices of the stories shown on `page`: `[page - 1, page * page_size)`.
///
/// Consecutive pages overlap (page 2 starts at index 1). A window reaching
/// past the end of the listing is rejected, as is page 0 whose window would
/// start before the first story. A non-numeric page shows nothing.
pub fn page_window(page: Page, page_size: u32, len: usize) -> Result<Range<usize>> {
    let n = match page {
        Page::Number(n) => n,
        Page::NotANumber => return Ok(0..0),
    };
    let out_of_range = || ReaderError::PageOutOfRange { page, len };

    let start = n.checked_sub(1).ok_or_else(out_of_range)?;
    let end = n.checked_mul(u64::from(page_size)).ok_or_else(out_of_range)?;

    if end <= start {
        return Ok(0..0);
    }
    if end > len as u64 {
        return Err(out_of_range());
    }

    Ok(start as usize..end as usize)
}

pub fn render_page(items: &[FeedItem], page: Page, config: &ViewConfig) -> Result<String> {
    let window = page_window(page, config.page_size, items.len())?;

    let mut cards = String::new();
    for item in &items[window] {
        write_card(&mut cards, item);
    }

    FEED_PAGE
        .begin()
        .fill("news_feed", cards)?
        .fill("prev_page", page.previous().to_string())?
        .fill("next_page", page.next(config.last_page).to_string())?
        .finish()
}

fn write_card(html: &mut String, item: &FeedItem) {
    let background = if item.read { "bg-yellow-500" } else { "bg-white" };

    // writing into a String cannot fail
    let _ = write!(
        html,
        r#"
      <div class="p-6 {background} mt-6 rounded-lg shadow-md transition-colors duration-500 hover:bg-green-100">
      <div class="flex">
        <div class="flex-auto">
          <a href="{route}">{title}</a>
        </div>
        <div class="text-center text-sm">
          <div class="w-10 text-white bg-green-300 rounded-lg px-0 py-2">{comments_count}</div>
        </div>
      </div>
      <div class="flex mt-3">
        <div class="grid grid-cols-3 text-sm text-gray-500">
          <div><i class="fas fa-user mr-1"></i>{user}</div>
          <div><i class="fas fa-heart mr-1"></i>{points}</div>
          <div><i class="far fa-clock mr-1"></i>{time_ago}</div>
        </div>
      </div>
    </div>
  "#,
        route = item.detail_route(),
        title = encode_text(&item.title),
        comments_count = item.comments_count,
        user = encode_text(&item.user),
        points = item.points,
        time_ago = encode_text(&item.time_ago),
    );
}
