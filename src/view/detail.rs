use html_escape::encode_text;

use crate::app::Result;
use crate::config::ViewConfig;
use crate::domain::{DetailItem, Page};
use crate::fetcher::ResourceClient;
use crate::store::Session;
use crate::view::comment;
use crate::view::template::Template;

const DETAIL_PAGE: Template = Template::new(
    r##"
  <div class="bg-gray-600 min-h-screen pb-8">
  <div class="bg-white text-xl">
    <div class="mx-auto px-4">
      <div class="flex justify-between items-center py-6">
        <div class="flex justify-start">
          <h1 class="font-extrabold">Hacker News</h1>
        </div>
        <div class="items-center justify-end">
          <a href="#/page/{{__current_page__}}" class="text-gray-500">
            <i class="fa fa-times"></i>
          </a>
        </div>
      </div>
    </div>
  </div>

  <div class="h-full border rounded-xl bg-white m-6 p-4 ">
    <h2>{{__title__}}</h2>
    <div class="text-gray-400 h-20">
      {{__content__}}
    </div>

    {{__comments__}}

  </div>
</div>
    "##,
    &["current_page", "title", "content", "comments"],
);

/// Detail page for story `id`, as it appears in the route.
///
/// The story is always fetched fresh. Once it has arrived the story is
/// marked read in the session's listing.
pub async fn render(
    session: &mut Session,
    client: &ResourceClient,
    config: &ViewConfig,
    id: &str,
) -> Result<String> {
    let item = client.detail(id).await?;

    if let Ok(id) = id.trim().parse::<u64>() {
        if !session.mark_read(id) {
            tracing::debug!("Story {} is not in the cached listing", id);
        }
    }

    render_item(&item, session.current_page(), config)
}

pub fn render_item(item: &DetailItem, current_page: Page, config: &ViewConfig) -> Result<String> {
    DETAIL_PAGE
        .begin()
        .fill("current_page", current_page.to_string())?
        .fill("title", encode_text(&item.title))?
        .fill("content", item.content.as_str())?
        .fill("comments", comment::render(&item.comments, config.comment_indent_px))?
        .finish()
}
