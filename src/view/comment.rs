use std::fmt::Write;

use html_escape::encode_text;

use crate::domain::Comment;

/// Flatten a comment tree into markup.
///
/// Pre-order: each comment is followed directly by its replies, siblings
/// keep their order. Blocks are indented by `level * indent_px` pixels.
pub fn render(comments: &[Comment], indent_px: u32) -> String {
    let mut html = String::new();
    render_into(&mut html, comments, indent_px);
    html
}

fn render_into(html: &mut String, comments: &[Comment], indent_px: u32) {
    for comment in comments {
        // writing into a String cannot fail
        let _ = write!(
            html,
            r#"
          <div style="padding-left: {indent}px;" class="mt-4">
            <div class="text-gray-400">
              <i class="fa fa-sort-up mr-2"></i>
              <strong>{user}</strong> {time_ago}
            </div>
            <p class="text-gray-700">{content}</p>
          </div>
        "#,
            indent = u64::from(comment.level) * u64::from(indent_px),
            user = encode_text(&comment.user),
            time_ago = encode_text(&comment.time_ago),
            content = comment.content,
        );

        if comment.has_replies() {
            render_into(html, &comment.comments, indent_px);
        }
    }
}
