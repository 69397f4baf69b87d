//! Bootstrap page.
//!
//! Served on first load so the client shows recent history before the live
//! channel attaches. Fragments are the ones rendered at submission time.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{domain::ChatMessage, ui::state::AppState};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>chatrelay</title>
<style>
body { font-family: sans-serif; margin: 0 auto; max-width: 40em; }
#inbox .message { padding: 4px 0; border-bottom: 1px solid #eee; }
#input { display: flex; gap: 4px; margin-top: 8px; }
#input input { flex: 1; }
</style>
</head>
<body>
<div id="inbox">
"#;

const PAGE_TAIL: &str = r#"</div>
<form id="input">
<input name="body" id="message" autocomplete="off" autofocus>
<button type="submit">Post</button>
</form>
<script>
(function () {
  var inbox = document.getElementById("inbox");
  var input = document.getElementById("message");
  var scheme = location.protocol === "https:" ? "wss://" : "ws://";
  var socket = new WebSocket(scheme + location.host + "/chatsocket");
  socket.onmessage = function (event) {
    var frame = JSON.parse(event.data);
    if (frame.error) { console.warn(frame.error); return; }
    if (document.getElementById("m" + frame.id)) { return; }
    inbox.insertAdjacentHTML("beforeend", frame.html);
    inbox.lastElementChild.scrollIntoView();
  };
  document.getElementById("input").onsubmit = function (event) {
    event.preventDefault();
    if (input.value === "") { return; }
    socket.send(JSON.stringify({ body: input.value }));
    input.value = "";
  };
})();
</script>
</body>
</html>
"#;

/// Index page listing the current history
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.hub.history_for_replay().await))
}

fn render_page(messages: &[ChatMessage]) -> String {
    let mut page = String::from(PAGE_HEAD);
    for message in messages {
        page.push_str(message.html());
        page.push('\n');
    }
    page.push_str(PAGE_TAIL);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageBody, MessageId};

    #[test]
    fn test_render_page_lists_fragments_in_order() {
        // given:
        let messages: Vec<_> = ["first", "second"]
            .iter()
            .map(|text| {
                ChatMessage::new(
                    MessageId::generate(),
                    MessageBody::new(text.to_string()).unwrap(),
                    format!("<div class=\"message\">{}</div>", text),
                )
            })
            .collect();

        // when:
        let page = render_page(&messages);

        // then:
        let first = page.find("first").unwrap();
        let second = page.find("second").unwrap();
        assert!(first < second);
        assert!(page.contains("/chatsocket"));
    }

    #[test]
    fn test_render_page_without_history() {
        let page = render_page(&[]);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(!page.contains("class=\"message\" id="));
    }
}
