//! Home page route handler.

use axum::response::Html;

const INDEX_HTML: &str = r"<!DOCTYPE html>
<html lang='en'>
<head>
  <meta charset='utf-8'>
  <title>Brewdex - Cafe Directory API</title>
</head>
<body>
  <h1>Brewdex</h1>
  <p>A directory of laptop-friendly cafes: wifi, sockets, seats and coffee prices.</p>
  <ul>
    <li><code>GET /all</code> - every cafe, sorted by name</li>
    <li><code>GET /random</code> - one cafe, picked at random</li>
    <li><code>GET /search?loc=...</code> - cafes at an exact location</li>
    <li><code>POST /add</code> - add a cafe</li>
    <li><code>PATCH /update-price/{id}?new_price=...</code> - change a coffee price</li>
    <li><code>DELETE /report-closed/{id}?api_key=...</code> - report a cafe as closed</li>
  </ul>
</body>
</html>
";

/// Serve the static index page describing the API.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
