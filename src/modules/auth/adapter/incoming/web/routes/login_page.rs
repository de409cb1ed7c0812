use actix_web::{get, http::header::ContentType, HttpResponse};

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="robots" content="noindex">
<title>Admin | Login</title>
</head>
<body>
<main>
  <h1>Admin</h1>
  <form id="login-form">
    <label>Email <input type="email" name="email" autocomplete="username" required></label>
    <label>Password <input type="password" name="password" autocomplete="current-password" required></label>
    <button type="submit">Sign in</button>
    <p id="login-error" role="alert" hidden></p>
  </form>
</main>
<script>
document.getElementById("login-form").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = new FormData(event.target);
  const response = await fetch("/login", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    credentials: "same-origin",
    body: JSON.stringify({ email: form.get("email"), password: form.get("password") }),
  });
  const body = await response.json().catch(() => ({}));
  if (response.ok && body.success) {
    window.location.assign(body.data.redirect_to);
    return;
  }
  const error = document.getElementById("login-error");
  error.textContent = (body.error && body.error.message) || "Login failed";
  error.hidden = false;
});
</script>
</body>
</html>
"#;

/// Login form
///
/// Signed-in visitors never reach this; the gate sends them to `/admin`.
#[utoipa::path(
    get,
    path = "/login",
    tag = "auth",
    responses(
        (status = 200, description = "HTML login form", content_type = "text/html"),
        (status = 307, description = "Already signed in; redirected to /admin"),
    )
)]
#[get("/login")]
pub async fn login_page_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header(("Cache-Control", "no-store"))
        .body(LOGIN_PAGE)
}
