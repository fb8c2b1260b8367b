#![allow(dead_code)]

use axum::Router;
use reqwest::Client;
use std::time::Duration;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

/// A URL on which nothing is listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn client(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().expect("client")
}

pub const HABR_PAGE: &str = r#"
<html><body>
  <div class="vacancy-card">
    <div class="vacancy-card__company-title"><a href="/companies/acme">Acme</a></div>
    <a class="vacancy-card__title-link" href="/vacancies/1">Rust developer</a>
    <div class="vacancy-card__meta"><a href="/vacancies?city_id=1">Москва</a> • Полный рабочий день</div>
    <div class="vacancy-card__salary">от 150 000 до 250 000 ₽</div>
    <div class="vacancy-card__skills">Rust • PostgreSQL</div>
  </div>
  <div class="vacancy-card">
    <a class="vacancy-card__title-link" href="/vacancies/2">Backend engineer</a>
    <div class="vacancy-card__salary">до 300 000 ₽</div>
  </div>
  <div class="vacancy-card">
    <div class="vacancy-card__company-title">Nameless Ltd</div>
  </div>
</body></html>
"#;
