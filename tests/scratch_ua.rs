use newspulse::fetcher::fetch;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

async fn run(label: &str, with_al: bool, with_ua: bool) {
    let server = MockServer::start().await;
    let mut m = Mock::given(method("GET")).and(path("/test"));
    if with_al {
        m = m.and(header("accept-language", "en-US,en;q=0.9"));
    }
    if with_ua {
        m = m.and(header(
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/115.0.0.0 Safari/537.36",
        ));
    }
    m.respond_with(
        ResponseTemplate::new(200).set_body_raw("<html><body>ok</body></html>", "text/html"),
    )
    .mount(&server)
    .await;
    let url = format!("{}/test", server.uri());
    let res = fetch(&url).await;
    eprintln!("RESULT[{label}]: {:?}", res.map(|r| r.status));
}

#[tokio::test]
async fn scratch_match() {
    run("path-only", false, false).await;
    run("al-only", true, false).await;
    run("ua-only", false, true).await;
}
