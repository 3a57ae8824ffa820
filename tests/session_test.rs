use arxiv_scraper::{JsonRenderer, Scraper, SearchClient, SearchDefaults, Session, SessionSummary};
use httpmock::prelude::*;

const FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/2310.00001v1</id>
    <published>2023-10-01T00:00:00Z</published>
    <title>Diffusion Models</title>
    <summary>A survey.</summary>
    <link href="http://arxiv.org/abs/2310.00001v1" rel="alternate"/>
  </entry>
</feed>"#;

#[tokio::test]
async fn test_session_runs_one_search_per_submission() {
    let server = MockServer::start();
    let search_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/query")
            .query_param("search_query", "ti:diffusion")
            .query_param("start", "0")
            .query_param("max_results", "5");
        then.status(200).body(FEED);
    });

    let scraper = Scraper::new(SearchClient::new(server.url("/api/query")));
    // Second search uses defaults for start and limit; third has a bad limit.
    let input = "diffusion\n0\n5\ndiffusion\n\n\ndiffusion\n0\nlots\n:q\n";
    let mut prompts = Vec::new();
    let mut renderer = JsonRenderer::new(Vec::new());

    let summary = {
        let mut session = Session::new(
            &scraper,
            input.as_bytes(),
            &mut prompts,
            SearchDefaults { start: 0, limit: 5 },
        );
        session.run(&mut renderer).await.unwrap()
    };

    search_mock.assert_hits(2);
    assert_eq!(
        summary,
        SessionSummary {
            searches: 2,
            failures: 1
        }
    );

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["title"], "Diffusion Models");
    assert_eq!(lines[1]["title"], "Diffusion Models");
    assert!(lines[2]["error"].as_str().unwrap().contains("limit"));

    let prompts = String::from_utf8(prompts).unwrap();
    assert_eq!(prompts.matches("Enter the search term").count(), 4);
    assert!(prompts.contains("(default is 5)"));
}

#[tokio::test]
async fn test_session_keeps_going_after_fetch_error() {
    let server = MockServer::start();
    let failing = server.mock(|when, then| {
        when.method(GET).path("/api/query").query_param("search_query", "ti:down");
        then.status(502);
    });
    let working = server.mock(|when, then| {
        when.method(GET).path("/api/query").query_param("search_query", "ti:up");
        then.status(200).body(FEED);
    });

    let scraper = Scraper::new(SearchClient::new(server.url("/api/query")));
    let input = "down\n\n\nup\n\n\n";
    let mut renderer = JsonRenderer::new(Vec::new());

    let summary = Session::new(&scraper, input.as_bytes(), std::io::sink(), SearchDefaults::default())
        .run(&mut renderer)
        .await
        .unwrap();

    failing.assert();
    working.assert();
    assert_eq!(summary.searches, 1);
    assert_eq!(summary.failures, 1);

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    let first: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
    assert_eq!(first["error"], "Error fetching data from ArXiv! (HTTP 502)");
}

#[tokio::test]
async fn test_session_ends_on_eof_without_searching() {
    let scraper = Scraper::new(SearchClient::new("http://127.0.0.1:9/api/query"));
    let mut renderer = JsonRenderer::new(Vec::new());

    let summary = Session::new(&scraper, "".as_bytes(), std::io::sink(), SearchDefaults::default())
        .run(&mut renderer)
        .await
        .unwrap();

    assert_eq!(summary, SessionSummary::default());
    assert!(renderer.into_inner().is_empty());
}
