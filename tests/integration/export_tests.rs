//! Integration tests for sitemap export
//!
//! These tests use wiremock to serve sitemap trees and check the full
//! fetch, traverse, and CSV write cycle end-to-end.

use flate2::write::GzEncoder;
use flate2::Compression;
use sitemap2csv::config::ClientConfig;
use sitemap2csv::output::{processed_report, write_csv_file};
use sitemap2csv::sitemap::{get_records, Fetcher, Record};
use sitemap2csv::SitemapError;
use std::io::Write;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gzip(data: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

fn test_fetcher() -> Fetcher {
    Fetcher::new(&ClientConfig::default()).expect("Failed to build fetcher")
}

#[tokio::test]
async fn test_single_urlset_scenario() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<urlset><url><loc>http://x/</loc><lastmod>2024-01-01</lastmod></url></urlset>",
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/sitemap.xml", mock_server.uri());
    let result = get_records(&test_fetcher(), &url)
        .await
        .expect("Traversal failed");

    let rows: Vec<[&str; 2]> = result.records.iter().map(Record::as_row).collect();
    assert_eq!(rows, vec![["loc", "lastmod"], ["http://x/", "2024-01-01"]]);
    assert_eq!(result.processed.len(), 1);
    assert_eq!(result.processed[&url], 1);
}

#[tokio::test]
async fn test_full_export_of_gzipped_index_tree() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let index = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap>
    <loc>
      {base}/sitemap-pages.xml
    </loc>
    <lastmod>2024-03-01</lastmod>
  </sitemap>
  <sitemap>
    <loc>{base}/sitemap-posts.xml.gz</loc>
  </sitemap>
</sitemapindex>"#,
        base = base_url
    );
    let pages = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/</loc><lastmod>2024-03-01</lastmod></url>
  <url><loc>https://example.com/about</loc></url>
</urlset>"#;
    let posts = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/posts/1</loc><lastmod>2024-02-10</lastmod></url>
  <url><loc>https://example.com/posts/2</loc><lastmod>2024-02-11</lastmod></url>
  <url><loc>https://example.com/posts/3</loc><lastmod>2024-02-12</lastmod></url>
</urlset>"#;

    Mock::given(method("GET"))
        .and(path("/sitemap_index.xml.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(gzip(&index)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap-pages.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pages))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap-posts.xml.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(gzip(posts)))
        .mount(&mock_server)
        .await;

    let result = get_records(
        &test_fetcher(),
        &format!("{}/sitemap_index.xml.gz", base_url),
    )
    .await
    .expect("Traversal failed");

    assert_eq!(result.page_count(), 5);
    assert_eq!(
        processed_report(&result.processed),
        vec![
            format!("Processed 2 URLs from {}/sitemap-pages.xml", base_url),
            format!("Processed 3 URLs from {}/sitemap-posts.xml.gz", base_url),
        ]
    );

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("sitemap.csv");
    write_csv_file(&csv_path, &result, true).expect("Failed to write CSV");

    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        content,
        "loc,lastmod\n\
         https://example.com/,2024-03-01\n\
         https://example.com/about,\n\
         https://example.com/posts/1,2024-02-10\n\
         https://example.com/posts/2,2024-02-11\n\
         https://example.com/posts/3,2024-02-12\n"
    );

    let headerless_path = dir.path().join("no-header.csv");
    write_csv_file(&headerless_path, &result, false).expect("Failed to write CSV");
    let headerless = std::fs::read_to_string(&headerless_path).unwrap();
    assert_eq!(headerless.lines().count(), 5);
    assert!(headerless.starts_with("https://example.com/,"));
}

#[tokio::test]
async fn test_failed_leaf_aborts_whole_export() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/index.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<sitemapindex>\
             <sitemap><loc>{0}/ok.xml</loc></sitemap>\
             <sitemap><loc>{0}/server-error.xml</loc></sitemap>\
             </sitemapindex>",
            base_url
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<urlset><url><loc>https://example.com/</loc></url></urlset>"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/server-error.xml"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = get_records(&test_fetcher(), &format!("{}/index.xml", base_url))
        .await
        .expect_err("Traversal should fail");

    assert!(matches!(err, SitemapError::Network { .. }));
    assert_eq!(err.url(), format!("{}/server-error.xml", base_url));
}

#[tokio::test]
async fn test_non_sitemap_document_is_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Home</title></head></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let err = get_records(&test_fetcher(), &format!("{}/", mock_server.uri()))
        .await
        .expect_err("Traversal should fail");

    assert!(matches!(err, SitemapError::UnknownFormat { .. }));
}
